//! Enumerates the scalar element types a lazy tensor node can be tagged with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shape::ShapeError;

/// Logical element type carried by a [`Shape`](crate::Shape).
///
/// `Undefined` is the sentinel for shapes whose element type has not been
/// resolved yet; it renders as `UNKNOWN_SCALAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScalarType {
    /// 8-bit unsigned integer.
    Byte,
    /// 8-bit signed integer.
    Char,
    /// 16-bit signed integer.
    Short,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer, the type of index tensors.
    Long,
    /// IEEE-754 half precision.
    Half,
    /// IEEE-754 single precision.
    Float,
    /// IEEE-754 double precision.
    Double,
    ComplexHalf,
    ComplexFloat,
    ComplexDouble,
    Bool,
    QInt8,
    QUInt8,
    QInt32,
    /// 16-bit brain floating point.
    BFloat16,
    /// Two 4-bit unsigned quantized values packed per byte.
    QUInt4x2,
    /// Four 2-bit unsigned quantized values packed per byte.
    QUInt2x4,
    Float8E5M2,
    Float8E4M3Fn,
    #[default]
    Undefined,
}

impl ScalarType {
    /// Every scalar type in tag order.
    pub const ALL: [ScalarType; 21] = [
        ScalarType::Byte,
        ScalarType::Char,
        ScalarType::Short,
        ScalarType::Int,
        ScalarType::Long,
        ScalarType::Half,
        ScalarType::Float,
        ScalarType::Double,
        ScalarType::ComplexHalf,
        ScalarType::ComplexFloat,
        ScalarType::ComplexDouble,
        ScalarType::Bool,
        ScalarType::QInt8,
        ScalarType::QUInt8,
        ScalarType::QInt32,
        ScalarType::BFloat16,
        ScalarType::QUInt4x2,
        ScalarType::QUInt2x4,
        ScalarType::Float8E5M2,
        ScalarType::Float8E4M3Fn,
        ScalarType::Undefined,
    ];

    /// Human-readable name used when rendering shapes.
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Byte => "Byte",
            ScalarType::Char => "Char",
            ScalarType::Short => "Short",
            ScalarType::Int => "Int",
            ScalarType::Long => "Long",
            ScalarType::Half => "Half",
            ScalarType::Float => "Float",
            ScalarType::Double => "Double",
            ScalarType::ComplexHalf => "ComplexHalf",
            ScalarType::ComplexFloat => "ComplexFloat",
            ScalarType::ComplexDouble => "ComplexDouble",
            ScalarType::Bool => "Bool",
            ScalarType::QInt8 => "QInt8",
            ScalarType::QUInt8 => "QUInt8",
            ScalarType::QInt32 => "QInt32",
            ScalarType::BFloat16 => "BFloat16",
            ScalarType::QUInt4x2 => "QUInt4x2",
            ScalarType::QUInt2x4 => "QUInt2x4",
            ScalarType::Float8E5M2 => "Float8_e5m2",
            ScalarType::Float8E4M3Fn => "Float8_e4m3fn",
            ScalarType::Undefined => "UNKNOWN_SCALAR",
        }
    }

    /// Produces a stable tag used when serializing or crossing FFI boundaries.
    pub fn tag(self) -> u32 {
        match self {
            ScalarType::Byte => 0,
            ScalarType::Char => 1,
            ScalarType::Short => 2,
            ScalarType::Int => 3,
            ScalarType::Long => 4,
            ScalarType::Half => 5,
            ScalarType::Float => 6,
            ScalarType::Double => 7,
            ScalarType::ComplexHalf => 8,
            ScalarType::ComplexFloat => 9,
            ScalarType::ComplexDouble => 10,
            ScalarType::Bool => 11,
            ScalarType::QInt8 => 12,
            ScalarType::QUInt8 => 13,
            ScalarType::QInt32 => 14,
            ScalarType::BFloat16 => 15,
            ScalarType::QUInt4x2 => 16,
            ScalarType::QUInt2x4 => 17,
            ScalarType::Float8E5M2 => 18,
            ScalarType::Float8E4M3Fn => 19,
            ScalarType::Undefined => 20,
        }
    }

    /// Reconstructs a `ScalarType` from its serialized tag representation.
    pub fn from_tag(tag: u32) -> Option<Self> {
        Self::ALL.get(tag as usize).copied()
    }

    /// Returns the number of bytes per element when each element occupies whole bytes.
    pub fn size_in_bytes(self) -> Option<usize> {
        match self {
            ScalarType::Byte
            | ScalarType::Char
            | ScalarType::Bool
            | ScalarType::QInt8
            | ScalarType::QUInt8
            | ScalarType::Float8E5M2
            | ScalarType::Float8E4M3Fn => Some(1),
            ScalarType::Short | ScalarType::Half | ScalarType::BFloat16 => Some(2),
            ScalarType::Int | ScalarType::Float | ScalarType::QInt32 | ScalarType::ComplexHalf => {
                Some(4)
            }
            ScalarType::Long | ScalarType::Double | ScalarType::ComplexFloat => Some(8),
            ScalarType::ComplexDouble => Some(16),
            ScalarType::QUInt4x2 | ScalarType::QUInt2x4 | ScalarType::Undefined => None,
        }
    }

    /// Returns `true` for real floating-point kinds, including float8 variants.
    pub fn is_floating_point(self) -> bool {
        matches!(
            self,
            ScalarType::Half
                | ScalarType::Float
                | ScalarType::Double
                | ScalarType::BFloat16
                | ScalarType::Float8E5M2
                | ScalarType::Float8E4M3Fn
        )
    }

    /// Returns `true` when the scalar type is complex.
    pub fn is_complex(self) -> bool {
        matches!(
            self,
            ScalarType::ComplexHalf | ScalarType::ComplexFloat | ScalarType::ComplexDouble
        )
    }

    /// Returns `true` for plain integer kinds; `Bool` counts only when `include_bool` is set.
    pub fn is_integral(self, include_bool: bool) -> bool {
        match self {
            ScalarType::Byte
            | ScalarType::Char
            | ScalarType::Short
            | ScalarType::Int
            | ScalarType::Long => true,
            ScalarType::Bool => include_bool,
            _ => false,
        }
    }

    /// Returns `true` for quantized storage kinds.
    pub fn is_quantized(self) -> bool {
        matches!(
            self,
            ScalarType::QInt8
                | ScalarType::QUInt8
                | ScalarType::QInt32
                | ScalarType::QUInt4x2
                | ScalarType::QUInt2x4
        )
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarType {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|scalar_type| scalar_type.name() == s)
            .ok_or_else(|| ShapeError::UnknownScalarType(s.to_string()))
    }
}

impl Serialize for ScalarType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ScalarType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
