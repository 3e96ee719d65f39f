//! Element type and dimension metadata for lazily evaluated tensors.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::dtype::ScalarType;
use crate::env;
use crate::hashing::Fingerprint;

/// Inline storage for the dimension list; ranks above four spill to the heap.
pub(crate) type Sizes = SmallVec<[i64; 4]>;

/// Errors surfaced while reading, mutating or building shapes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("dimension index {index} is out of range for shape of rank {rank}")]
    OutOfRange { index: usize, rank: usize },
    #[error("dimension {index} has negative size {size}")]
    NegativeDimension { index: usize, size: i64 },
    #[error("got {scalar_types} scalar types but {sizes} size lists")]
    LengthMismatch { scalar_types: usize, sizes: usize },
    #[error("symbolic flags cover {flags} dimensions but shape has rank {rank}")]
    SymbolicRankMismatch { rank: usize, flags: usize },
    #[error("element count of shape {sizes:?} overflows i64")]
    ElementCountOverflow { sizes: Vec<i64> },
    #[error("unknown scalar type name '{0}'")]
    UnknownScalarType(String),
}

/// Convenience alias for results returned by shape routines.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Scalar type plus row-major dimension sizes of a tensor that may not exist yet.
///
/// Equality, hashing and rendering only look at the scalar type and the sizes;
/// symbolic flags are carried along as metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "ShapeRepr")]
pub struct Shape {
    scalar_type: ScalarType,
    sizes: Sizes,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_symbolic: Option<Vec<bool>>,
}

impl Shape {
    /// Stores `scalar_type` and `sizes` verbatim.
    ///
    /// Sizes are expected to be non-negative; use [`Shape::try_new`] when the
    /// input comes from an untrusted description.
    pub fn new(scalar_type: ScalarType, sizes: impl IntoIterator<Item = i64>) -> Self {
        Self {
            scalar_type,
            sizes: sizes.into_iter().collect(),
            is_symbolic: None,
        }
    }

    /// Like [`Shape::new`] but rejects negative sizes.
    pub fn try_new(
        scalar_type: ScalarType,
        sizes: impl IntoIterator<Item = i64>,
    ) -> ShapeResult<Self> {
        let shape = Self::new(scalar_type, sizes);
        shape.validate()?;
        Ok(shape)
    }

    /// Checks that every size is non-negative, reporting the first offending axis.
    pub fn validate(&self) -> ShapeResult<()> {
        check_sizes(&self.sizes)
    }

    pub fn scalar_type(&self) -> ScalarType {
        self.scalar_type
    }

    /// Returns the rank (number of dimensions).
    pub fn dim(&self) -> usize {
        self.sizes.len()
    }

    pub fn sizes(&self) -> &[i64] {
        &self.sizes
    }

    /// Returns the extent of dimension `index`.
    pub fn size(&self, index: usize) -> ShapeResult<i64> {
        self.sizes
            .get(index)
            .copied()
            .ok_or_else(|| ShapeError::OutOfRange {
                index,
                rank: self.dim(),
            })
    }

    /// Total number of elements; `1` for a rank-0 shape.
    ///
    /// Fails with [`ShapeError::ElementCountOverflow`] when the product does
    /// not fit in an `i64`.
    pub fn numel(&self) -> ShapeResult<i64> {
        let mut count = 1i64;
        for size in &self.sizes {
            count = count
                .checked_mul(*size)
                .ok_or_else(|| ShapeError::ElementCountOverflow {
                    sizes: self.sizes.to_vec(),
                })?;
        }
        Ok(count)
    }

    pub fn set_scalar_type(&mut self, scalar_type: ScalarType) {
        self.scalar_type = scalar_type;
    }

    /// Replaces the extent of dimension `index`.
    ///
    /// Fails with [`ShapeError::OutOfRange`] for an index past the current rank
    /// and with [`ShapeError::NegativeDimension`] for a negative `value`. The
    /// shape is untouched on failure.
    pub fn set_size(&mut self, index: usize, value: i64) -> ShapeResult<()> {
        let rank = self.dim();
        let slot = self
            .sizes
            .get_mut(index)
            .ok_or(ShapeError::OutOfRange { index, rank })?;
        if value < 0 {
            return Err(ShapeError::NegativeDimension { index, size: value });
        }
        *slot = value;
        Ok(())
    }

    /// Per-dimension symbolic flags, if any were attached.
    pub fn symbolic_dims(&self) -> Option<&[bool]> {
        self.is_symbolic.as_deref()
    }

    /// Returns `true` when at least one dimension is marked symbolic.
    pub fn is_symbolic(&self) -> bool {
        self.is_symbolic
            .as_ref()
            .is_some_and(|flags| flags.iter().any(|flag| *flag))
    }

    /// Returns a copy carrying `symbolic_dims`; `None` clears existing flags.
    pub fn with_symbolic_dims(&self, symbolic_dims: Option<Vec<bool>>) -> ShapeResult<Shape> {
        if let Some(flags) = &symbolic_dims {
            if flags.len() != self.dim() {
                return Err(ShapeError::SymbolicRankMismatch {
                    rank: self.dim(),
                    flags: flags.len(),
                });
            }
        }
        Ok(Shape {
            scalar_type: self.scalar_type,
            sizes: self.sizes.clone(),
            is_symbolic: symbolic_dims,
        })
    }

    /// Fingerprint of the scalar type and either the full sizes or only the rank.
    pub fn fingerprint(&self, bake_in_sizes: bool) -> u64 {
        let mut fp = Fingerprint::new();
        fp.write_u32(self.scalar_type.tag());
        fp.write_u64(self.sizes.len() as u64);
        if bake_in_sizes {
            for size in &self.sizes {
                fp.write_i64(*size);
            }
        }
        fp.finish()
    }

    /// Graph cache key; sizes are left out while symbolic shape mode is enabled.
    pub fn cache_key(&self) -> u64 {
        self.fingerprint(!env::symbolic_shapes_enabled())
    }
}

/// Wire form of [`Shape`]; flags are re-checked against the rank on the way in.
#[derive(Deserialize)]
struct ShapeRepr {
    scalar_type: ScalarType,
    sizes: Sizes,
    #[serde(default)]
    is_symbolic: Option<Vec<bool>>,
}

impl TryFrom<ShapeRepr> for Shape {
    type Error = ShapeError;

    fn try_from(repr: ShapeRepr) -> Result<Self, Self::Error> {
        let shape = Shape {
            scalar_type: repr.scalar_type,
            sizes: repr.sizes,
            is_symbolic: None,
        };
        shape.with_symbolic_dims(repr.is_symbolic)
    }
}

pub(crate) fn check_sizes(sizes: &[i64]) -> ShapeResult<()> {
    match sizes.iter().position(|size| *size < 0) {
        Some(index) => Err(ShapeError::NegativeDimension {
            index,
            size: sizes[index],
        }),
        None => Ok(()),
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.scalar_type == other.scalar_type && self.sizes == other.sizes
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scalar_type.hash(state);
        self.sizes.hash(state);
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.scalar_type)?;
        for (axis, size) in self.sizes.iter().enumerate() {
            if axis > 0 {
                f.write_str(",")?;
            }
            write!(f, "{size}")?;
        }
        f.write_str("]")
    }
}
