//! Shape metadata for lazily evaluated tensor graphs.
//!
//! A [`Shape`] pairs a [`ScalarType`] with row-major dimension sizes. Graph
//! builders reason about operator outputs through shapes before any data is
//! materialized, compare them during validation and use [`Shape::cache_key`]
//! to key compiled graphs.

pub mod convert;
pub mod dtype;
mod env;
mod hashing;
pub mod shape;

pub use convert::convert_shapes;
pub use dtype::ScalarType;
pub use env::symbolic_shapes_enabled;
pub use shape::{Shape, ShapeError, ShapeResult};
