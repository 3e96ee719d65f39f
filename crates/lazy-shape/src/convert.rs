//! Batch construction of shapes from parallel dtype / size descriptions.

use crate::dtype::ScalarType;
use crate::shape::{check_sizes, Shape, ShapeError, ShapeResult};

/// Builds one [`Shape`] per `(scalar_types[i], sizes[i])` pair, preserving order.
///
/// Both slices must have the same length; a mismatch or a negative size in any
/// list fails the whole batch without producing partial output.
///
/// # Example
/// ```
/// use lazy_shape::{convert_shapes, ScalarType, Shape};
///
/// let sizes: [Vec<i64>; 2] = [vec![1, 2, 3], vec![1, 2]];
/// let shapes =
///     convert_shapes(&[ScalarType::Long, ScalarType::Float], &sizes).expect("valid batch");
/// assert_eq!(shapes[1], Shape::new(ScalarType::Float, [1, 2]));
/// ```
pub fn convert_shapes<S>(scalar_types: &[ScalarType], sizes: &[S]) -> ShapeResult<Vec<Shape>>
where
    S: AsRef<[i64]>,
{
    if scalar_types.len() != sizes.len() {
        return Err(ShapeError::LengthMismatch {
            scalar_types: scalar_types.len(),
            sizes: sizes.len(),
        });
    }
    log::trace!("converting {} shapes", scalar_types.len());

    scalar_types
        .iter()
        .zip(sizes)
        .map(|(scalar_type, dims)| {
            let dims = dims.as_ref();
            check_sizes(dims)?;
            Ok(Shape::new(*scalar_type, dims.iter().copied()))
        })
        .collect()
}
