use std::fmt::Write as _;

use lazy_shape::{convert_shapes, ScalarType, Shape, ShapeError};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn scalar_type() -> impl Strategy<Value = ScalarType> {
    proptest::sample::select(ScalarType::ALL.to_vec())
}

fn sizes() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(0i64..64, 0..7)
}

fn shape() -> impl Strategy<Value = Shape> {
    (scalar_type(), sizes()).prop_map(|(scalar_type, sizes)| Shape::new(scalar_type, sizes))
}

proptest! {
    #![proptest_config(ProptestConfig {
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn equality_is_reflexive_and_symmetric(a in shape(), b in shape()) {
        prop_assert_eq!(&a, &a.clone());
        prop_assert_eq!(a == b, b == a);
        prop_assert_eq!(
            a == b,
            a.scalar_type() == b.scalar_type() && a.sizes() == b.sizes()
        );
    }

    #[test]
    fn rendering_matches_formatter_and_layout(shape in shape()) {
        let mut out = String::new();
        write!(out, "{shape}").expect("writing to a String cannot fail");
        prop_assert_eq!(&out, &shape.to_string());

        let dims = shape
            .sizes()
            .iter()
            .map(|size| size.to_string())
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(out, format!("{}[{}]", shape.scalar_type().name(), dims));
    }

    #[test]
    fn size_is_checked_against_current_rank(shape in shape(), index in 0usize..10) {
        match shape.size(index) {
            Ok(size) => {
                prop_assert!(index < shape.dim());
                prop_assert_eq!(size, shape.sizes()[index]);
            }
            Err(err) => {
                prop_assert!(index >= shape.dim());
                prop_assert_eq!(err, ShapeError::OutOfRange { index, rank: shape.dim() });
            }
        }
    }

    #[test]
    fn set_size_changes_exactly_one_axis(
        shape in shape(),
        index in 0usize..10,
        value in 0i64..1024,
    ) {
        let mut updated = shape.clone();
        let result = updated.set_size(index, value);
        if index < shape.dim() {
            prop_assert!(result.is_ok());
            for axis in 0..shape.dim() {
                let expected = if axis == index { value } else { shape.sizes()[axis] };
                prop_assert_eq!(updated.size(axis), Ok(expected));
            }
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(updated.sizes(), shape.sizes());
        }
        prop_assert_eq!(updated.scalar_type(), shape.scalar_type());
    }

    #[test]
    fn convert_shapes_preserves_pairs(
        pairs in proptest::collection::vec((scalar_type(), sizes()), 0..8)
    ) {
        let (scalar_types, size_lists): (Vec<_>, Vec<_>) = pairs.iter().cloned().unzip();
        let shapes = convert_shapes(&scalar_types, &size_lists).expect("sizes are non-negative");
        prop_assert_eq!(shapes.len(), pairs.len());
        for (shape, (scalar_type, sizes)) in shapes.iter().zip(&pairs) {
            prop_assert_eq!(shape, &Shape::new(*scalar_type, sizes.iter().copied()));
        }
    }
}
