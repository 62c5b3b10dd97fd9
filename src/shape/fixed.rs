//! Shape implementations for containers whose size is part of their type.

use super::{Shape, ShapeKind, StaticShape};

impl<T, const N: usize> Shape for [T; N] {
    const KIND: ShapeKind = ShapeKind::Array;

    #[inline]
    fn size(&self) -> usize {
        N
    }
}

impl<T, const N: usize> StaticShape for [T; N] {
    const SIZE: usize = N;
}

macro_rules! impl_shape_for_tuples {
    ($($arity:literal => ($($element:ident),+)),+ $(,)?) => {
        $(
            impl<$($element),+> Shape for ($($element,)+) {
                const KIND: ShapeKind = ShapeKind::Tuple;

                #[inline]
                fn size(&self) -> usize {
                    $arity
                }
            }

            impl<$($element),+> StaticShape for ($($element,)+) {
                const SIZE: usize = $arity;
            }
        )+
    };
}

impl_shape_for_tuples!(
    1 => (A1),
    2 => (A1, A2),
    3 => (A1, A2, A3),
    4 => (A1, A2, A3, A4),
    5 => (A1, A2, A3, A4, A5),
    6 => (A1, A2, A3, A4, A5, A6),
    7 => (A1, A2, A3, A4, A5, A6, A7),
    8 => (A1, A2, A3, A4, A5, A6, A7, A8),
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    static_assertions::const_assert_eq!(<[u8; 0] as StaticShape>::SIZE, 0);
    static_assertions::const_assert_eq!(<(u8,) as StaticShape>::SIZE, 1);
    static_assertions::const_assert_eq!(
        <(u8, u16, u32, u64, i8, i16, i32, i64) as StaticShape>::SIZE,
        8
    );

    #[rstest]
    fn array_size_matches_length() {
        let values = [0_u8; 500];
        assert_eq!(values.size(), 500);
        assert_eq!(<[u8; 500] as Shape>::KIND, ShapeKind::Array);
    }

    #[rstest]
    fn mixed_tuple_reports_arity() {
        let mixed = (1, String::from("two"), 3.0, '4');
        assert_eq!(mixed.size(), 4);
        assert_eq!(<(i32, String) as Shape>::KIND, ShapeKind::Tuple);
    }

    #[rstest]
    #[case(ShapeKind::Array, true)]
    #[case(ShapeKind::Tuple, true)]
    #[case(ShapeKind::Sequence, false)]
    #[case(ShapeKind::Linked, false)]
    fn static_kinds(#[case] kind: ShapeKind, #[case] expected: bool) {
        assert_eq!(kind.is_static(), expected);
    }
}
