//! Traversals over fixed-size arrays and slices.
//!
//! Array outputs keep their length in the type, so `map` over `[T; N]`
//! yields `[R; N]` with no heap allocation and no run-time size checks.
//! Slices can be visited but have no owned counterpart, so they only
//! support [`Apply`].

use crate::applicator::Applicator;

use super::{Apply, Map, ZipWith};

impl<'a, T, V, const N: usize> Apply<V> for &'a [T; N]
where
    V: Applicator<(&'a T,)>,
{
    #[inline]
    fn apply_with(self, visitor: &mut V) {
        for element in self {
            visitor.invoke((element,));
        }
    }
}

impl<'a, T, V, const N: usize> Apply<V> for &'a mut [T; N]
where
    V: Applicator<(&'a mut T,)>,
{
    #[inline]
    fn apply_with(self, visitor: &mut V) {
        for element in self {
            visitor.invoke((element,));
        }
    }
}

impl<'a, T, V> Apply<V> for &'a [T]
where
    V: Applicator<(&'a T,)>,
{
    #[inline]
    fn apply_with(self, visitor: &mut V) {
        for element in self {
            visitor.invoke((element,));
        }
    }
}

impl<'a, T, V> Apply<V> for &'a mut [T]
where
    V: Applicator<(&'a mut T,)>,
{
    #[inline]
    fn apply_with(self, visitor: &mut V) {
        for element in self {
            visitor.invoke((element,));
        }
    }
}

impl<'a, T, F, const N: usize> Map<F> for &'a [T; N]
where
    F: Applicator<(&'a T,)>,
{
    type Output = [F::Output; N];

    #[inline]
    fn map_with(self, function: &mut F) -> Self::Output {
        core::array::from_fn(|index| function.invoke((&self[index],)))
    }
}

impl<'a, 'b, A, B, F, const N: usize> ZipWith<&'b [B; N], F> for &'a [A; N]
where
    F: Applicator<(&'a A, &'b B)>,
{
    type Output = [F::Output; N];

    #[inline]
    fn zip_with(self, rhs: &'b [B; N], function: &mut F) -> Self::Output {
        core::array::from_fn(|index| function.invoke((&self[index], &rhs[index])))
    }
}

#[cfg(test)]
mod tests {
    use super::super::{apply, map, zip, zip_with};
    use rstest::rstest;

    #[rstest]
    fn apply_visits_array_in_index_order() {
        let values = [5, 6, 7];
        let mut seen = Vec::new();
        apply(|value: &i32| seen.push(*value), &values);
        assert_eq!(seen, vec![5, 6, 7]);
    }

    #[rstest]
    fn apply_updates_array_in_place() {
        let mut values = [1, 2, 3];
        apply(|value: &mut i32| *value = -*value, &mut values);
        assert_eq!(values, [-1, -2, -3]);
    }

    #[rstest]
    fn apply_visits_slice() {
        let values = [1, 2, 3, 4, 5];
        let mut total = 0;
        apply(|value: &i32| total += value, &values[1..4]);
        assert_eq!(total, 9);
    }

    #[rstest]
    fn apply_updates_slice_in_place() {
        let mut values = vec![1, 2, 3];
        apply(|value: &mut i32| *value *= 3, values.as_mut_slice());
        assert_eq!(values, vec![3, 6, 9]);
    }

    #[rstest]
    fn map_keeps_array_length() {
        let doubled: [u32; 4] = map(|value: &u32| value * 2, &[1_u32, 2, 3, 4]);
        assert_eq!(doubled, [2, 4, 6, 8]);
    }

    #[rstest]
    fn map_over_empty_array() {
        let empty: [i32; 0] = [];
        let mapped: [String; 0] = map(|value: &i32| value.to_string(), &empty);
        assert!(mapped.is_empty());
    }

    #[rstest]
    fn map_invokes_in_index_order() {
        let mut order = Vec::new();
        let _: [(); 3] = map(|value: &char| order.push(*value), &['x', 'y', 'z']);
        assert_eq!(order, vec!['x', 'y', 'z']);
    }

    #[rstest]
    fn zip_with_same_length_arrays() {
        let sums = zip_with(|left: &i32, right: &i32| left + right, &[1, 2, 3], &[10, 20, 30]);
        assert_eq!(sums, [11, 22, 33]);
    }

    #[rstest]
    fn zip_arrays_of_different_element_types() {
        let names = ["one", "two"];
        let values = [1_u8, 2];
        assert_eq!(zip(&names, &values), [(&"one", &1), (&"two", &2)]);
    }
}
