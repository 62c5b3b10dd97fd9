//! Traversals over run-time sized sequences.
//!
//! Outputs are built through the sequence's own
//! [`TypeConstructor`](crate::shape::TypeConstructor):
//! `Vec<T>` maps into `Vec<R>`, `LinkedList<T>` into `LinkedList<R>`, and
//! so on. The output is pre-sized before the first element is appended.

use crate::applicator::Applicator;
use crate::shape::{Accumulator, Sequence};

use super::{Apply, Map, ZipWith};

impl<'a, C, V> Apply<V> for &'a C
where
    C: Sequence,
    &'a C: IntoIterator,
    V: Applicator<(<&'a C as IntoIterator>::Item,)>,
{
    #[inline]
    fn apply_with(self, visitor: &mut V) {
        for element in self {
            visitor.invoke((element,));
        }
    }
}

impl<'a, C, V> Apply<V> for &'a mut C
where
    C: Sequence,
    &'a mut C: IntoIterator,
    V: Applicator<(<&'a mut C as IntoIterator>::Item,)>,
{
    #[inline]
    fn apply_with(self, visitor: &mut V) {
        for element in self {
            visitor.invoke((element,));
        }
    }
}

impl<'a, C, F> Map<F> for &'a C
where
    C: Sequence,
    &'a C: IntoIterator<Item = &'a C::Inner>,
    F: Applicator<(&'a C::Inner,)>,
    C::WithType<F::Output>: Accumulator<Item = F::Output> + Default,
{
    type Output = C::WithType<F::Output>;

    fn map_with(self, function: &mut F) -> Self::Output {
        let mut output: Self::Output = Default::default();
        output.presize(self.size());
        for element in self {
            output.accumulate(function.invoke((element,)));
        }
        output
    }
}

impl<'a, C, Rhs, F> ZipWith<Rhs, F> for &'a C
where
    C: Sequence,
    &'a C: IntoIterator<Item = &'a C::Inner>,
    Rhs: IntoIterator,
    F: Applicator<(&'a C::Inner, Rhs::Item)>,
    C::WithType<F::Output>: Accumulator<Item = F::Output> + Default,
{
    type Output = C::WithType<F::Output>;

    fn zip_with(self, rhs: Rhs, function: &mut F) -> Self::Output {
        let rhs = rhs.into_iter();
        let mut output: Self::Output = Default::default();
        output.presize(self.size().min(rhs.size_hint().0));
        for (left, right) in self.into_iter().zip(rhs) {
            output.accumulate(function.invoke((left, right)));
        }
        output
    }
}
