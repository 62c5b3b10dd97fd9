//! Output builders for shape-preserving traversals.
//!
//! [`Accumulator`] is the capability a freshly constructed output container
//! needs while [`map`](crate::traversal::map) or
//! [`zip_with`](crate::traversal::zip_with) fill it:
//!
//! - `presize` reserves room for the expected number of elements. It is a
//!   no-op for containers that cannot pre-size (linked lists, fixed-capacity
//!   vectors).
//! - `accumulate` appends one element at the back.
//!
//! Fixed-size arrays are not accumulators: their outputs are written
//! positionally and their size is checked by the type system.

use std::collections::{LinkedList, VecDeque};

/// A growable container that can be filled one element at a time.
///
/// # Examples
///
/// ```rust
/// use std::collections::LinkedList;
/// use shapewise::shape::Accumulator;
///
/// fn fill<A: Accumulator<Item = i32> + Default>(count: i32) -> A {
///     let mut output = A::default();
///     output.presize(usize::try_from(count).unwrap_or_default());
///     for value in 0..count {
///         output.accumulate(value);
///     }
///     output
/// }
///
/// let vector: Vec<i32> = fill(3);
/// let list: LinkedList<i32> = fill(3);
/// assert_eq!(vector, vec![0, 1, 2]);
/// assert!(list.into_iter().eq(vector));
/// ```
pub trait Accumulator {
    /// The element type appended to this container.
    type Item;

    /// Reserves room for at least `additional` more elements.
    ///
    /// The default implementation does nothing, which is the correct
    /// behavior for containers without a notion of spare capacity.
    #[inline]
    fn presize(&mut self, additional: usize) {
        let _ = additional;
    }

    /// Appends one element at the back of the container.
    fn accumulate(&mut self, item: Self::Item);
}

impl<T> Accumulator for Vec<T> {
    type Item = T;

    #[inline]
    fn presize(&mut self, additional: usize) {
        self.reserve(additional);
    }

    #[inline]
    fn accumulate(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Accumulator for VecDeque<T> {
    type Item = T;

    #[inline]
    fn presize(&mut self, additional: usize) {
        self.reserve(additional);
    }

    #[inline]
    fn accumulate(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T> Accumulator for LinkedList<T> {
    type Item = T;

    #[inline]
    fn accumulate(&mut self, item: T) {
        self.push_back(item);
    }
}

#[cfg(feature = "smallvec")]
impl<T, const N: usize> Accumulator for smallvec::SmallVec<[T; N]> {
    type Item = T;

    #[inline]
    fn presize(&mut self, additional: usize) {
        self.reserve(additional);
    }

    #[inline]
    fn accumulate(&mut self, item: T) {
        self.push(item);
    }
}

/// Capacity is fixed at `CAP`, so `presize` keeps the default no-op.
///
/// # Panics
///
/// `accumulate` panics when the vector already holds `CAP` elements. Outputs
/// built from an `ArrayVec` input of the same capacity never reach that point.
#[cfg(feature = "arrayvec")]
impl<T, const CAP: usize> Accumulator for arrayvec::ArrayVec<T, CAP> {
    type Item = T;

    #[inline]
    fn accumulate(&mut self, item: T) {
        self.push(item);
    }
}
