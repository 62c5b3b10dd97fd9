//! Shape-preserving traversal and accumulation functions.
//!
//! Every function here visits the elements of a container in its natural
//! order (front to back for sequences and arrays, left to right by slot for
//! tuples) and hands each element to an [`Applicator`]:
//!
//! - [`apply`]: visit each element for its side effect
//! - [`map`]: transform each element into a new container of the same shape
//! - [`foldl`] / [`foldr`]: accumulate the elements into one value
//! - [`zip_with`] / [`zip`]: combine two containers pairwise
//!
//! The per-shape work lives behind the [`Apply`], [`Map`] and [`ZipWith`]
//! traits, implemented once for each shape: sequences (through
//! [`Sequence`](crate::shape::Sequence)), fixed-size arrays, slices, and
//! tuples of up to eight slots. Dispatch is resolved entirely at compile time.
//!
//! # Ownership
//!
//! Containers are passed as references. A shared reference visits `&T`, a
//! mutable reference visits `&mut T` and allows in-place updates. `map` and
//! `zip_with` only ever borrow their inputs.
//!
//! # Examples
//!
//! ```rust
//! use shapewise::traversal::{apply, foldl, map, zip, zip_with};
//!
//! let mut numbers = vec![1, 2, 3, 4];
//!
//! apply(|value: &mut i32| *value *= 10, &mut numbers);
//! assert_eq!(numbers, vec![10, 20, 30, 40]);
//!
//! let labels: Vec<String> = map(|value: &i32| value.to_string(), &numbers);
//! assert_eq!(labels, vec!["10", "20", "30", "40"]);
//!
//! let total = foldl(|accumulator: i32, value: &i32| accumulator + value, 0, &numbers);
//! assert_eq!(total, 100);
//!
//! let sums = zip_with(|left: &i32, right: &i32| left + right, &numbers, &[1, 2]);
//! assert_eq!(sums, vec![11, 22]);
//!
//! let letters = vec!['a', 'b', 'c'];
//! let pairs = zip(&letters, &numbers);
//! assert_eq!(pairs, vec![(&'a', &10), (&'b', &20), (&'c', &30)]);
//! ```

mod array;
mod fold;
mod sequence;
mod tuple;

pub use fold::{foldl, foldr};

use crate::applicator::Applicator;

/// A container shape whose elements can be visited by `V`.
///
/// Implemented for shared and mutable references to every supported shape.
/// Tuples additionally require `V` to be applicable to each slot type.
pub trait Apply<V> {
    /// Invokes `visitor` once per element, in container order.
    fn apply_with(self, visitor: &mut V);
}

/// A container shape that can be transformed element-wise by `F` into a
/// container of the same shape.
pub trait Map<F> {
    /// The same shape holding the outputs of `F`.
    type Output;

    /// Builds the output container, invoking `function` once per element in
    /// container order.
    fn map_with(self, function: &mut F) -> Self::Output;
}

/// A container shape that can be combined pairwise with `Rhs` through `F`.
pub trait ZipWith<Rhs, F> {
    /// The shape of `Self` holding the outputs of `F`.
    type Output;

    /// Walks `self` and `rhs` in lockstep, invoking `function` on each
    /// aligned pair and stopping at the end of the shorter side.
    fn zip_with(self, rhs: Rhs, function: &mut F) -> Self::Output;
}

/// The applicator used by [`zip`]: pairs its two arguments unchanged.
///
/// # Examples
///
/// ```rust
/// use shapewise::applicator::Applicator;
/// use shapewise::traversal::Pair;
///
/// assert_eq!(Pair.invoke((1, "one")), (1, "one"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pair;

impl<A, B> Applicator<(A, B)> for Pair {
    type Output = (A, B);

    #[inline]
    fn invoke(&mut self, arguments: (A, B)) -> (A, B) {
        arguments
    }
}

/// Visits each element of `container`, in order, with `visitor`.
///
/// Pass `&container` to visit shared references and `&mut container` to
/// update elements in place. The number of elements never changes.
///
/// # Examples
///
/// ```rust
/// use std::collections::LinkedList;
/// use shapewise::traversal::apply;
///
/// let list: LinkedList<i32> = (1..=4).collect();
/// let mut seen = Vec::new();
/// apply(|value: &i32| seen.push(*value), &list);
/// assert_eq!(seen, vec![1, 2, 3, 4]);
///
/// // Heterogeneous tuples are visited slot by slot.
/// let mut count = 0;
/// apply(|_: &i32| count += 1, &(1, 2, 3));
/// assert_eq!(count, 3);
/// ```
#[inline]
pub fn apply<V, C>(mut visitor: V, container: C)
where
    C: Apply<V>,
{
    container.apply_with(&mut visitor);
}

/// Transforms each element of `container` with `function`, producing a new
/// container of the same shape and size.
///
/// The output element type is the output type of `function`. Sequences are
/// rebuilt through their [`Accumulator`](crate::shape::Accumulator),
/// arrays keep their length, tuples keep their arity.
///
/// # Examples
///
/// ```rust
/// use std::collections::VecDeque;
/// use shapewise::traversal::map;
///
/// let words: VecDeque<String> = ["a", "bb", "ccc"].map(String::from).into();
/// let lengths: VecDeque<usize> = map(String::len, &words);
/// assert_eq!(lengths, [1, 2, 3]);
///
/// let doubled: [i32; 3] = map(|value: &i32| value * 2, &[1, 2, 3]);
/// assert_eq!(doubled, [2, 4, 6]);
/// ```
#[inline]
pub fn map<F, C>(mut function: F, container: C) -> C::Output
where
    C: Map<F>,
{
    container.map_with(&mut function)
}

/// Combines `lhs` and `rhs` pairwise with `function`.
///
/// The output has the shape of `lhs`. For sequences `rhs` may be any
/// iterable and the result stops at the shorter side without error. Arrays
/// combine with arrays of the same length and tuples with tuples of the same
/// arity; other combinations do not compile. Their output type carries the
/// size, so a shorter result would be a different type from the input's
/// shape, and a mismatch is caught at compile time instead of truncated.
///
/// # Examples
///
/// ```rust
/// use shapewise::traversal::zip_with;
///
/// let sums = zip_with(|left: &i32, right: &i32| left + right, &vec![1, 2, 3, 4], &[1, 2, 3, 4]);
/// assert_eq!(sums, vec![2, 4, 6, 8]);
///
/// let products = zip_with(|left: &i32, right: i32| left * right, &vec![1, 2, 3], 10..);
/// assert_eq!(products, vec![10, 22, 36]);
/// ```
#[inline]
pub fn zip_with<F, L, R>(mut function: F, lhs: L, rhs: R) -> L::Output
where
    L: ZipWith<R, F>,
{
    lhs.zip_with(rhs, &mut function)
}

/// Pairs the elements of `lhs` and `rhs` without transforming them.
///
/// Equivalent to `zip_with(Pair, lhs, rhs)`; the same shape and truncation
/// rules apply.
///
/// # Examples
///
/// ```rust
/// use shapewise::traversal::zip;
///
/// let left = vec![1, 2, 3];
/// let right = vec![4, 5];
/// let pairs = zip(&left, &right);
/// assert_eq!(pairs, vec![(&1, &4), (&2, &5)]);
/// ```
#[inline]
pub fn zip<L, R>(lhs: L, rhs: R) -> L::Output
where
    L: ZipWith<R, Pair>,
{
    lhs.zip_with(rhs, &mut Pair)
}
