//! Left and right folds over any iterable container.

use crate::applicator::Applicator;

/// Accumulates the elements of `container` into `seed`, front to back.
///
/// `function` is invoked as `function(accumulator, element)` and its result
/// becomes the next accumulator. An empty container returns `seed`
/// unchanged without invoking `function`.
///
/// Any [`IntoIterator`] is accepted: shared or mutable references to
/// containers, owned containers, and ranges.
///
/// # Examples
///
/// ```rust
/// use shapewise::traversal::foldl;
///
/// let total = foldl(|accumulator: i32, value: &i32| accumulator + value, 0, &[1, 2, 3, 4]);
/// assert_eq!(total, 10);
///
/// fn factorial(n: u64) -> u64 {
///     foldl(|accumulator: u64, value: u64| accumulator * value, 1, 1..=n)
/// }
/// assert_eq!(factorial(10), 3_628_800);
/// ```
#[inline]
pub fn foldl<F, B, C>(mut function: F, seed: B, container: C) -> B
where
    C: IntoIterator,
    F: Applicator<(B, C::Item), Output = B>,
{
    container
        .into_iter()
        .fold(seed, |accumulator, element| function.invoke((accumulator, element)))
}

/// Accumulates the elements of `container` into `seed` with the element as
/// the first argument.
///
/// `function` is invoked as `function(element, accumulator)`. Elements are
/// still visited front to back, which keeps the fold usable on sequences
/// that cannot be walked in reverse, so `foldr(f, seed, c)` equals
/// `foldl(|acc, e| f(e, acc), seed, c)`.
///
/// # Examples
///
/// ```rust
/// use shapewise::traversal::foldr;
///
/// let product = foldr(|value: &i32, accumulator: i32| value * accumulator, 1, &vec![1, 2, 3, 4]);
/// assert_eq!(product, 24);
///
/// let trace = foldr(
///     |value: char, accumulator: String| format!("({value} {accumulator})"),
///     String::from("nil"),
///     ['a', 'b', 'c'],
/// );
/// assert_eq!(trace, "(c (b (a nil)))");
/// ```
#[inline]
pub fn foldr<F, B, C>(mut function: F, seed: B, container: C) -> B
where
    C: IntoIterator,
    F: Applicator<(C::Item, B), Output = B>,
{
    container
        .into_iter()
        .fold(seed, |accumulator, element| function.invoke((element, accumulator)))
}
