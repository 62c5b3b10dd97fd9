//! Conversion between tuple-taking and positional callables.
//!
//! - [`curry`] turns a callable that takes one tuple into a callable that
//!   takes the tuple's elements as separate arguments.
//! - [`uncurry`] turns a callable that takes separate arguments into one
//!   that takes them packed in a single tuple.
//!
//! The two are inverses: `uncurry(curry(f))` behaves as `f`, and
//! `curry(uncurry(g))` behaves as `g`, for every argument tuple.
//!
//! Both work with anything that is an [`Applicator`], so method paths and
//! [`receiver`](crate::applicator::receiver) adapters can be uncurried just
//! like closures.
//!
//! # Examples
//!
//! ```rust
//! use shapewise::curry::{curry, uncurry};
//!
//! fn area((width, height): (u32, u32)) -> u32 {
//!     width * height
//! }
//!
//! let mut positional = curry(area);
//! assert_eq!(positional.call(3, 4), 12);
//!
//! let mut packed = uncurry(|width: u32, height: u32| width + height);
//! assert_eq!(packed.call((3, 4)), 7);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::applicator::Applicator;

/// A tuple-taking callable exposed with positional arguments.
///
/// Created by [`curry`]. `Args` is the tuple type the wrapped callable
/// accepts; `Curried<F, Args>` is an [`Applicator<Args>`] and offers an
/// inherent `call` taking the elements of `Args` one by one.
pub struct Curried<F, Args> {
    function: F,
    marker: PhantomData<fn(Args)>,
}

impl<F, Args> Curried<F, Args> {
    /// Returns the wrapped tuple-taking callable.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F: Clone, Args> Clone for Curried<F, Args> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            marker: PhantomData,
        }
    }
}

impl<F: Copy, Args> Copy for Curried<F, Args> {}

impl<F, Args> fmt::Debug for Curried<F, Args> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Curried").finish_non_exhaustive()
    }
}

impl<F, Args> Applicator<Args> for Curried<F, Args>
where
    F: Applicator<(Args,)>,
{
    type Output = F::Output;

    #[inline]
    fn invoke(&mut self, arguments: Args) -> Self::Output {
        self.function.invoke((arguments,))
    }
}

macro_rules! impl_positional_call {
    ($(($($argument:ident),+)),+ $(,)?) => {
        paste::paste! {
            $(
                impl<F, $($argument),+> Curried<F, ($($argument,)+)>
                where
                    F: Applicator<(($($argument,)+),)>,
                {
                    /// Invokes the wrapped callable with the arguments packed
                    /// into one tuple.
                    #[inline]
                    #[allow(clippy::too_many_arguments)]
                    pub fn call(&mut self, $([<$argument:lower>]: $argument),+) -> F::Output {
                        self.function.invoke((($([<$argument:lower>],)+),))
                    }
                }
            )+
        }
    };
}

impl_positional_call!(
    (A1),
    (A1, A2),
    (A1, A2, A3),
    (A1, A2, A3, A4),
    (A1, A2, A3, A4, A5),
    (A1, A2, A3, A4, A5, A6),
    (A1, A2, A3, A4, A5, A6, A7),
    (A1, A2, A3, A4, A5, A6, A7, A8),
);

/// Wraps a callable taking one tuple so that it takes the tuple's elements
/// positionally.
///
/// # Examples
///
/// ```rust
/// use shapewise::applicator::Applicator;
/// use shapewise::curry::curry;
///
/// let mut join = curry(|(left, right): (&str, &str)| format!("{left}-{right}"));
/// assert_eq!(join.call("a", "b"), "a-b");
/// assert_eq!(join.invoke(("c", "d")), "c-d");
/// ```
#[inline]
pub fn curry<Args, F>(function: F) -> Curried<F, Args>
where
    F: Applicator<(Args,)>,
{
    Curried {
        function,
        marker: PhantomData,
    }
}

/// A positional callable exposed with its arguments packed into one tuple.
///
/// Created by [`uncurry`]. `Uncurried<F>` is an [`Applicator`] of one
/// argument, the tuple `Args` that `F` accepts positionally. The tuple type is
/// chosen per call, so arguments may borrow from temporaries that only live
/// for that call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uncurried<F> {
    function: F,
}

impl<F> Uncurried<F> {
    /// Invokes the wrapped callable with the elements of `arguments` as its
    /// positional arguments.
    #[inline]
    pub fn call<Args>(&mut self, arguments: Args) -> F::Output
    where
        F: Applicator<Args>,
    {
        self.function.invoke(arguments)
    }

    /// Returns the wrapped positional callable.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F, Args> Applicator<(Args,)> for Uncurried<F>
where
    F: Applicator<Args>,
{
    type Output = F::Output;

    #[inline]
    fn invoke(&mut self, (arguments,): (Args,)) -> Self::Output {
        self.function.invoke(arguments)
    }
}

/// Wraps a positional callable so that it takes all of its arguments as one
/// tuple.
///
/// # Examples
///
/// ```rust
/// use shapewise::applicator::receiver;
/// use shapewise::curry::uncurry;
///
/// let mut length = uncurry(String::len);
/// assert_eq!(length.call((&String::from("four"),)), 4);
///
/// let mut starts = uncurry(receiver(|text: &String, prefix: char| text.starts_with(prefix)));
/// assert!(starts.call((String::from("curry"), 'c')));
/// ```
#[inline]
pub const fn uncurry<F>(function: F) -> Uncurried<F> {
    Uncurried { function }
}
