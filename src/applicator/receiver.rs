//! Receiver adapters for methods applied to owned values.
//!
//! A method path such as `Text::concat` is already an [`Applicator`] whose
//! first argument is `&Text`. Traversals that hand over owned values (the
//! accumulator of a fold, the packed tuple given to an uncurried callable)
//! need the receiver to be taken by value and lent to the method instead.
//!
//! - [`Receiver`] lends the owned receiver as `&T` and returns the method's
//!   result.
//! - [`ReceiverMut`] lends the owned receiver as `&mut T` and hands the
//!   mutated receiver back, so builder-style methods such as `Vec::push`
//!   compose with folds.

use super::Applicator;

/// Adapts a `&self` method so that its receiver is passed by value.
///
/// Created by [`receiver`].
///
/// # Examples
///
/// ```rust
/// use shapewise::applicator::{Applicator, receiver};
///
/// let mut capacity = receiver(Vec::<u8>::capacity);
/// assert!(capacity.invoke((Vec::with_capacity(16),)) >= 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receiver<F> {
    method: F,
}

/// Adapts a `&mut self` method so that its receiver is passed by value and
/// returned after the call.
///
/// Created by [`receiver_mut`]. Only methods returning `()` are accepted,
/// since the adapter's output is the receiver itself.
///
/// # Examples
///
/// ```rust
/// use shapewise::applicator::{Applicator, receiver_mut};
///
/// let mut push = receiver_mut(Vec::push);
/// assert_eq!(push.invoke((vec![1, 2], 3)), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiverMut<F> {
    method: F,
}

/// Wraps a method taking `&self` so that it accepts an owned receiver.
///
/// # Examples
///
/// ```rust
/// use shapewise::applicator::{Applicator, receiver};
///
/// let mut length = receiver(String::len);
/// assert_eq!(length.invoke((String::from("abc"),)), 3);
/// ```
#[inline]
pub const fn receiver<F>(method: F) -> Receiver<F> {
    Receiver { method }
}

/// Wraps a method taking `&mut self` so that it accepts an owned receiver and
/// returns it after the call.
///
/// # Examples
///
/// ```rust
/// use shapewise::applicator::{Applicator, receiver_mut};
///
/// let mut push_str = receiver_mut(String::push_str);
/// assert_eq!(push_str.invoke((String::from("ab"), "cd")), "abcd");
/// ```
#[inline]
pub const fn receiver_mut<F>(method: F) -> ReceiverMut<F> {
    ReceiverMut { method }
}

impl<F> Receiver<F> {
    /// Returns the wrapped method.
    #[inline]
    pub fn into_inner(self) -> F {
        self.method
    }
}

impl<F> ReceiverMut<F> {
    /// Returns the wrapped method.
    #[inline]
    pub fn into_inner(self) -> F {
        self.method
    }
}

macro_rules! impl_applicator_for_receivers {
    ($(($($argument:ident),*)),+ $(,)?) => {
        paste::paste! {
            $(
                impl<Method, Target, Return, $($argument),*> Applicator<(Target, $($argument,)*)>
                    for Receiver<Method>
                where
                    Method: FnMut(&Target, $($argument),*) -> Return,
                {
                    type Output = Return;

                    #[inline]
                    fn invoke(
                        &mut self,
                        (target, $([<$argument:lower>],)*): (Target, $($argument,)*),
                    ) -> Return {
                        (self.method)(&target, $([<$argument:lower>]),*)
                    }
                }

                impl<Method, Target, $($argument),*> Applicator<(Target, $($argument,)*)>
                    for ReceiverMut<Method>
                where
                    Method: FnMut(&mut Target, $($argument),*),
                {
                    type Output = Target;

                    #[inline]
                    fn invoke(
                        &mut self,
                        (mut target, $([<$argument:lower>],)*): (Target, $($argument,)*),
                    ) -> Target {
                        (self.method)(&mut target, $([<$argument:lower>]),*);
                        target
                    }
                }
            )+
        }
    };
}

impl_applicator_for_receivers!(
    (),
    (A1),
    (A1, A2),
    (A1, A2, A3),
    (A1, A2, A3, A4),
    (A1, A2, A3, A4, A5),
    (A1, A2, A3, A4, A5, A6),
    (A1, A2, A3, A4, A5, A6, A7),
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    struct Counter {
        value: i32,
    }

    impl Counter {
        fn value(&self) -> i32 {
            self.value
        }

        fn plus(&self, amount: i32) -> i32 {
            self.value + amount
        }

        fn add(&mut self, amount: i32) {
            self.value += amount;
        }

        fn add_two(&mut self, first: i32, second: i32) {
            self.value += first + second;
        }
    }

    #[rstest]
    fn receiver_without_extra_arguments() {
        let mut value = receiver(Counter::value);
        assert_eq!(value.invoke((Counter { value: 4 },)), 4);
    }

    #[rstest]
    fn receiver_with_one_extra_argument() {
        let mut plus = receiver(Counter::plus);
        assert_eq!(plus.invoke((Counter { value: 4 }, 3)), 7);
    }

    #[rstest]
    fn receiver_mut_returns_mutated_receiver() {
        let mut add = receiver_mut(Counter::add);
        assert_eq!(add.invoke((Counter::default(), 5)), Counter { value: 5 });
    }

    #[rstest]
    fn receiver_mut_with_two_extra_arguments() {
        let mut add_two = receiver_mut(Counter::add_two);
        assert_eq!(add_two.invoke((Counter { value: 1 }, 2, 3)), Counter { value: 6 });
    }

    #[rstest]
    fn receiver_mut_chains_across_invocations() {
        let mut push = receiver_mut(Vec::push);
        let first = push.invoke((Vec::new(), 'a'));
        let second = push.invoke((first, 'b'));
        assert_eq!(second, vec!['a', 'b']);
    }

    #[rstest]
    fn into_inner_returns_method() {
        let method = receiver(Counter::plus).into_inner();
        assert_eq!(method(&Counter { value: 1 }, 1), 2);
    }
}
