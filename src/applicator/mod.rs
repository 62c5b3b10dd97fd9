//! Uniform invocation over heterogeneous callable forms.
//!
//! This module provides the [`Applicator`] trait, the single capability that
//! every traversal function in this crate delegates element invocation to.
//! Arguments are always packed into one tuple, so the same call syntax works
//! no matter which callable form sits behind it:
//!
//! ```text
//! callable.invoke((argument1, argument2, ...))
//! ```
//!
//! # Supported Callable Forms
//!
//! | Form                        | How it becomes an `Applicator`                 |
//! |-----------------------------|------------------------------------------------|
//! | free function (`fn` item)   | blanket impl over `FnMut`                      |
//! | function pointer            | blanket impl over `FnMut`                      |
//! | closure                     | blanket impl over `FnMut`                      |
//! | `&self` method              | `Type::method` directly, or [`receiver`]       |
//! | `&mut self` method          | `Type::method` directly, or [`receiver_mut`]   |
//! | user-defined visitor        | implement [`Applicator`] by hand               |
//!
//! Methods are plain functions whose first parameter is the receiver, so a
//! method path such as `String::len` is applicable wherever the traversal
//! hands over a `&String`. The receiver adapters cover the remaining case,
//! where the traversal hands over an owned value but the method only borrows
//! it (folds are the typical example).
//!
//! Selection among the forms happens entirely through trait resolution. A
//! value that matches none of them fails the `Applicator` bound at compile
//! time; there is no run-time dispatch and no error path.
//!
//! # Examples
//!
//! ```rust
//! use shapewise::applicator::{Applicator, invoke, receiver};
//!
//! fn add(first: i32, second: i32) -> i32 {
//!     first + second
//! }
//!
//! // Free function
//! assert_eq!(invoke(&mut add, (1, 2)), 3);
//!
//! // Function pointer
//! let mut pointer: fn(i32, i32) -> i32 = add;
//! assert_eq!(pointer.invoke((1, 2)), 3);
//!
//! // Closure
//! let mut closure = |first: i32, second: i32| first + second;
//! assert_eq!(closure.invoke((1, 2)), 3);
//!
//! // Method taking `&self`, receiver passed by reference
//! let text = String::from("four");
//! assert_eq!(invoke(&mut String::len, (&text,)), 4);
//!
//! // Method taking `&self`, receiver passed by value
//! let mut length = receiver(String::len);
//! assert_eq!(length.invoke((text,)), 4);
//! ```

mod receiver;

pub use receiver::{Receiver, ReceiverMut, receiver, receiver_mut};

/// A callable that accepts its positional arguments packed into a tuple.
///
/// `Args` is the tuple of argument types: `()` for nullary callables,
/// `(A,)` for unary ones, `(A, B)` for binary ones, and so on up to eight
/// arguments.
///
/// Every `FnMut` with up to eight parameters is an `Applicator` through a
/// blanket implementation. Implement the trait directly to build a visitor
/// that is applicable to several argument types at once, which is what
/// visiting a heterogeneous tuple requires.
///
/// # Examples
///
/// A visitor applicable to every `Display` type:
///
/// ```rust
/// use std::fmt::Display;
/// use shapewise::applicator::Applicator;
///
/// struct Render<'output> {
///     output: &'output mut Vec<String>,
/// }
///
/// impl<'a, T: Display> Applicator<(&'a T,)> for Render<'_> {
///     type Output = ();
///
///     fn invoke(&mut self, (value,): (&'a T,)) {
///         self.output.push(value.to_string());
///     }
/// }
///
/// let mut output = Vec::new();
/// let mut render = Render { output: &mut output };
/// render.invoke((&1,));
/// render.invoke((&"two",));
/// assert_eq!(output, vec!["1", "two"]);
/// ```
pub trait Applicator<Args> {
    /// The value produced by one invocation.
    type Output;

    /// Invokes the callable with the packed arguments.
    fn invoke(&mut self, arguments: Args) -> Self::Output;
}

/// Invokes any [`Applicator`] with packed arguments.
///
/// This is the uniform call syntax of the crate, equivalent to
/// `callable.invoke(arguments)`.
///
/// # Examples
///
/// ```rust
/// use shapewise::applicator::invoke;
///
/// fn negate(value: i32) -> i32 {
///     -value
/// }
///
/// assert_eq!(invoke(&mut negate, (5,)), -5);
/// ```
#[inline]
pub fn invoke<Args, F>(callable: &mut F, arguments: Args) -> F::Output
where
    F: Applicator<Args>,
{
    callable.invoke(arguments)
}

// =============================================================================
// Function Values (fn items, fn pointers, closures, method paths)
// =============================================================================

macro_rules! impl_applicator_for_functions {
    ($(($($argument:ident),*)),+ $(,)?) => {
        paste::paste! {
            $(
                impl<Function, Return, $($argument),*> Applicator<($($argument,)*)> for Function
                where
                    Function: FnMut($($argument),*) -> Return,
                {
                    type Output = Return;

                    #[inline]
                    fn invoke(
                        &mut self,
                        ($([<$argument:lower>],)*): ($($argument,)*),
                    ) -> Return {
                        self($([<$argument:lower>]),*)
                    }
                }
            )+
        }
    };
}

impl_applicator_for_functions!(
    (),
    (A1),
    (A1, A2),
    (A1, A2, A3),
    (A1, A2, A3, A4),
    (A1, A2, A3, A4, A5),
    (A1, A2, A3, A4, A5, A6),
    (A1, A2, A3, A4, A5, A6, A7),
    (A1, A2, A3, A4, A5, A6, A7, A8),
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn identity_value(value: i32) -> i32 {
        value
    }

    fn read_reference(value: &i32) -> i32 {
        *value
    }

    fn increment_in_place(value: &mut i32) {
        *value += 1;
    }

    #[allow(clippy::too_many_arguments)]
    fn sum_eight(
        first: i32,
        second: i32,
        third: i32,
        fourth: i32,
        fifth: i32,
        sixth: i32,
        seventh: i32,
        eighth: i32,
    ) -> i32 {
        first + second + third + fourth + fifth + sixth + seventh + eighth
    }

    // =========================================================================
    // Arity Coverage
    // =========================================================================

    #[rstest]
    fn nullary_closure_is_invoked_with_unit() {
        let mut constant = || 42;
        assert_eq!(constant.invoke(()), 42);
    }

    #[rstest]
    fn eight_argument_function_receives_arguments_in_order() {
        assert_eq!(invoke(&mut sum_eight, (1, 2, 3, 4, 5, 6, 7, 8)), 36);
    }

    #[rstest]
    fn binary_closure_preserves_argument_positions() {
        let mut subtract = |left: i32, right: i32| left - right;
        assert_eq!(subtract.invoke((10, 3)), 7);
    }

    // =========================================================================
    // Parameter Passing Forms
    // =========================================================================

    #[rstest]
    fn by_value_parameter() {
        assert_eq!(invoke(&mut identity_value, (7,)), 7);
    }

    #[rstest]
    fn by_shared_reference_parameter() {
        let value = 7;
        assert_eq!(invoke(&mut read_reference, (&value,)), 7);
    }

    #[rstest]
    fn by_mutable_reference_parameter() {
        let mut value = 7;
        invoke(&mut increment_in_place, (&mut value,));
        assert_eq!(value, 8);
    }

    #[rstest]
    fn function_pointer_and_item_agree() {
        let mut pointer: fn(i32) -> i32 = identity_value;
        assert_eq!(pointer.invoke((3,)), invoke(&mut identity_value, (3,)));
    }

    // =========================================================================
    // Stateful Callables
    // =========================================================================

    #[rstest]
    fn stateful_closure_keeps_state_between_invocations() {
        let mut count = 0;
        let mut counter = |step: i32| {
            count += step;
            count
        };

        assert_eq!(counter.invoke((1,)), 1);
        assert_eq!(counter.invoke((2,)), 3);
        assert_eq!(counter.invoke((3,)), 6);
    }

    #[rstest]
    fn method_path_with_mutable_receiver() {
        let mut values = vec![1, 2];
        invoke(&mut Vec::push, (&mut values, 3));
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[rstest]
    fn method_path_with_shared_receiver() {
        let text = String::from("shape");
        assert_eq!(invoke(&mut String::len, (&text,)), 5);
    }
}
