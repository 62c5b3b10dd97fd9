//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Vec<_>` or `LinkedList<_>` as type
//! constructors directly. [`TypeConstructor`] uses a Generic Associated Type
//! to name "the same container holding a different element type", which is
//! what shape-preserving operations such as [`map`](crate::traversal::map)
//! need for their output type.
//!
//! # Example
//!
//! ```rust
//! use std::collections::LinkedList;
//! use shapewise::shape::TypeConstructor;
//!
//! fn empty_like<C: TypeConstructor>(_container: &C) -> C::WithType<String>
//! where
//!     C::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers: LinkedList<i32> = (1..=3).collect();
//! let words: LinkedList<String> = empty_like(&numbers);
//! assert!(words.is_empty());
//! ```

use std::collections::{LinkedList, VecDeque};

/// A trait representing a type constructor applied to an element type.
///
/// # Associated Types
///
/// - `Inner`: The element type the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
/// 2. **Shape preservation**: for fixed-size constructors the size is part of
///    the constructor, so `[A; N]` becomes `[B; N]`.
pub trait TypeConstructor {
    /// The element type this constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different element type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for VecDeque<T> {
    type Inner = T;
    type WithType<B> = VecDeque<B>;
}

impl<T> TypeConstructor for LinkedList<T> {
    type Inner = T;
    type WithType<B> = LinkedList<B>;
}

impl<T, const N: usize> TypeConstructor for [T; N] {
    type Inner = T;
    type WithType<B> = [B; N];
}

// =============================================================================
// Optional Inline-Storage Implementations
// =============================================================================

#[cfg(feature = "smallvec")]
impl<T, const N: usize> TypeConstructor for smallvec::SmallVec<[T; N]> {
    type Inner = T;
    type WithType<B> = smallvec::SmallVec<[B; N]>;
}

#[cfg(feature = "arrayvec")]
impl<T, const CAP: usize> TypeConstructor for arrayvec::ArrayVec<T, CAP> {
    type Inner = T;
    type WithType<B> = arrayvec::ArrayVec<B, CAP>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Type-level tests (compile-time verification)
    // =========================================================================

    #[rstest]
    fn vec_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Vec<i32>>();
    }

    #[rstest]
    fn linked_list_with_type_produces_linked_list() {
        fn transform<T: TypeConstructor>(_value: &T) -> T::WithType<char>
        where
            T::WithType<char>: Default,
        {
            Default::default()
        }

        let result: LinkedList<char> = transform(&LinkedList::from([1, 2, 3]));
        assert!(result.is_empty());
    }

    #[rstest]
    fn vec_deque_with_type_produces_vec_deque() {
        fn assert_with_type<T, B>()
        where
            T: TypeConstructor<WithType<B> = VecDeque<B>>,
        {
        }

        assert_with_type::<VecDeque<i32>, String>();
    }

    #[rstest]
    fn array_with_type_preserves_length() {
        fn assert_with_type<T, B, const N: usize>()
        where
            T: TypeConstructor<WithType<B> = [B; N]>,
        {
        }

        assert_with_type::<[i32; 4], String, 4>();
        assert_with_type::<[u8; 500], bool, 500>();
    }

    #[rstest]
    fn chained_with_type_transformations() {
        type Step1 = <Vec<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_vec_bool<T: TypeConstructor<Inner = bool, WithType<bool> = Vec<bool>>>() {}
        assert_is_vec_bool::<Step2>();
    }

    #[cfg(feature = "smallvec")]
    #[rstest]
    fn small_vec_with_type_keeps_inline_capacity() {
        fn assert_with_type<T, B>()
        where
            T: TypeConstructor<WithType<B> = smallvec::SmallVec<[B; 8]>>,
        {
        }

        assert_with_type::<smallvec::SmallVec<[i32; 8]>, String>();
    }

    #[cfg(feature = "arrayvec")]
    #[rstest]
    fn array_vec_with_type_keeps_capacity() {
        fn assert_with_type<T, B>()
        where
            T: TypeConstructor<WithType<B> = arrayvec::ArrayVec<B, 16>>,
        {
        }

        assert_with_type::<arrayvec::ArrayVec<i32, 16>, String>();
    }
}
