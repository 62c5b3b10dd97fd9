//! # shapewise
//!
//! Generic higher-order functions over containers of any shape.
//!
//! ## Overview
//!
//! This library applies one callable uniformly to run-time sized sequences,
//! linked lists, fixed-size arrays and heterogeneous tuples. Every traversal
//! preserves the shape of its input. It includes:
//!
//! - **Applicator**: one calling convention for free functions, function
//!   pointers, closures and methods
//! - **Shapes**: the container categories and the capabilities traversals
//!   need from them
//! - **Traversals**: `apply`, `map`, `foldl`, `foldr`, `zip_with`, `zip`
//! - **Currying**: conversion between tuple-taking and positional callables
//!
//! ## Feature Flags
//!
//! - `applicator`: The [`Applicator`](applicator::Applicator) trait and
//!   receiver adapters
//! - `shape`: Shape traits and their implementations
//! - `traversal`: Traversal functions (implies `applicator` and `shape`)
//! - `curry`: `curry` and `uncurry` (implies `applicator`)
//! - `smallvec`: Shape support for `smallvec::SmallVec`
//! - `arrayvec`: Shape support for `arrayvec::ArrayVec`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use shapewise::prelude::*;
//!
//! struct Text(String);
//!
//! impl Text {
//!     fn to_int(&self) -> usize {
//!         self.0.len()
//!     }
//! }
//!
//! let texts = vec![Text("one".into()), Text("three".into())];
//! let lengths: Vec<usize> = map(Text::to_int, &texts);
//! assert_eq!(lengths, vec![3, 5]);
//!
//! let total = foldl(|accumulator: usize, length: &usize| accumulator + length, 0, &lengths);
//! assert_eq!(total, 8);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use shapewise::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "applicator")]
    pub use crate::applicator::*;

    #[cfg(feature = "shape")]
    pub use crate::shape::*;

    #[cfg(feature = "traversal")]
    pub use crate::traversal::*;

    #[cfg(feature = "curry")]
    pub use crate::curry::*;
}

#[cfg(feature = "applicator")]
pub mod applicator;

#[cfg(feature = "shape")]
pub mod shape;

#[cfg(feature = "traversal")]
pub mod traversal;

#[cfg(feature = "curry")]
pub mod curry;
