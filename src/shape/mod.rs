//! Container shapes and the capabilities traversals need from them.
//!
//! A *shape* is the structural category of a container, independent of its
//! element type. Traversals in this crate are written once per shape and
//! always produce outputs of the same shape as their input.
//!
//! | Shape       | Containers                                          | Size     |
//! |-------------|-----------------------------------------------------|----------|
//! | `Sequence`  | `Vec`, `VecDeque`, slices, `SmallVec`, `ArrayVec`   | run time |
//! | `Linked`    | `LinkedList`                                        | run time |
//! | `Array`     | `[T; N]`                                            | static   |
//! | `Tuple`     | `(A,)` through `(A, B, C, D, E, F, G, H)`           | static   |
//!
//! # Capabilities
//!
//! - [`Shape`]: the shape category and the number of elements.
//! - [`StaticShape`]: the number of elements as a constant.
//! - [`TypeConstructor`]: the same container with a different element type.
//! - [`Sequence`]: a run-time sized shape walked front to back.
//! - [`Accumulator`]: an output that can be pre-sized and appended to.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::LinkedList;
//! use shapewise::shape::{Shape, ShapeKind, StaticShape};
//!
//! assert_eq!(<Vec<i32> as Shape>::KIND, ShapeKind::Sequence);
//! assert_eq!(<LinkedList<i32> as Shape>::KIND, ShapeKind::Linked);
//! assert_eq!(<[i32; 4] as StaticShape>::SIZE, 4);
//! assert_eq!((1, "two", 3.0).size(), 3);
//! ```

mod accumulator;
mod fixed;
mod higher;
mod sequence;

pub use accumulator::Accumulator;
pub use higher::TypeConstructor;

/// The structural category of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// An ordered, contiguous or ring-buffered sequence with run-time size.
    Sequence,
    /// An ordered, node-linked sequence with run-time size.
    Linked,
    /// A homogeneous array whose size is part of its type.
    Array,
    /// A heterogeneous tuple whose arity is part of its type.
    Tuple,
}

impl ShapeKind {
    /// Returns `true` when the size of containers of this kind is fixed by
    /// their type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapewise::shape::ShapeKind;
    ///
    /// assert!(ShapeKind::Tuple.is_static());
    /// assert!(!ShapeKind::Linked.is_static());
    /// ```
    #[inline]
    pub const fn is_static(self) -> bool {
        matches!(self, Self::Array | Self::Tuple)
    }
}

/// A container with a known shape category and element count.
pub trait Shape {
    /// The shape category of this container type.
    const KIND: ShapeKind;

    /// Returns the number of elements (or slots, for tuples).
    fn size(&self) -> usize;
}

/// A shape whose element count is fixed by its type.
///
/// # Examples
///
/// ```rust
/// use shapewise::shape::StaticShape;
///
/// assert_eq!(<(u8, char) as StaticShape>::SIZE, 2);
/// assert_eq!(<[String; 500] as StaticShape>::SIZE, 500);
/// ```
pub trait StaticShape: Shape {
    /// The number of elements (or slots).
    const SIZE: usize;
}

/// A run-time sized shape whose elements are walked front to back.
///
/// Sequences are the shapes whose outputs are built through an
/// [`Accumulator`]: `map` and `zip_with` construct
/// `Self::WithType<R>` empty, pre-size it with [`Shape::size`], and append
/// each produced element in order.
pub trait Sequence: Shape + TypeConstructor {}
