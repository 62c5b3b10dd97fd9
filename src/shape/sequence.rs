//! Shape implementations for run-time sized containers.

use std::collections::{LinkedList, VecDeque};

use super::{Sequence, Shape, ShapeKind};

impl<T> Shape for Vec<T> {
    const KIND: ShapeKind = ShapeKind::Sequence;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Sequence for Vec<T> {}

impl<T> Shape for VecDeque<T> {
    const KIND: ShapeKind = ShapeKind::Sequence;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Sequence for VecDeque<T> {}

impl<T> Shape for LinkedList<T> {
    const KIND: ShapeKind = ShapeKind::Linked;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Sequence for LinkedList<T> {}

// Slices can be visited but have no owned counterpart to map into.
impl<T> Shape for [T] {
    const KIND: ShapeKind = ShapeKind::Sequence;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "smallvec")]
impl<T, const N: usize> Shape for smallvec::SmallVec<[T; N]> {
    const KIND: ShapeKind = ShapeKind::Sequence;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "smallvec")]
impl<T, const N: usize> Sequence for smallvec::SmallVec<[T; N]> {}

#[cfg(feature = "arrayvec")]
impl<T, const CAP: usize> Shape for arrayvec::ArrayVec<T, CAP> {
    const KIND: ShapeKind = ShapeKind::Sequence;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "arrayvec")]
impl<T, const CAP: usize> Sequence for arrayvec::ArrayVec<T, CAP> {}
