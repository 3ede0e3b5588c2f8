//! Containers the kernel runs over.
//!
//! [`InlineStorage`] has its length fixed at compile time and lives wherever
//! it is declared (the stack, for the suite's small cases). [`HeapStorage`]
//! is sized at run time and owns a boxed slice. Both expose the same
//! "fill in place, iterate in place" view through [`Storage`].

use std::fmt;
use std::mem::size_of;

use packed_vec::Kernel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Inline,
    Heap,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Inline => write!(f, "array"),
            StorageKind::Heap => write!(f, "vector"),
        }
    }
}

/// A contiguous, exclusively owned sequence of kernel elements.
pub trait Storage {
    type Elem: Kernel;

    fn kind(&self) -> StorageKind;

    fn elements(&self) -> &[Self::Elem];

    fn elements_mut(&mut self) -> &mut [Self::Elem];

    #[inline]
    fn len(&self) -> usize {
        self.elements().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes of backing storage: element size times element count.
    #[inline]
    fn footprint(&self) -> usize {
        size_of::<Self::Elem>() * self.len()
    }
}

/// Fixed-capacity storage held in place.
#[derive(Debug, Clone)]
pub struct InlineStorage<T, const LEN: usize> {
    items: [T; LEN],
}

impl<T: Default, const LEN: usize> InlineStorage<T, LEN> {
    pub fn new() -> Self {
        Self {
            items: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Default, const LEN: usize> Default for InlineStorage<T, LEN> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Kernel, const LEN: usize> Storage for InlineStorage<T, LEN> {
    type Elem = T;

    fn kind(&self) -> StorageKind {
        StorageKind::Inline
    }

    #[inline]
    fn elements(&self) -> &[T] {
        &self.items
    }

    #[inline]
    fn elements_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

/// Run-time sized storage on the heap.
#[derive(Debug, Clone)]
pub struct HeapStorage<T> {
    items: Box<[T]>,
}

impl<T: Default + Clone> HeapStorage<T> {
    /// `len` default-initialized elements.
    pub fn new(len: usize) -> Self {
        Self {
            items: vec![T::default(); len].into_boxed_slice(),
        }
    }
}

impl<T> From<Vec<T>> for HeapStorage<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: items.into_boxed_slice(),
        }
    }
}

impl<T: Kernel> Storage for HeapStorage<T> {
    type Elem = T;

    fn kind(&self) -> StorageKind {
        StorageKind::Heap
    }

    #[inline]
    fn elements(&self) -> &[T] {
        &self.items
    }

    #[inline]
    fn elements_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{LANES, SMALL_BATCHES, SMALL_COUNT};
    use packed_vec::{Vec3, Vec4, Vec4Wide};

    #[test]
    fn test_inline_footprint_matches_array_size() {
        let s = InlineStorage::<Vec3, SMALL_COUNT>::new();
        assert_eq!(s.len(), SMALL_COUNT);
        assert_eq!(s.footprint(), 12 * SMALL_COUNT);
        assert_eq!(s.footprint(), size_of::<[Vec3; SMALL_COUNT]>());
        assert_eq!(s.kind(), StorageKind::Inline);
    }

    #[test]
    fn test_heap_defaults_and_footprint() {
        let s = HeapStorage::<Vec4>::new(100);
        assert_eq!(s.kind(), StorageKind::Heap);
        assert!(s.elements().iter().all(|v| *v == Vec4::default()));
        assert_eq!(s.footprint(), 1600);
    }

    #[test]
    fn test_wide_footprint_equals_interleaved() {
        let wide = InlineStorage::<Vec4Wide<LANES>, SMALL_BATCHES>::new();
        let flat = InlineStorage::<Vec4, SMALL_COUNT>::new();
        assert_eq!(wide.len(), SMALL_COUNT / LANES);
        assert_eq!(wide.footprint(), flat.footprint());
    }

    #[test]
    fn test_empty_heap_storage() {
        let s = HeapStorage::<Vec3>::from(Vec::new());
        assert!(s.is_empty());
        assert_eq!(s.footprint(), 0);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(StorageKind::Inline.to_string(), "array");
        assert_eq!(StorageKind::Heap.to_string(), "vector");
    }
}
