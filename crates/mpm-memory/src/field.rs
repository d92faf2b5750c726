//! Fixed-length per-particle buffers.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::ledger::AllocationGuard;

/// A contiguous buffer whose length is fixed at creation.
///
/// Elements can be read and written through slice access, but the
/// buffer can never grow or shrink. Fields are only created by
/// [`Memory`](crate::Memory) and stay in its ledger until dropped.
pub struct Field<T> {
    data: Box<[T]>,
    label: String,
    guard: AllocationGuard,
}

impl<T> Field<T> {
    pub(crate) fn new(data: Box<[T]>, label: String, guard: AllocationGuard) -> Self {
        Self {
            data,
            label,
            guard,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the field holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocation label.
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    pub(crate) fn into_parts(self) -> (Box<[T]>, AllocationGuard) {
        (self.data, self.guard)
    }
}

impl<T> Deref for Field<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for Field<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("label", &self.label)
            .field("len", &self.data.len())
            .finish()
    }
}
