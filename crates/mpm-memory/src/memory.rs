//! Labelled allocation of per-particle fields.

use std::mem;
use std::sync::Arc;

use mpm_types::MpmResult;

use crate::field::Field;
use crate::ledger::{AllocationGuard, Entry, Ledger};

/// One live allocation as reported by [`Memory::records`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRecord {
    /// Allocation label, e.g. `solid-block1:vol0`.
    pub label: String,
    /// Element count.
    pub len: usize,
    /// Size in bytes.
    pub bytes: usize,
}

/// Allocator and ledger for per-particle fields.
///
/// Cloning a `Memory` shares the ledger, so a domain and all of its
/// solids report into the same table.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    ledger: Arc<Ledger>,
}

impl Memory {
    /// Creates an allocator with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a field of `len` copies of `fill`.
    ///
    /// # Errors
    ///
    /// A state error if a live field already holds `label`.
    pub fn create<T: Clone>(&self, len: usize, fill: T, label: &str) -> MpmResult<Field<T>> {
        self.track(vec![fill; len], label)
    }

    /// Returns a field of length `len` labelled `label`.
    ///
    /// With no `existing` field this is a fresh default-filled allocation.
    /// Otherwise the leading elements of `existing` are moved over, any
    /// new tail is default-filled, and the old allocation is released
    /// before the new one is recorded, so `existing` may carry `label`.
    ///
    /// # Errors
    ///
    /// A state error if another live field already holds `label`.
    pub fn grow<T: Default>(
        &self,
        existing: Option<Field<T>>,
        len: usize,
        label: &str,
    ) -> MpmResult<Field<T>> {
        let data = match existing {
            Some(old) => {
                let (old_data, guard) = old.into_parts();
                drop(guard);
                let mut data = old_data.into_vec();
                data.truncate(len);
                data.resize_with(len, T::default);
                data
            }
            None => {
                let mut data = Vec::with_capacity(len);
                data.resize_with(len, T::default);
                data
            }
        };
        self.track(data, label)
    }

    /// Releases a field. Equivalent to dropping it.
    pub fn destroy<T>(&self, field: Field<T>) {
        drop(field);
    }

    /// Number of live allocations.
    pub fn outstanding(&self) -> usize {
        self.ledger.snapshot().len()
    }

    /// Total bytes held by live allocations.
    pub fn outstanding_bytes(&self) -> usize {
        self.ledger.snapshot().iter().map(|e| e.bytes).sum()
    }

    /// Number of live allocations whose label starts with `prefix`.
    pub fn outstanding_with_prefix(&self, prefix: &str) -> usize {
        self.ledger
            .snapshot()
            .iter()
            .filter(|e| e.label.starts_with(prefix))
            .count()
    }

    /// Sorted labels of all live allocations.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.ledger.snapshot().into_iter().map(|e| e.label).collect();
        labels.sort();
        labels
    }

    /// All live allocations, sorted by label.
    pub fn records(&self) -> Vec<AllocationRecord> {
        let mut records: Vec<AllocationRecord> = self
            .ledger
            .snapshot()
            .into_iter()
            .map(|e| AllocationRecord {
                label: e.label,
                len: e.len,
                bytes: e.bytes,
            })
            .collect();
        records.sort_by(|a, b| a.label.cmp(&b.label));
        records
    }

    fn track<T>(&self, data: Vec<T>, label: &str) -> MpmResult<Field<T>> {
        let data = data.into_boxed_slice();
        let entry = Entry {
            label: label.to_string(),
            bytes: data.len() * mem::size_of::<T>(),
            len: data.len(),
        };
        let guard = AllocationGuard::new(Arc::clone(&self.ledger), entry)?;
        Ok(Field::new(data, label.to_string(), guard))
    }
}
