//! Shared allocation ledger.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use mpm_types::{MpmError, MpmResult};

#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub label: String,
    pub bytes: usize,
    pub len: usize,
}

/// Live allocations keyed by a monotonically increasing ticket.
///
/// No two live entries share a label.
#[derive(Debug, Default)]
pub(crate) struct Ledger {
    entries: Mutex<HashMap<u64, Entry>>,
    next_ticket: AtomicU64,
}

impl Ledger {
    pub fn record(&self, entry: Entry) -> MpmResult<u64> {
        let mut entries = self.lock();
        if entries.values().any(|live| live.label == entry.label) {
            return Err(MpmError::DuplicateAllocation(entry.label));
        }
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(label = %entry.label, bytes = entry.bytes, "ledger_record");
        entries.insert(ticket, entry);
        Ok(ticket)
    }

    pub fn release(&self, ticket: u64) {
        if let Some(entry) = self.lock().remove(&ticket) {
            tracing::trace!(label = %entry.label, bytes = entry.bytes, "ledger_release");
        }
    }

    pub fn snapshot(&self) -> Vec<Entry> {
        self.lock().values().cloned().collect()
    }

    // A panic while holding the lock cannot leave the map half-updated,
    // so a poisoned lock is still safe to read.
    fn lock(&self) -> MutexGuard<'_, HashMap<u64, Entry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Removes its ledger entry when dropped.
#[derive(Debug)]
pub(crate) struct AllocationGuard {
    ticket: u64,
    ledger: Arc<Ledger>,
}

impl AllocationGuard {
    pub fn new(ledger: Arc<Ledger>, entry: Entry) -> MpmResult<Self> {
        let ticket = ledger.record(entry)?;
        Ok(Self { ticket, ledger })
    }
}

impl Drop for AllocationGuard {
    fn drop(&mut self) {
        self.ledger.release(self.ticket);
    }
}
