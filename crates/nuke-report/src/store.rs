//! Thread-safe store of deletion outcomes

use crate::entry::{BatchEntry, Entry};
use crate::reporter::ReportSummary;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Outcomes of a cleanup run, keyed by resource identifier
///
/// Cloning the store yields another handle to the same records, so each
/// worker can own one. Recording the same identifier twice keeps the last
/// entry.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    records: Mutex<HashMap<String, Entry>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a single outcome, replacing any previous entry for the identifier
    pub fn record(&self, entry: Entry) {
        tracing::debug!(
            identifier = %entry.identifier,
            resource_type = %entry.resource_type,
            failed = entry.is_failure(),
            "Recorded outcome"
        );

        let mut records = self.lock();
        records.insert(entry.identifier.clone(), entry);
    }

    /// Record one outcome per identifier in the batch
    ///
    /// Each identifier is a separate write; the batch as a whole is not atomic.
    pub fn record_batch(&self, batch: BatchEntry) {
        for entry in batch.entries() {
            self.record(entry);
        }
    }

    /// Point-in-time copy of all entries, in map order
    pub fn snapshot(&self) -> Vec<Entry> {
        self.lock().values().cloned().collect()
    }

    /// Get the entry recorded for an identifier
    pub fn get(&self, identifier: &str) -> Option<Entry> {
        self.lock().get(identifier).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Count of deleted and failed entries
    pub fn summary(&self) -> ReportSummary {
        ReportSummary::from_entries(self.lock().values())
    }

    // Entries are inserted whole, so a map behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.inner
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
