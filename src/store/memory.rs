use std::collections::HashSet;

use parking_lot::RwLock;

use crate::record::{RecordId, SalesRecord};
use crate::store::{Store, StoreError};

#[derive(Debug, Default)]
struct Records {
    ids: HashSet<RecordId>,
    records: Vec<SalesRecord>,
}

/// A store keeping all records in process memory
///
/// Records live as long as the store does. Reads observe a consistent
/// snapshot, since writers hold the lock for the whole insert.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Records>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn insert(&self, record: &SalesRecord) -> Result<(), StoreError> {
        self.insert_batch(std::slice::from_ref(record))
    }

    fn insert_batch(&self, records: &[SalesRecord]) -> Result<(), StoreError> {
        let mut inner = self.inner.write();

        // check the whole batch before touching anything, so a duplicate
        // leaves the store as it was
        let mut seen = HashSet::with_capacity(records.len());
        for record in records {
            if inner.ids.contains(&record.id) || !seen.insert(record.id) {
                return Err(StoreError::Duplicate(record.id));
            }
        }

        inner.ids.extend(seen);
        inner.records.extend_from_slice(records);
        log::debug!("stored {} records in memory", records.len());

        Ok(())
    }

    fn scan_all(&self) -> Result<Vec<SalesRecord>, StoreError> {
        Ok(self.inner.read().records.clone())
    }
}
