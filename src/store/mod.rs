pub use self::{memory::MemoryStore, sqlite::SqliteStore};

use crate::aggregate::aggregate;
use crate::record::{AggregatedRecord, RecordId, SalesRecord};

mod memory;
mod sqlite;

/// Possible errors to occur while talking to a store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("a record with id {0} is already stored")]
    Duplicate(RecordId),
    #[error("failed to open the store at {path}")]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("failed to create the store directory")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

/// The durable storage capability the pipeline depends on
///
/// A store is constructed once and shared by reference; implementations
/// synchronize internally. Records are never updated or deleted.
pub trait Store: Send + Sync {
    /// Persists a single record
    fn insert(&self, record: &SalesRecord) -> Result<(), StoreError>;

    /// Persists a whole batch in one step
    ///
    /// Either every record is stored, or none is.
    fn insert_batch(&self, records: &[SalesRecord]) -> Result<(), StoreError>;

    /// Every stored record, in insertion order
    fn scan_all(&self) -> Result<Vec<SalesRecord>, StoreError>;

    /// The totals of all stored records grouped by product and region
    ///
    /// Stores able to group natively may override this, as long as the
    /// result is the same set of groups and totals.
    fn aggregate(&self) -> Result<Vec<AggregatedRecord>, StoreError> {
        Ok(aggregate(&self.scan_all()?))
    }
}
