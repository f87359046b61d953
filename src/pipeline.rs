use std::path::Path;

use crate::batch::{BatchError, BatchReader};
use crate::parser::{parse_row, MalformedRowError};
use crate::record::{AggregatedRecord, SalesRecord};
use crate::store::{Store, StoreError};
use crate::validator::{validate, ValidationError};

/// Possible errors to occur while running a pipeline operation
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("the batch was rejected: {0}")]
    Batch(#[from] BatchError),
    #[error(transparent)]
    Malformed(#[from] MalformedRowError),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("the store failed: {0}")]
    Store(#[from] StoreError),
}

/// The operations exposed to whatever transport fronts the sales data
///
/// The pipeline does not own its store, it borrows the one the caller set
/// up, so several pipelines (or other readers) can share it.
pub struct SalesPipeline<'s, S: ?Sized> {
    store: &'s S,
}

impl<'s, S: Store + ?Sized> SalesPipeline<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Reads a whole batch and persists it in a single store call
    ///
    /// Nothing is stored unless every row of the batch is accepted. Returns
    /// the number of stored records.
    pub fn ingest<R: std::io::Read>(&self, reader: BatchReader<R>) -> Result<usize, PipelineError> {
        let records = reader.read().map_err(|err| {
            log::warn!("rejected batch: {}", err);
            err
        })?;

        self.store.insert_batch(&records)?;
        log::info!("ingested {} sales records", records.len());

        Ok(records.len())
    }

    /// Ingests the batch stored in the file at `path`
    pub fn ingest_path(&self, path: impl AsRef<Path>) -> Result<usize, PipelineError> {
        log::info!("ingesting sales data from {}", path.as_ref().display());
        self.ingest(BatchReader::from_path(path)?)
    }

    /// Every stored record
    pub fn list_records(&self) -> Result<Vec<SalesRecord>, PipelineError> {
        Ok(self.store.scan_all()?)
    }

    /// The current totals per product and region
    pub fn list_aggregates(&self) -> Result<Vec<AggregatedRecord>, PipelineError> {
        Ok(self.store.aggregate()?)
    }

    /// Parses, validates and stores a single row
    ///
    /// The row goes through the same conversion as a batch row and is
    /// reported as row 1.
    pub fn add_record(&self, fields: &csv::StringRecord) -> Result<SalesRecord, PipelineError> {
        let record = validate(parse_row(1, fields)?)?;
        self.store.insert(&record)?;
        log::debug!("added sales record {}", record.id);

        Ok(record)
    }
}
