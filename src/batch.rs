use std::path::Path;

use crate::parser::{parse_row, MalformedRowError};
use crate::record::SalesRecord;
use crate::validator::{validate, ValidationError};

/// Possible errors to occur while reading a batch
///
/// Any of these rejects the whole batch.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("the source does not contain a header row")]
    MissingHeader,
    #[error(transparent)]
    Malformed(#[from] MalformedRowError),
    #[error("row {row}: {source}")]
    Invalid {
        row: usize,
        #[source]
        source: ValidationError,
    },
    #[error("row {row}: failed to read the row: {source}")]
    Unreadable {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("failed to read the source: {0}")]
    Csv(#[from] csv::Error),
}

impl BatchError {
    /// The 1-indexed data row that rejected the batch, if a row is to blame
    pub fn row(&self) -> Option<usize> {
        match self {
            BatchError::Malformed(err) => Some(err.row()),
            BatchError::Invalid { row, .. } | BatchError::Unreadable { row, .. } => Some(*row),
            BatchError::MissingHeader | BatchError::Csv(_) => None,
        }
    }
}

/// Reads a complete batch of sales records from a comma separated source
///
/// The first row is a header and is skipped without looking at it. Every
/// following row is parsed and validated in order; the batch is only handed
/// out once every row has been accepted.
pub struct BatchReader<R> {
    reader: csv::Reader<R>,
}

impl<R: std::io::Read> BatchReader<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: Self::builder().from_reader(reader),
        }
    }

    /// Converts every row of the source, failing on the first rejected row
    pub fn read(mut self) -> Result<Vec<SalesRecord>, BatchError> {
        if self.reader.byte_headers()?.is_empty() {
            return Err(BatchError::MissingHeader);
        }

        let mut records = Vec::new();
        for (fields, row) in self.reader.records().zip(1..) {
            let fields = fields.map_err(|source| BatchError::Unreadable { row, source })?;
            let record = parse_row(row, &fields)?;
            let record = validate(record).map_err(|source| BatchError::Invalid { row, source })?;
            records.push(record);
        }

        log::debug!("read a batch of {} records", records.len());
        Ok(records)
    }

    fn builder() -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        // the column count is checked per row, so a short row is reported
        // with its position instead of as a generic csv error
        builder.has_headers(true).flexible(true).trim(csv::Trim::None);
        builder
    }
}

impl BatchReader<std::fs::File> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BatchError> {
        Ok(Self {
            reader: Self::builder().from_path(path)?,
        })
    }
}
