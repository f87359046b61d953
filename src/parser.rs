use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use crate::record::{Column, ProductId, RecordId, SalesRecord};

/// The calendar date format of the `date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Possible errors to occur while converting a row into a [`SalesRecord`]
///
/// `row` is the 1-indexed position of the row among the data rows of its
/// source; the header row is not counted.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MalformedRowError {
    #[error("row {row}: expected 5 columns, found {found}")]
    ColumnCount { row: usize, found: usize },
    #[error("row {row}: column `{column}` could not be converted from {value:?}")]
    InvalidField {
        row: usize,
        column: Column,
        value: String,
    },
}

impl MalformedRowError {
    /// The row the error occurred in
    pub fn row(&self) -> usize {
        match self {
            MalformedRowError::ColumnCount { row, .. } => *row,
            MalformedRowError::InvalidField { row, .. } => *row,
        }
    }

    /// The column that failed to convert, if the row had the right shape
    pub fn column(&self) -> Option<Column> {
        match self {
            MalformedRowError::ColumnCount { .. } => None,
            MalformedRowError::InvalidField { column, .. } => Some(*column),
        }
    }
}

/// Converts one data row into a candidate record
///
/// Columns are converted in source order, so the error names the first
/// column that fails. No column is ever defaulted.
pub fn parse_row(row: usize, fields: &csv::StringRecord) -> Result<SalesRecord, MalformedRowError> {
    if fields.len() != Column::ALL.len() {
        return Err(MalformedRowError::ColumnCount {
            row,
            found: fields.len(),
        });
    }

    let field = |column: Column| fields.get(column.index()).unwrap_or_default();
    let invalid = |column: Column| MalformedRowError::InvalidField {
        row,
        column,
        value: field(column).to_owned(),
    };

    let id = field(Column::Id)
        .parse::<i64>()
        .map_err(|_| invalid(Column::Id))?;
    let date = NaiveDate::parse_from_str(field(Column::Date), DATE_FORMAT)
        .map_err(|_| invalid(Column::Date))?;
    let amount = field(Column::Amount)
        .parse::<f64>()
        .map_err(|_| invalid(Column::Amount))?;
    let product_id = field(Column::ProductId)
        .parse::<i64>()
        .map_err(|_| invalid(Column::ProductId))?;

    Ok(SalesRecord {
        id: RecordId::new(id),
        // any time of day is dropped, every sale happens at midnight UTC
        date: Utc.from_utc_datetime(&date.and_time(NaiveTime::default())),
        amount,
        product_id: ProductId::new(product_id),
        region: field(Column::Region).to_owned(),
    })
}
