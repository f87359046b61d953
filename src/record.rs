use chrono::{DateTime, Utc};

/// The externally supplied identifier of a sales record
#[derive(Clone, Copy, Debug, serde::Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The identifier of the product a sale refers to
#[derive(Clone, Copy, Debug, serde::Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The columns of a sales source, in the order they appear in a row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Id,
    Date,
    Amount,
    ProductId,
    Region,
}

impl Column {
    /// All columns in source order
    pub const ALL: [Column; 5] = [
        Column::Id,
        Column::Date,
        Column::Amount,
        Column::ProductId,
        Column::Region,
    ];

    /// The name of the column as it appears in the header row
    pub fn name(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Date => "date",
            Column::Amount => "amount",
            Column::ProductId => "product_id",
            Column::Region => "region",
        }
    }

    /// The zero based position of the column within a row
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One observed sale
///
/// The date carries no time of day: every record is normalized to
/// midnight UTC of its calendar date.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SalesRecord {
    pub id: RecordId,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub product_id: ProductId,
    pub region: String,
}

/// The grouping key of an aggregation
pub type GroupKey = (ProductId, String);

/// The total of all sales sharing one product and region
///
/// Aggregates are derived on demand and never stored.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AggregatedRecord {
    pub product_id: ProductId,
    pub total_sales: f64,
    pub region: String,
}

impl AggregatedRecord {
    pub fn key(&self) -> GroupKey {
        (self.product_id, self.region.clone())
    }
}
