pub use self::{
    aggregate::aggregate,
    batch::{BatchError, BatchReader},
    parser::{parse_row, MalformedRowError, DATE_FORMAT},
    pipeline::{PipelineError, SalesPipeline},
    record::{AggregatedRecord, Column, GroupKey, ProductId, RecordId, SalesRecord},
    store::{MemoryStore, SqliteStore, Store, StoreError},
    validator::{validate, Rule, ValidationError},
};

mod aggregate;
mod batch;
mod parser;
mod pipeline;
mod record;
mod store;
mod validator;
