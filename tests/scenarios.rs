mod common;

use std::collections::HashMap;

use common::HEADER;
use sales_pipeline::{
    BatchError, BatchReader, Column, MemoryStore, PipelineError, ProductId, SalesPipeline,
    SqliteStore, Store,
};

fn stores() -> Vec<Box<dyn Store>> {
    vec![
        Box::new(MemoryStore::new()),
        Box::new(SqliteStore::open_in_memory().unwrap()),
    ]
}

fn ingest(store: &dyn Store, rows: &str) -> Result<usize, PipelineError> {
    let csv = format!("{}\n{}", HEADER, rows);
    SalesPipeline::new(store).ingest(BatchReader::from_reader(csv.as_bytes()))
}

#[test]
fn scenario_a_groups_by_product_and_region() {
    for store in stores() {
        ingest(
            &*store,
            "1,2024-01-01,100.50,10,east\n\
             2,2024-01-02,50.25,10,east\n\
             3,2024-01-01,75.00,20,west\n",
        )
        .unwrap();

        let aggregated = SalesPipeline::new(&*store)
            .list_aggregates()
            .unwrap()
            .into_iter()
            .map(|a| (a.key(), a.total_sales))
            .collect::<HashMap<_, _>>();

        assert_eq!(
            aggregated,
            HashMap::from([
                ((ProductId::new(10), "east".to_owned()), 150.75),
                ((ProductId::new(20), "west".to_owned()), 75.00),
            ]),
        );
    }
}

#[test]
fn scenario_b_non_numeric_amount_rejects_the_batch() {
    for store in stores() {
        let err = ingest(&*store, "1,2024-01-01,abc,10,east\n").unwrap_err();

        match &err {
            PipelineError::Batch(BatchError::Malformed(malformed)) => {
                assert_eq!(malformed.row(), 1);
                assert_eq!(malformed.column(), Some(Column::Amount));
            }
            err => panic!("unexpected error: {}", err),
        }
        assert!(err.to_string().contains("amount"));
        assert!(store.scan_all().unwrap().is_empty());
    }
}

#[test]
fn scenario_c_header_only_is_not_an_error() {
    for store in stores() {
        assert_eq!(ingest(&*store, "").unwrap(), 0);
        assert!(store.scan_all().unwrap().is_empty());
        assert!(store.aggregate().unwrap().is_empty());
    }
}

#[test]
fn ingests_from_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("sales_data.csv");
    std::fs::write(&source, format!("{}\n1,2024-01-01,9.99,3,south\n", HEADER)).unwrap();

    let store = SqliteStore::open(dir.path().join("sales.db")).unwrap();
    let pipeline = SalesPipeline::new(&store);

    assert_eq!(pipeline.ingest_path(&source).unwrap(), 1);
    assert_eq!(pipeline.list_records().unwrap()[0].region, "south");
}

#[test]
fn missing_file_is_reported() {
    let store = MemoryStore::new();
    let err = SalesPipeline::new(&store)
        .ingest_path("does/not/exist.csv")
        .unwrap_err();

    assert!(matches!(err, PipelineError::Batch(BatchError::Csv(_))));
}

#[test]
fn every_store_sums_without_compensation() {
    for store in stores() {
        ingest(
            &*store,
            "1,2024-01-01,1e16,1,east\n\
             2,2024-01-02,1,1,east\n\
             3,2024-01-03,1,1,east\n",
        )
        .unwrap();

        let aggregated = store.aggregate().unwrap();
        assert_eq!(aggregated.len(), 1);
        assert_eq!(aggregated[0].total_sales.to_bits(), 1e16f64.to_bits());
    }
}
