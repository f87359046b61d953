#![allow(dead_code)]

use proptest::prelude::*;

pub const HEADER: &str = "id,date,amount,product_id,region";

/// A valid data row, without its id
#[derive(Clone, Debug)]
pub struct Row {
    pub day: u32,
    pub amount: f64,
    pub product_id: i64,
    pub region: &'static str,
}

pub fn row_strategy() -> impl Strategy<Value = Row> {
    (
        1u32..=28,
        (-1_000_000i64..1_000_000).prop_map(|cents| cents as f64 / 100.0),
        1i64..=4,
        prop_oneof![Just("east"), Just("west"), Just("North"), Just("north")],
    )
        .prop_map(|(day, amount, product_id, region)| Row {
            day,
            amount,
            product_id,
            region,
        })
}

pub fn rows_strategy(max: usize) -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(row_strategy(), 0..max)
}

/// Renders the rows as a CSV source, numbering ids from 1
pub fn to_csv(rows: &[Row]) -> String {
    let mut csv = format!("{}\n", HEADER);
    for (row, id) in rows.iter().zip(1..) {
        csv.push_str(&format!(
            "{},2024-02-{:02},{},{},{}\n",
            id, row.day, row.amount, row.product_id, row.region
        ));
    }
    csv
}
