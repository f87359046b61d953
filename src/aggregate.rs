use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::record::{AggregatedRecord, GroupKey, SalesRecord};

/// Sums the amounts of all records sharing a product and region
///
/// Amounts are accumulated as `f64` in the order the records are yielded,
/// without any rounding. The same records in the same order therefore always
/// produce bit-identical totals. Groups are returned in the order their first
/// record was seen, callers must not rely on that order.
pub fn aggregate<'r, I>(records: I) -> Vec<AggregatedRecord>
where
    I: IntoIterator<Item = &'r SalesRecord>,
{
    let mut groups: HashMap<GroupKey, usize> = HashMap::new();
    let mut aggregated: Vec<AggregatedRecord> = Vec::new();

    for record in records {
        match groups.entry((record.product_id, record.region.clone())) {
            Entry::Occupied(o) => aggregated[*o.get()].total_sales += record.amount,
            Entry::Vacant(v) => {
                v.insert(aggregated.len());
                aggregated.push(AggregatedRecord {
                    product_id: record.product_id,
                    total_sales: record.amount,
                    region: record.region.clone(),
                });
            }
        }
    }

    aggregated
}
