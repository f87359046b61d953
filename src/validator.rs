use crate::record::{Column, SalesRecord};

/// The domain constraints a parsed record has to satisfy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// The value has to be greater than zero
    Positive,
    /// The value has to be a finite number
    Finite,
    /// The value has to contain something besides whitespace
    NonEmpty,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Rule::Positive => "must be positive",
            Rule::Finite => "must be a finite number",
            Rule::NonEmpty => "must not be empty",
        })
    }
}

/// A parsed field violates a domain constraint
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("field `{field}` {rule}")]
pub struct ValidationError {
    pub field: Column,
    pub rule: Rule,
}

/// Checks the domain constraints of a candidate record
///
/// Returns the record unchanged if it is acceptable. The sign of `amount`
/// is not constrained, refunds are stored as negative sales.
pub fn validate(record: SalesRecord) -> Result<SalesRecord, ValidationError> {
    let violation = if record.id.get() <= 0 {
        Some((Column::Id, Rule::Positive))
    } else if !record.amount.is_finite() {
        Some((Column::Amount, Rule::Finite))
    } else if record.product_id.get() <= 0 {
        Some((Column::ProductId, Rule::Positive))
    } else if record.region.trim().is_empty() {
        Some((Column::Region, Rule::NonEmpty))
    } else {
        None
    };

    match violation {
        None => Ok(record),
        Some((field, rule)) => Err(ValidationError { field, rule }),
    }
}
