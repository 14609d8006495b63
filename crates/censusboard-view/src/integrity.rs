//! Totals integrity check.
//!
//! A record's `Total` is published alongside its category counts and is not
//! guaranteed to equal their sum (the census counts some people in more than
//! one category). The dashboard reports mismatches and only rejects them when
//! `dataset.enforce_totals` is set.

use censusboard_common::entities::StateRecord;
use censusboard_common::error::{CensusError, Result};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalMismatch {
    pub state: String,
    pub total: u64,
    pub category_sum: u64,
}

pub fn check_totals(records: &[StateRecord]) -> Vec<TotalMismatch> {
    records
        .iter()
        .filter_map(|r| {
            let category_sum = r.population.sum();
            (category_sum != r.total).then(|| TotalMismatch {
                state: r.state.clone(),
                total: r.total,
                category_sum,
            })
        })
        .collect()
}

/// Log every mismatch; fail on the first one when `enforce` is set.
pub fn verify_totals(records: &[StateRecord], enforce: bool) -> Result<Vec<TotalMismatch>> {
    let mismatches = check_totals(records);
    for m in &mismatches {
        warn!(state = %m.state, total = m.total, category_sum = m.category_sum, "Total differs from category sum");
    }
    if enforce {
        if let Some(m) = mismatches.first() {
            return Err(CensusError::IntegrityViolation(format!(
                "{}: Total {} != category sum {}",
                m.state, m.total, m.category_sum
            )));
        }
    }
    Ok(mismatches)
}
