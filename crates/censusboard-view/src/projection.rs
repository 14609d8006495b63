//! Aggregate projection: state records → flat chart rows.

use censusboard_common::entities::{DerivedRow, InstitutionRecord, StateRecord};

/// Total enrollment across `institutions`. Zero for an empty list; saturates
/// at `u64::MAX` (loaded datasets never reach it, see `dataset::load_dataset`).
pub fn total_students(institutions: &[InstitutionRecord]) -> u64 {
    institutions
        .iter()
        .fold(0u64, |acc, i| acc.saturating_add(i.total_students))
}

pub fn derive_row(record: &StateRecord) -> DerivedRow {
    let p = &record.population;
    DerivedRow {
        state: record.state.clone(),
        white: p.white,
        black: p.black,
        indian: p.indian,
        asian: p.asian,
        hawaiian: p.hawaiian,
        other: p.other,
        two_or_more: p.two_or_more,
        total_schools: total_students(record.schools()),
        total_colleges: total_students(record.colleges()),
    }
}

/// One row per record, in input order.
pub fn project(records: &[StateRecord]) -> Vec<DerivedRow> {
    records.iter().map(derive_row).collect()
}
