//! Selection state and drill-down detail resolution.
//!
//! The selection has two states, `NoSelection` (initial) and `Selected(name)`.
//! Selecting a state moves to `Selected`; nothing moves back. Resolving a
//! selection against the records yields the detail shown under the overview
//! chart: the population breakdown and the institution enrollment listing.

use censusboard_common::entities::{Category, InstitutionKind, StateRecord};
use censusboard_common::error::{CensusError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(String),
}

impl Selection {
    pub fn state(&self) -> Option<&str> {
        match self {
            Selection::NoSelection => None,
            Selection::Selected(name) => Some(name),
        }
    }

    pub fn select(&mut self, name: impl Into<String>) {
        *self = Selection::Selected(name.into());
    }
}

/// One pie slice. Values are raw counts; the renderer turns them into percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownSlice {
    pub category: Category,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstitutionBar {
    pub name: String,
    pub kind: InstitutionKind,
    pub institution_type: String,
    pub students: u64,
}

/// Drill-down view for the current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub state: Option<String>,
    /// "Institutions in {state}", empty when nothing is selected.
    pub title: String,
    pub breakdown: Vec<BreakdownSlice>,
    pub institutions: Vec<InstitutionBar>,
}

impl DetailView {
    /// The neutral result for `NoSelection`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_none()
    }

    pub fn for_record(record: &StateRecord) -> Self {
        Self {
            state: Some(record.state.clone()),
            title: format!("Institutions in {}", record.state),
            breakdown: breakdown(record),
            institutions: institutions(record),
        }
    }
}

pub fn breakdown(record: &StateRecord) -> Vec<BreakdownSlice> {
    Category::ALL
        .iter()
        .map(|&category| BreakdownSlice {
            category,
            value: record.population.get(category),
        })
        .collect()
}

/// Schools then colleges, each in dataset order.
pub fn institutions(record: &StateRecord) -> Vec<InstitutionBar> {
    let schools = record.schools().iter().map(|i| (InstitutionKind::School, i));
    let colleges = record.colleges().iter().map(|i| (InstitutionKind::College, i));
    schools
        .chain(colleges)
        .map(|(kind, i)| InstitutionBar {
            name: i.name.clone(),
            kind,
            institution_type: i.institution_type.clone(),
            students: i.total_students,
        })
        .collect()
}

pub fn find_record<'a>(records: &'a [StateRecord], name: &str) -> Result<&'a StateRecord> {
    records
        .iter()
        .find(|r| r.state == name)
        .ok_or_else(|| CensusError::UnknownState(name.to_string()))
}

/// Resolve `selection` against `records`. An unknown name is an error, never
/// an empty view.
pub fn resolve_detail(selection: &Selection, records: &[StateRecord]) -> Result<DetailView> {
    match selection {
        Selection::NoSelection => Ok(DetailView::empty()),
        Selection::Selected(name) => find_record(records, name).map(DetailView::for_record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{alabama, empty_state};
    use pretty_assertions::assert_eq;

    fn names_and_students(view: &DetailView) -> Vec<(&str, u64)> {
        view.institutions.iter().map(|i| (i.name.as_str(), i.students)).collect()
    }

    #[test]
    fn test_no_selection_is_neutral() {
        let view = resolve_detail(&Selection::NoSelection, &[alabama()]).unwrap();
        assert!(view.is_empty());
        assert!(view.breakdown.is_empty());
        assert!(view.institutions.is_empty());
        assert_eq!(view.title, "");
    }

    #[test]
    fn test_alabama_institution_sequence() {
        let selection = Selection::Selected("Alabama".to_string());
        let view = resolve_detail(&selection, &[empty_state("Alaska"), alabama()]).unwrap();
        assert_eq!(
            names_and_students(&view),
            vec![("School A", 500), ("School B", 300), ("College A", 1200), ("College B", 1500)]
        );
        assert_eq!(view.institutions[1].kind, InstitutionKind::School);
        assert_eq!(view.institutions[2].kind, InstitutionKind::College);
        assert_eq!(view.title, "Institutions in Alabama");
    }

    #[test]
    fn test_breakdown_matches_stored_counts() {
        let record = alabama();
        let view = resolve_detail(&Selection::Selected("Alabama".into()), &[record.clone()]).unwrap();
        let values: Vec<u64> = view.breakdown.iter().map(|s| s.value).collect();
        assert_eq!(values, record.population.values().to_vec());
        let categories: Vec<Category> = view.breakdown.iter().map(|s| s.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_state_without_institutions() {
        let view = resolve_detail(&Selection::Selected("Utah".into()), &[empty_state("Utah")]).unwrap();
        assert_eq!(view.breakdown.len(), 7);
        assert!(view.institutions.is_empty());
    }

    #[test]
    fn test_unknown_state_fails() {
        let err = resolve_detail(&Selection::Selected("Atlantis".into()), &[alabama()]).unwrap_err();
        assert!(matches!(err, CensusError::UnknownState(ref name) if name == "Atlantis"));
    }

    #[test]
    fn test_select_transitions() {
        let mut selection = Selection::default();
        assert_eq!(selection.state(), None);
        selection.select("Alabama");
        assert_eq!(selection.state(), Some("Alabama"));
        selection.select("Alaska");
        assert_eq!(selection, Selection::Selected("Alaska".to_string()));
    }
}
