//! Core record types for the per-state dataset and its charting projection.
//! Field names on the wire follow the published dataset layout
//! (`WhiteTotal`, `Institutions.Schools[].TotalStudents`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Population categories
// ---------------------------------------------------------------------------

/// Population category. Declaration order is the display order everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    White,
    Black,
    Indian,
    Asian,
    Hawaiian,
    Other,
    TwoOrMore,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::White,
        Category::Black,
        Category::Indian,
        Category::Asian,
        Category::Hawaiian,
        Category::Other,
        Category::TwoOrMore,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::White     => "White",
            Category::Black     => "Black",
            Category::Indian    => "Indian",
            Category::Asian     => "Asian",
            Category::Hawaiian  => "Hawaiian",
            Category::Other     => "Other",
            Category::TwoOrMore => "TwoOrMore",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Population counts by category, as stored on a state record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationCounts {
    #[serde(rename = "WhiteTotal")]
    pub white: u64,
    #[serde(rename = "BlackTotal")]
    pub black: u64,
    #[serde(rename = "IndianTotal")]
    pub indian: u64,
    #[serde(rename = "AsianTotal")]
    pub asian: u64,
    #[serde(rename = "HawaiianTotal")]
    pub hawaiian: u64,
    #[serde(rename = "OtherTotal")]
    pub other: u64,
    #[serde(rename = "TwoOrMoreTotal")]
    pub two_or_more: u64,
}

impl PopulationCounts {
    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::White     => self.white,
            Category::Black     => self.black,
            Category::Indian    => self.indian,
            Category::Asian     => self.asian,
            Category::Hawaiian  => self.hawaiian,
            Category::Other     => self.other,
            Category::TwoOrMore => self.two_or_more,
        }
    }

    /// Counts in `Category::ALL` order.
    pub fn values(&self) -> [u64; 7] {
        Category::ALL.map(|c| self.get(c))
    }

    /// Category sum, or `None` if it does not fit in a `u64`.
    pub fn checked_sum(&self) -> Option<u64> {
        self.values().iter().try_fold(0u64, |acc, &v| acc.checked_add(v))
    }

    /// Category sum, saturating at `u64::MAX`. Datasets that would saturate
    /// are rejected at load, so this only saturates for hand-built records.
    pub fn sum(&self) -> u64 {
        self.values().iter().fold(0u64, |acc, &v| acc.saturating_add(v))
    }
}

// ---------------------------------------------------------------------------
// Institutions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionRecord {
    #[serde(rename = "Name")]
    pub name: String,
    /// Free-form label, e.g. "Public", "Community", "University".
    #[serde(rename = "Type")]
    pub institution_type: String,
    #[serde(rename = "TotalStudents")]
    pub total_students: u64,
}

/// Total enrollment across `institutions`, or `None` on overflow.
pub fn checked_enrollment(institutions: &[InstitutionRecord]) -> Option<u64> {
    institutions
        .iter()
        .try_fold(0u64, |acc, i| acc.checked_add(i.total_students))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstitutionKind {
    School,
    College,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institutions {
    #[serde(rename = "Schools", default)]
    pub schools: Vec<InstitutionRecord>,
    #[serde(rename = "Colleges", default)]
    pub colleges: Vec<InstitutionRecord>,
}

// ---------------------------------------------------------------------------
// State record
// ---------------------------------------------------------------------------

/// One row of the dataset. `total` is carried as published and is not
/// required to equal `population.sum()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Total")]
    pub total: u64,
    #[serde(flatten)]
    pub population: PopulationCounts,
    #[serde(rename = "Institutions", default)]
    pub institutions: Institutions,
}

impl StateRecord {
    pub fn schools(&self) -> &[InstitutionRecord] {
        &self.institutions.schools
    }

    pub fn colleges(&self) -> &[InstitutionRecord] {
        &self.institutions.colleges
    }
}

// ---------------------------------------------------------------------------
// Derived row
// ---------------------------------------------------------------------------

/// Flat charting row derived from a [`StateRecord`]: category counts plus
/// enrollment sums. Built once at load and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DerivedRow {
    pub state: String,
    pub white: u64,
    pub black: u64,
    pub indian: u64,
    pub asian: u64,
    pub hawaiian: u64,
    pub other: u64,
    pub two_or_more: u64,
    pub total_schools: u64,
    pub total_colleges: u64,
}

impl DerivedRow {
    pub fn value(&self, category: Category) -> u64 {
        match category {
            Category::White     => self.white,
            Category::Black     => self.black,
            Category::Indian    => self.indian,
            Category::Asian     => self.asian,
            Category::Hawaiian  => self.hawaiian,
            Category::Other     => self.other,
            Category::TwoOrMore => self.two_or_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALABAMA: &str = r#"{
        "State": "Alabama",
        "Total": 5028090,
        "WhiteTotal": 3329010,
        "BlackTotal": 1326343,
        "IndianTotal": 21122,
        "AsianTotal": 69808,
        "HawaiianTotal": 2253,
        "OtherTotal": 279556,
        "TwoOrMoreTotal": 185632,
        "Institutions": {
            "Schools": [
                { "Name": "School A", "Type": "Public", "TotalStudents": 500 },
                { "Name": "School B", "Type": "Private", "TotalStudents": 300 }
            ],
            "Colleges": [
                { "Name": "College A", "Type": "Community", "TotalStudents": 1200 },
                { "Name": "College B", "Type": "University", "TotalStudents": 1500 }
            ]
        }
    }"#;

    #[test]
    fn test_parse_state_record() {
        let record: StateRecord = serde_json::from_str(ALABAMA).unwrap();
        assert_eq!(record.state, "Alabama");
        assert_eq!(record.total, 5_028_090);
        assert_eq!(record.population.white, 3_329_010);
        assert_eq!(record.population.two_or_more, 185_632);
        assert_eq!(record.schools().len(), 2);
        assert_eq!(record.colleges()[1].name, "College B");
        assert_eq!(record.colleges()[1].institution_type, "University");
    }

    #[test]
    fn test_missing_institutions_default_to_empty() {
        let json = r#"{
            "State": "Nowhere", "Total": 0,
            "WhiteTotal": 0, "BlackTotal": 0, "IndianTotal": 0, "AsianTotal": 0,
            "HawaiianTotal": 0, "OtherTotal": 0, "TwoOrMoreTotal": 0
        }"#;
        let record: StateRecord = serde_json::from_str(json).unwrap();
        assert!(record.schools().is_empty());
        assert!(record.colleges().is_empty());
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let json = ALABAMA.replace("\"TotalStudents\": 500", "\"TotalStudents\": -5");
        assert!(serde_json::from_str::<StateRecord>(&json).is_err());
    }

    #[test]
    fn test_population_values_follow_category_order() {
        let record: StateRecord = serde_json::from_str(ALABAMA).unwrap();
        assert_eq!(
            record.population.values(),
            [3_329_010, 1_326_343, 21_122, 69_808, 2_253, 279_556, 185_632]
        );
        assert_eq!(record.population.sum(), 5_213_724);
    }

    #[test]
    fn test_sums_at_u64_limit() {
        let counts = PopulationCounts { white: u64::MAX, black: 1, ..PopulationCounts::default() };
        assert_eq!(counts.checked_sum(), None);
        assert_eq!(counts.sum(), u64::MAX);

        let schools = vec![
            InstitutionRecord { name: "Big".into(), institution_type: "Public".into(), total_students: u64::MAX },
            InstitutionRecord { name: "Small".into(), institution_type: "Public".into(), total_students: 1 },
        ];
        assert_eq!(checked_enrollment(&schools), None);
        assert_eq!(checked_enrollment(&schools[..1]), Some(u64::MAX));
        assert_eq!(checked_enrollment(&[]), Some(0));
    }

    #[test]
    fn test_derived_row_serializes_with_chart_column_names() {
        let row = DerivedRow {
            state: "Alabama".to_string(),
            white: 1, black: 2, indian: 3, asian: 4, hawaiian: 5, other: 6, two_or_more: 7,
            total_schools: 800,
            total_colleges: 2700,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["State"], "Alabama");
        assert_eq!(value["TwoOrMore"], 7);
        assert_eq!(value["TotalSchools"], 800);
        assert_eq!(value["TotalColleges"], 2700);
    }

    #[test]
    fn test_category_labels() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["White", "Black", "Indian", "Asian", "Hawaiian", "Other", "TwoOrMore"]);
    }
}
