use censusboard_common::entities::{InstitutionRecord, Institutions, PopulationCounts, StateRecord};

pub fn institution(name: &str, kind: &str, students: u64) -> InstitutionRecord {
    InstitutionRecord {
        name: name.to_string(),
        institution_type: kind.to_string(),
        total_students: students,
    }
}

pub fn alabama() -> StateRecord {
    StateRecord {
        state: "Alabama".to_string(),
        total: 5_028_090,
        population: PopulationCounts {
            white: 3_329_010,
            black: 1_326_343,
            indian: 21_122,
            asian: 69_808,
            hawaiian: 2_253,
            other: 279_556,
            two_or_more: 185_632,
        },
        institutions: Institutions {
            schools: vec![
                institution("School A", "Public", 500),
                institution("School B", "Private", 300),
            ],
            colleges: vec![
                institution("College A", "Community", 1200),
                institution("College B", "University", 1500),
            ],
        },
    }
}

/// A state with no institutions and a Total that matches its category sum.
pub fn empty_state(name: &str) -> StateRecord {
    StateRecord {
        state: name.to_string(),
        total: 70,
        population: PopulationCounts {
            white: 10, black: 10, indian: 10, asian: 10, hawaiian: 10, other: 10, two_or_more: 10,
        },
        institutions: Institutions::default(),
    }
}
