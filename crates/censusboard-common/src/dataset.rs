//! Dataset loading.
//!
//! Two datasets ship inside the binary: `sample` uses placeholder institution
//! names, `showcase` uses real school and college names. Either can be
//! replaced by a local JSON or YAML file with the same layout.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::entities::{checked_enrollment, StateRecord};
use crate::error::{CensusError, Result};

const SAMPLE_JSON: &str = include_str!("../data/states_sample.json");
const SHOWCASE_JSON: &str = include_str!("../data/states_showcase.json");

/// Where the dashboard's records come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatasetSource {
    #[default]
    Sample,
    Showcase,
    File(PathBuf),
}

impl FromStr for DatasetSource {
    type Err = CensusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" => Err(CensusError::Config("dataset source must not be empty".to_string())),
            "sample" => Ok(DatasetSource::Sample),
            "showcase" => Ok(DatasetSource::Showcase),
            path => Ok(DatasetSource::File(PathBuf::from(path))),
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Sample => f.write_str("sample"),
            DatasetSource::Showcase => f.write_str("showcase"),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Serialize for DatasetSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DatasetSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Load and validate the records for `source`.
pub fn load_dataset(source: &DatasetSource) -> Result<Vec<StateRecord>> {
    let records = match source {
        DatasetSource::Sample => parse_json(SAMPLE_JSON)?,
        DatasetSource::Showcase => parse_json(SHOWCASE_JSON)?,
        DatasetSource::File(path) => load_file(path)?,
    };
    ensure_unique_states(&records)?;
    ensure_sums_fit(&records)?;
    debug!(source = %source, records = records.len(), "Dataset loaded");
    Ok(records)
}

fn load_file(path: &Path) -> Result<Vec<StateRecord>> {
    let content = std::fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("yaml") | Some("yml") => parse_yaml(&content),
        Some("json") => parse_json(&content),
        _ => Err(CensusError::Dataset(format!(
            "unsupported dataset file extension: {}",
            path.display()
        ))),
    }
}

pub fn parse_json(content: &str) -> Result<Vec<StateRecord>> {
    serde_json::from_str(content).map_err(|e| CensusError::Dataset(e.to_string()))
}

pub fn parse_yaml(content: &str) -> Result<Vec<StateRecord>> {
    serde_yaml::from_str(content).map_err(|e| CensusError::Dataset(e.to_string()))
}

/// State names are selection keys, so they must be unique.
fn ensure_unique_states(records: &[StateRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.state.as_str()) {
            return Err(CensusError::DuplicateState(record.state.clone()));
        }
    }
    Ok(())
}

/// Category and enrollment sums must fit in a `u64`, so the projection
/// and totals check never saturate on loaded data.
fn ensure_sums_fit(records: &[StateRecord]) -> Result<()> {
    for record in records {
        let overflowed = if record.population.checked_sum().is_none() {
            Some("category counts")
        } else if checked_enrollment(record.schools()).is_none() {
            Some("school enrollment")
        } else if checked_enrollment(record.colleges()).is_none() {
            Some("college enrollment")
        } else {
            None
        };
        if let Some(what) = overflowed {
            return Err(CensusError::Dataset(format!(
                "{}: {} overflow a 64-bit total",
                record.state, what
            )));
        }
    }
    Ok(())
}
