//! censusboard-common — Shared types, errors, and configuration used across all censusboard crates.

pub mod error;
pub mod entities;
pub mod dataset;
pub mod config;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use dataset::{DatasetSource, load_dataset};
pub use entities::{Category, DerivedRow, InstitutionKind, InstitutionRecord, PopulationCounts, StateRecord};
pub use error::{CensusError, Result};
