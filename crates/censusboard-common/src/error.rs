use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CensusError {
    /// A selection named a state that is not in the dataset. The UI only ever
    /// selects names taken from the projection, so this means the two are out of sync.
    #[error("Unknown state: {0}")]
    UnknownState(String),

    #[error("Duplicate state in dataset: {0}")]
    DuplicateState(String),

    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("Dataset parse error: {0}")]
    Dataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CensusError>;

/// Error returned from JSON API handlers.
#[derive(Debug)]
pub struct ApiError(pub CensusError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            CensusError::UnknownState(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CensusError> for ApiError {
    fn from(err: CensusError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_state_maps_to_not_found() {
        let err = ApiError::from(CensusError::UnknownState("Atlantis".to_string()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.0.to_string(), "Unknown state: Atlantis");
    }

    #[test]
    fn test_other_errors_map_to_internal() {
        let err = ApiError::from(CensusError::Config("bad port".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
