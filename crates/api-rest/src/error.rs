//! Error-to-response mapping for the REST boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use pms_core::{QueryError, StoreError};
use serde_json::json;

/// Errors surfaced by REST handlers.
///
/// Lookup misses are client errors here, while the bulk `/view` and `/sort`
/// endpoints report an empty collection as an informational message instead.
/// That asymmetry is deliberate and matches the service's published
/// behaviour.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to fetch patient records.")]
    Store(#[from] StoreError),
    #[error("Patient with ID '{0}' not found.")]
    PatientNotFound(String),
    #[error("Patient(s) with name '{0}' not found.")]
    NameNotFound(String),
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(_) | ApiError::Query(QueryError::Store(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::PatientNotFound(_) | ApiError::NameNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Query(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Backing-store details go to the log, not to the client.
        let message = match &self {
            ApiError::Store(e) | ApiError::Query(QueryError::Store(e)) => {
                tracing::error!("patient store unavailable: {e}");
                "Failed to fetch patient records.".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
