use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AlbumError {
    #[error("Storage failure")]
    Storage(#[source] DbError),

    #[error("{operation} timed out")]
    Timeout { operation: &'static str },
}

fn log_error(error: &AlbumError) {
    match error {
        AlbumError::Storage(e) => error!("Album storage failure: {}", e),
        AlbumError::Timeout { operation } => warn!("Album {} timed out", operation),
    }
}

impl IntoResponse for AlbumError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, error_message) = match self {
            Self::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load albums. Please try again.",
            ),
            Self::Timeout { .. } => (
                StatusCode::GATEWAY_TIMEOUT,
                "The database took too long to respond. Please try again.",
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<DbError> for AlbumError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Timeout { operation, .. } => Self::Timeout { operation },
            other => Self::Storage(other),
        }
    }
}
