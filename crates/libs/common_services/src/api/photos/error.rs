use crate::api::photos::validation::FieldError;
use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum PhotosError {
    #[error("Photo not found: {0}")]
    NotFound(String),

    #[error("Request validation failed")]
    ValidationRejected(Vec<FieldError>),

    #[error("Storage failure")]
    Storage(#[source] DbError),

    #[error("{operation} timed out")]
    Timeout { operation: &'static str },

    #[error("Album reassignment failed at step '{step}'")]
    PartialUpdate {
        step: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl PhotosError {
    #[must_use]
    pub fn invalid_field(error: FieldError) -> Self {
        Self::ValidationRejected(vec![error])
    }
}

fn log_error(error: &PhotosError) {
    match error {
        PhotosError::NotFound(id) => warn!("Photo not found: {}", id),
        PhotosError::ValidationRejected(details) => {
            warn!("Photo request rejected: {:?}", details);
        }
        PhotosError::Storage(e) => error!("Photo storage failure: {}", e),
        PhotosError::Timeout { operation } => warn!("Photo {} timed out", operation),
        PhotosError::PartialUpdate { step, source } => {
            error!("Album reassignment rolled back at step '{}': {}", step, source);
        }
    }
}

impl IntoResponse for PhotosError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, body) = match self {
            Self::NotFound(id) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("Photo with ID '{id}' not found") }),
            ),
            Self::ValidationRejected(details) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation failed",
                    "details": details.iter().map(ToString::to_string).collect::<Vec<_>>(),
                }),
            ),
            Self::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "A database error occurred. Please try again." }),
            ),
            Self::Timeout { .. } => (
                StatusCode::GATEWAY_TIMEOUT,
                json!({ "error": "The database took too long to respond. Please try again." }),
            ),
            Self::PartialUpdate { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to update the photo's album. No changes were saved. Please try again." }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<DbError> for PhotosError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Timeout { operation, .. } => Self::Timeout { operation },
            DbError::PartialUpdate { step, source } => Self::PartialUpdate { step, source },
            other => Self::Storage(other),
        }
    }
}
