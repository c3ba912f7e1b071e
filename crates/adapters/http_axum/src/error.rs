//! HTTP error response mapping.
//!
//! | Error | Status | Body |
//! |---|---|---|
//! | `Validation(InvalidId)` | 422 | empty |
//! | other `Validation` | 400 | `{"error": …}` |
//! | `NotFound` | 404 | empty |
//! | `Storage` | 500 | `{"error": "internal server error"}` |

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use petstore_domain::error::{PetstoreError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`PetstoreError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(PetstoreError);

impl From<PetstoreError> for ApiError {
    fn from(err: PetstoreError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PetstoreError::Validation(ValidationError::InvalidId) => {
                return StatusCode::UNPROCESSABLE_ENTITY.into_response();
            }
            PetstoreError::NotFound(err) => {
                tracing::debug!(error = %err, "not found");
                return StatusCode::NOT_FOUND.into_response();
            }
            PetstoreError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            PetstoreError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
