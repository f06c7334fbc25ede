//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use gearguard_domain::error::{GearGuardError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`GearGuardError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(GearGuardError);

impl From<GearGuardError> for ApiError {
    fn from(err: GearGuardError) -> Self {
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
            GearGuardError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            GearGuardError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            GearGuardError::Unauthorized(err) => (StatusCode::UNAUTHORIZED, err.to_string()),
            GearGuardError::Storage(err) => {
                tracing::error!(
                    error = %err,
                    source = ?std::error::Error::source(err.as_ref()),
                    "storage error"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
