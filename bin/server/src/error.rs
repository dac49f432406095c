//! Error types for the JSON API.
//!
//! Client errors are reported as `{"error": "..."}` with a 4xx status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use guildpass_platform_access::VerifyRoleError;
use serde::Serialize;
use std::fmt;

/// Errors returned by API handlers.
#[derive(Debug)]
pub enum ApiError {
    /// A required parameter was absent or empty.
    MissingParameter { name: &'static str },
    /// The request body could not be read as the expected JSON.
    InvalidBody { reason: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParameter { name } => {
                write!(f, "missing required parameter: {}", name)
            }
            Self::InvalidBody { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<VerifyRoleError> for ApiError {
    fn from(err: VerifyRoleError) -> Self {
        match err {
            VerifyRoleError::MissingParameter { name } => Self::MissingParameter { name },
        }
    }
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingParameter { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidBody { reason } => {
                tracing::debug!(reason = %reason, "Rejected API request body");
                StatusCode::BAD_REQUEST
            }
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
