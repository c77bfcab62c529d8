//! API error types with IntoResponse
//!
//! Errors are converted to `{"message": ...}` responses. Store failures are
//! logged with their cause and answered with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use newsdesk_core::{MessageBody, ValidationError};

use crate::db::StoreError;
use crate::services::DeletionError;

pub const INVALID_ID: &str = "Invalid ID";
pub const NOT_FOUND: &str = "Article not found";
pub const FETCH_FAILED: &str = "Failed to fetch articles";
pub const DELETE_FAILED: &str = "Failed to delete article";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Identifier missing or non-numeric (400)
    InvalidIdentifier(ValidationError),

    /// No row matched (404)
    NotFound,

    /// Connection or query failure (500, logged)
    StoreUnavailable {
        message: &'static str,
        source: StoreError,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::StoreUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::InvalidIdentifier(e) => {
                tracing::debug!("rejected delete: {}", e);
                INVALID_ID
            }
            Self::NotFound => NOT_FOUND,
            Self::StoreUnavailable { message, source } => {
                // Log the actual error, return generic message
                tracing::error!(error = %source, "{}", message);
                *message
            }
        };

        (status, Json(MessageBody::new(message))).into_response()
    }
}

impl From<DeletionError> for ApiError {
    fn from(e: DeletionError) -> Self {
        match e {
            DeletionError::InvalidIdentifier(e) => Self::InvalidIdentifier(e),
            DeletionError::Store(source) => Self::StoreUnavailable {
                message: DELETE_FAILED,
                source,
            },
        }
    }
}
