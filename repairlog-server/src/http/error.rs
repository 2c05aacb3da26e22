//! API error types with IntoResponse
//!
//! Errors are rendered as small HTML pages with the matching status code.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::db::DbError;
use crate::views;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing or undecodable form field (400)
    BadRequest { reason: String },

    /// Resource not found, or a path id that is not an integer (404)
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest { reason } => {
                tracing::debug!(%reason, "bad request");
            }
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, %id, "not found");
            }
            Self::Database(e) => {
                // Log the actual error, return generic page
                tracing::error!("Database error: {}", e);
            }
        }

        let status = self.status();
        (status, Html(views::error_page(status))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}
