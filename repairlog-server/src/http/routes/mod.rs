//! Route handlers organized by resource

pub mod computers;
pub mod health;
pub mod repairs;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// 302 to a read-only route after a successful write.
pub(crate) fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_owned())]).into_response()
}
