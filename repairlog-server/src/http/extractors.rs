//! Custom Axum extractors
//!
//! Both map axum's default rejections onto the statuses the site promises:
//! a bad path id is a 404, a missing form field is a 400.

use axum::extract::{Form, FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Integer computer id from the path. Anything else is a 404.
#[derive(Debug, Clone, Copy)]
pub struct ComputerId(pub i64);

impl<S> FromRequestParts<S> for ComputerId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "computer",
                id: String::new(),
            })?;

        let id = raw.parse::<i64>().map_err(|_| ApiError::NotFound {
            resource: "computer",
            id: raw.clone(),
        })?;

        Ok(Self(id))
    }
}

/// URL-encoded form body. A missing key or bad body is a 400.
#[derive(Debug, Clone)]
pub struct FormData<T>(pub T);

impl<T, S> FromRequest<S> for FormData<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                reason: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}
