//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::ComputerRepo;
use crate::http::error::ApiError;
use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub computers: i64,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let computers = ComputerRepo::new(state.pool()).count().await?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        computers,
    }))
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool_in_memory;

    #[tokio::test]
    async fn health_returns_ok() {
        let state = AppState::new(create_pool_in_memory().await.unwrap());
        let Json(body) = health(State(state)).await.unwrap();
        assert_eq!(body.status, "ok");
        assert_eq!(body.computers, 0);
    }

    #[tokio::test]
    async fn health_fails_when_store_is_closed() {
        let pool = create_pool_in_memory().await.unwrap();
        pool.close().await;

        let err = health(State(AppState::new(pool))).await.unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }
}
