//! Repair endpoint

use axum::{extract::State, response::Response, routing::post, Router};

use super::redirect_found;
use crate::db::RepairRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ComputerId, FormData};
use crate::models::NewRepair;
use crate::state::AppState;

/// POST /computer/{id}/add_repair - append a repair, then back to the computer
async fn add_repair(
    State(state): State<AppState>,
    ComputerId(computer_id): ComputerId,
    FormData(input): FormData<NewRepair>,
) -> Result<Response, ApiError> {
    let repair_id = RepairRepo::new(state.pool())
        .create(computer_id, &input)
        .await?;
    tracing::info!(computer_id, repair_id, "repair added");

    Ok(redirect_found(&format!("/computer/{computer_id}")))
}

/// Repair routes
pub fn router() -> Router<AppState> {
    Router::new().route("/computer/{id}/add_repair", post(add_repair))
}
