//! Computer pages: list/search, add, view

use axum::{
    extract::{Query, State},
    response::{Html, Response},
    routing::get,
    Router,
};

use super::redirect_found;
use crate::db::ComputerRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ComputerId, FormData};
use crate::models::{NewComputer, SearchParams};
use crate::state::AppState;
use crate::views;

/// GET / - list all computers, or those whose name contains `q`
async fn index(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, ApiError> {
    let repo = ComputerRepo::new(state.pool());
    let computers = match params.term() {
        Some(term) => repo.search_by_name(term).await?,
        None => repo.list_all().await?,
    };

    Ok(Html(views::computers::index(&computers, params.q.as_deref())))
}

/// GET /add - empty form
async fn add_form() -> Html<String> {
    Html(views::computers::add_form())
}

/// POST /add - create a computer, then back to the list
async fn add_computer(
    State(state): State<AppState>,
    FormData(input): FormData<NewComputer>,
) -> Result<Response, ApiError> {
    let computer_id = ComputerRepo::new(state.pool()).create(&input).await?;
    tracing::info!(computer_id, name = %input.name, "computer added");

    Ok(redirect_found("/"))
}

/// GET /computer/{id} - one computer with its repair history
async fn view_computer(
    State(state): State<AppState>,
    ComputerId(id): ComputerId,
) -> Result<Html<String>, ApiError> {
    let view = ComputerRepo::new(state.pool()).get_with_repairs(id).await?;
    Ok(Html(views::computers::detail(&view)))
}

/// Computer routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add_form).post(add_computer))
        .route("/computer/{id}", get(view_computer))
}
