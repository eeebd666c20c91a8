use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{error::AppError, state::AppState};

use super::repo_types::CitySearchStats;

pub const TOP_SEARCHES_LIMIT: i64 = 10;

pub fn history_routes() -> Router<AppState> {
    Router::new().route("/api/history", get(list_history))
}

#[instrument(skip(state))]
pub async fn list_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<CitySearchStats>>, AppError> {
    let rows = state
        .history
        .top_searches(TOP_SEARCHES_LIMIT)
        .await
        .map_err(AppError::Storage)?;
    Ok(Json(rows))
}
