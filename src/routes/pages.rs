use anyhow::Context;
use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::{error::AppError, state::AppState};

/// Landing page, re-read from disk on every request so edits show up immediately.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let path = state.config.index_page();
    let body = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("read {}", path.display()))
        .map_err(AppError::Internal)?;
    Ok(Html(body))
}

pub async fn health() -> &'static str {
    "ok"
}
