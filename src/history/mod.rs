use crate::state::AppState;
use axum::Router;

pub mod handlers;
pub mod repo;
pub mod repo_types;

pub use repo::{HistoryStore, PgHistoryStore};
pub use repo_types::CitySearchStats;

pub fn router() -> Router<AppState> {
    handlers::history_routes()
}
