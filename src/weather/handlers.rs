use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{error::AppError, state::AppState};

use super::{dto::WeatherReport, services::lookup_and_record};

pub fn weather_routes() -> Router<AppState> {
    Router::new().route("/api/weather/:city", get(get_weather))
}

#[instrument(skip(state))]
pub async fn get_weather(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<WeatherReport>, AppError> {
    let report = lookup_and_record(&state, &city).await?;
    Ok(Json(report))
}
