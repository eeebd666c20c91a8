use tracing::info;

use crate::{error::AppError, state::AppState};

use super::dto::WeatherReport;

/// Look up current weather and log the resolved city name in search history.
/// Nothing is recorded when either provider call fails.
pub async fn lookup_and_record(state: &AppState, city: &str) -> Result<WeatherReport, AppError> {
    let report = state.weather.lookup(city).await?;

    state
        .history
        .record(&report.city)
        .await
        .map_err(AppError::Storage)?;

    info!(query = %city, city = %report.city, "search recorded");
    Ok(report)
}
