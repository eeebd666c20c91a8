use crate::state::AppState;
use axum::Router;

pub mod client;
pub mod dto;
pub mod handlers;
pub mod services;

pub use client::{OpenMeteoClient, WeatherError};
pub use dto::WeatherReport;

pub fn router() -> Router<AppState> {
    handlers::weather_routes()
}
