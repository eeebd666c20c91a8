use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::weather::WeatherError;

/// Errors surfaced by HTTP handlers. Only the status and a fixed message reach
/// the client; the underlying cause is logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("city not found")]
    CityNotFound,
    #[error("upstream weather provider failed: {0}")]
    Upstream(String),
    #[error("storage error: {0:#}")]
    Storage(anyhow::Error),
    #[error("internal error: {0:#}")]
    Internal(anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::CityNotFound => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> &'static str {
        match self {
            AppError::CityNotFound => "city not found",
            AppError::Upstream(_) => "weather provider unavailable",
            AppError::Storage(_) | AppError::Internal(_) => "internal server error",
        }
    }
}

impl From<WeatherError> for AppError {
    fn from(e: WeatherError) -> Self {
        match e {
            WeatherError::CityNotFound => AppError::CityNotFound,
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::CityNotFound => tracing::debug!("city not found"),
            AppError::Upstream(msg) => tracing::warn!(error = %msg, "upstream fault"),
            AppError::Storage(e) => tracing::error!(error = %format!("{e:#}"), "storage fault"),
            AppError::Internal(e) => tracing::error!(error = %format!("{e:#}"), "internal fault"),
        }
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}
