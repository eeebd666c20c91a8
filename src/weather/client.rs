//! Open-Meteo client: free-text city name → coordinates → current conditions.

use std::{sync::Arc, time::Duration};

use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::WeatherConfig;

use super::dto::{ForecastResponse, GeoLocation, GeocodingResponse, WeatherReport};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,wind_speed_10m";

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("city not found")]
    CityNotFound,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider returned HTTP {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    config: Arc<WeatherConfig>,
}

impl OpenMeteoClient {
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Resolve `city` to coordinates plus the provider's localized name.
    /// A non-success status or an empty result set is `CityNotFound`.
    #[instrument(skip(self))]
    pub async fn geocode(&self, city: &str) -> Result<GeoLocation, WeatherError> {
        let url = format!("{}/search", self.config.geocoding_url.trim_end_matches('/'));
        let response = self
            .http
            .get(&url)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", self.config.language.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "geocoding returned non-success");
            return Err(WeatherError::CityNotFound);
        }

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        body.results
            .into_iter()
            .next()
            .ok_or(WeatherError::CityNotFound)
    }

    /// Current temperature, relative humidity and wind speed at a point.
    #[instrument(skip(self), fields(lat = %location.latitude, lon = %location.longitude))]
    pub async fn current(&self, location: &GeoLocation) -> Result<WeatherReport, WeatherError> {
        let url = format!("{}/forecast", self.config.forecast_url.trim_end_matches('/'));
        let response = self
            .http
            .get(&url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;
        let current = body
            .current
            .ok_or_else(|| WeatherError::Parse("no current weather data in response".into()))?;

        Ok(WeatherReport {
            city: location.name.clone(),
            temperature: current.temperature_2m,
            humidity: current.relative_humidity_2m,
            wind_speed: current.wind_speed_10m,
        })
    }

    /// Geocode then fetch current conditions. No caching: every call hits the provider.
    pub async fn lookup(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let location = self.geocode(city).await?;
        debug!(resolved = %location.name, "geocoded");
        self.current(&location).await
    }
}
