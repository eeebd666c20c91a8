use serde::{Deserialize, Serialize};

/// Body of `GET /api/weather/{city}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String, // localized name from geocoding, not the raw input
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
}

// ---- Open-Meteo wire types ----

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    // omitted entirely by the provider when nothing matches
    #[serde(default)]
    pub results: Vec<GeoLocation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub current: Option<CurrentConditions>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentConditions {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub wind_speed_10m: f64,
}
