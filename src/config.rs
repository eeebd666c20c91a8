use std::{path::PathBuf, time::Duration};

use serde::Deserialize;

pub const DEFAULT_DATABASE_URL: &str = "postgres://postgres:postgres@db:5432/weather_db";

/// Open-Meteo endpoints and request settings.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    pub geocoding_url: String,
    pub forecast_url: String,
    pub language: String,
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocoding_url: "https://geocoding-api.open-meteo.com/v1".into(),
            forecast_url: "https://api.open-meteo.com/v1".into(),
            language: "ru".into(),
            timeout_secs: 10,
        }
    }
}

/// Startup connectivity policy: fixed interval, bounded attempts.
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub interval_secs: u64,
}

impl RetryConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            interval_secs: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub weather: WeatherConfig,
    pub db_retry: RetryConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let weather_defaults = WeatherConfig::default();
        let retry_defaults = RetryConfig::default();

        let weather = WeatherConfig {
            geocoding_url: env_or("GEOCODING_URL", weather_defaults.geocoding_url),
            forecast_url: env_or("FORECAST_URL", weather_defaults.forecast_url),
            language: env_or("GEOCODING_LANGUAGE", weather_defaults.language),
            timeout_secs: env_parse("UPSTREAM_TIMEOUT_SECS", weather_defaults.timeout_secs)?,
        };
        let db_retry = RetryConfig {
            max_attempts: env_parse("DB_CONNECT_ATTEMPTS", retry_defaults.max_attempts)?,
            interval_secs: env_parse("DB_CONNECT_INTERVAL_SECS", retry_defaults.interval_secs)?,
        };
        if db_retry.max_attempts == 0 {
            anyhow::bail!("DB_CONNECT_ATTEMPTS must be at least 1");
        }

        Ok(Self {
            database_url: env_or("DATABASE_URL", DEFAULT_DATABASE_URL.into()),
            max_connections: env_parse("DB_MAX_CONNECTIONS", 10)?,
            host: env_or("APP_HOST", "0.0.0.0".into()),
            port: env_parse("APP_PORT", 8000)?,
            static_dir: PathBuf::from(env_or("STATIC_DIR", "static".into())),
            weather,
            db_retry,
        })
    }

    pub fn index_page(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

fn env_parse<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("invalid {key}={raw:?}: {e}")),
        Err(_) => Ok(default),
    }
}
