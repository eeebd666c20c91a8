//! Shared fixtures: an in-memory history store and app wiring against a
//! wiremock stand-in for Open-Meteo.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use time::OffsetDateTime;
use tower::ServiceExt;
use weather_history::{
    app::build_app,
    config::{AppConfig, RetryConfig, WeatherConfig},
    history::{CitySearchStats, HistoryStore},
    state::AppState,
    weather::OpenMeteoClient,
};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Same aggregation as the SQL query, over a Vec. `seq` breaks timestamp ties.
#[derive(Default)]
pub struct MemoryHistory {
    rows: Mutex<Vec<(String, u64, OffsetDateTime)>>,
    broken: bool,
}

impl MemoryHistory {
    pub fn broken() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            broken: true,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn record(&self, city: &str) -> anyhow::Result<()> {
        if self.broken {
            anyhow::bail!("connection to server at \"db\" (10.0.0.7), port 5432 failed");
        }
        let mut rows = self.rows.lock().unwrap();
        let seq = rows.len() as u64;
        rows.push((city.to_string(), seq, OffsetDateTime::now_utc()));
        Ok(())
    }

    async fn top_searches(&self, limit: i64) -> anyhow::Result<Vec<CitySearchStats>> {
        if self.broken {
            anyhow::bail!("connection to server at \"db\" (10.0.0.7), port 5432 failed");
        }
        let rows = self.rows.lock().unwrap();
        let mut groups: Vec<(CitySearchStats, u64)> = Vec::new();
        for (city, seq, at) in rows.iter() {
            match groups.iter_mut().find(|(g, _)| &g.city == city) {
                Some((g, last_seq)) => {
                    g.count += 1;
                    g.last_searched = g.last_searched.max(Some(*at));
                    *last_seq = (*last_seq).max(*seq);
                }
                None => groups.push((
                    CitySearchStats {
                        city: city.clone(),
                        count: 1,
                        last_searched: Some(*at),
                    },
                    *seq,
                )),
            }
        }
        groups.sort_by(|(a, a_seq), (b, b_seq)| {
            b.count.cmp(&a.count).then_with(|| b_seq.cmp(a_seq))
        });
        Ok(groups
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|(g, _)| g)
            .collect())
    }
}

pub fn repo_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub fn test_config(provider: &MockServer, static_dir: PathBuf) -> AppConfig {
    AppConfig {
        database_url: "postgres://unused@localhost/unused".into(),
        max_connections: 1,
        host: "127.0.0.1".into(),
        port: 0,
        static_dir,
        weather: WeatherConfig {
            geocoding_url: provider.uri(),
            forecast_url: provider.uri(),
            language: "ru".into(),
            timeout_secs: 5,
        },
        db_retry: RetryConfig::default(),
    }
}

pub fn test_app(config: AppConfig, history: Arc<dyn HistoryStore>) -> Router {
    let weather = OpenMeteoClient::new(config.weather.clone()).unwrap();
    build_app(AppState::from_parts(Arc::new(config), weather, history))
}

pub async fn get(app: &Router, uri: &str) -> (axum::http::StatusCode, Vec<u8>) {
    let res = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let body = res.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, body)
}

pub async fn get_json(app: &Router, uri: &str) -> (axum::http::StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

// ---- Open-Meteo stubs ----

pub fn geocoding_hit(name: &str, latitude: f64, longitude: f64) -> Value {
    json!({
        "results": [{
            "id": 1,
            "name": name,
            "latitude": latitude,
            "longitude": longitude,
            "country_code": "RU",
            "timezone": "Europe/Moscow"
        }],
        "generationtime_ms": 0.7
    })
}

pub fn forecast_body(temperature: f64, humidity: i64, wind_speed: f64) -> Value {
    json!({
        "latitude": 55.75,
        "longitude": 37.625,
        "timezone": "GMT",
        "current_units": {
            "time": "iso8601",
            "interval": "seconds",
            "temperature_2m": "°C",
            "relative_humidity_2m": "%",
            "wind_speed_10m": "km/h"
        },
        "current": {
            "time": "2024-01-15T12:00",
            "interval": 900,
            "temperature_2m": temperature,
            "relative_humidity_2m": humidity,
            "wind_speed_10m": wind_speed
        }
    })
}

/// Mount a geocode + forecast pair for `query`, resolving to `name`.
pub async fn mount_city(
    provider: &MockServer,
    query: &str,
    name: &str,
    latitude: f64,
    longitude: f64,
) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", query))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(geocoding_hit(name, latitude, longitude)),
        )
        .mount(provider)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", latitude.to_string()))
        .and(query_param("longitude", longitude.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(-4.5, 86, 11.2)))
        .mount(provider)
        .await;
}

pub async fn mount_unknown_city(provider: &MockServer, query: &str) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "generationtime_ms": 0.3 })))
        .mount(provider)
        .await;
}
