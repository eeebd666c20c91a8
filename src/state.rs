use crate::config::AppConfig;
use crate::history::{HistoryStore, PgHistoryStore};
use crate::weather::OpenMeteoClient;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared, immutable handles passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub weather: OpenMeteoClient,
    pub history: Arc<dyn HistoryStore>,
}

impl AppState {
    /// Wire the production handles around an already bootstrapped pool.
    pub fn init(config: AppConfig, db: PgPool) -> anyhow::Result<Self> {
        let weather = OpenMeteoClient::new(config.weather.clone())?;
        let history = Arc::new(PgHistoryStore::new(db)) as Arc<dyn HistoryStore>;
        Ok(Self::from_parts(Arc::new(config), weather, history))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        weather: OpenMeteoClient,
        history: Arc<dyn HistoryStore>,
    ) -> Self {
        Self {
            config,
            weather,
            history,
        }
    }
}
