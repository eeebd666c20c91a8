use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Aggregate row for one city: how often and how recently it was searched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CitySearchStats {
    pub city: String,
    pub count: i64,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_searched: Option<OffsetDateTime>,
}
