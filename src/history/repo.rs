use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::CitySearchStats;

/// Append-only log of successful lookups with a grouped read.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Insert one search record stamped with the current server time.
    async fn record(&self, city: &str) -> anyhow::Result<()>;

    /// Cities ordered by search count, then by most recent search, at most `limit` rows.
    async fn top_searches(&self, limit: i64) -> anyhow::Result<Vec<CitySearchStats>>;
}

#[derive(Clone)]
pub struct PgHistoryStore {
    db: PgPool,
}

impl PgHistoryStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn record(&self, city: &str) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO search_history (city)
            VALUES ($1)
            "#,
        )
        .bind(city)
        .execute(&self.db)
        .await
        .context("insert search record")?;
        Ok(())
    }

    async fn top_searches(&self, limit: i64) -> anyhow::Result<Vec<CitySearchStats>> {
        let rows = sqlx::query_as::<_, CitySearchStats>(
            r#"
            SELECT city, COUNT(*) AS count, MAX(searched_at) AS last_searched
              FROM search_history
             GROUP BY city
             ORDER BY count DESC, last_searched DESC, city ASC
             LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .context("aggregate search history")?;
        Ok(rows)
    }
}
