//! Startup connectivity: connect the pool and apply the schema, retrying on a
//! fixed interval until the attempt budget runs out.

use std::future::Future;

use anyhow::Context;
use sqlx::{migrate::Migrator, postgres::PgPoolOptions, PgPool};
use tracing::{info, warn};

use crate::config::{AppConfig, RetryConfig};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// One connection attempt: open the pool and make sure the schema exists.
pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let db = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("connect to database")?;
    MIGRATOR.run(&db).await.context("apply migrations")?;
    Ok(db)
}

/// Run `attempt` until it succeeds or `policy.max_attempts` consecutive
/// failures have happened. Sleeps `policy.interval()` between attempts.
pub async fn with_retry<T, F, Fut>(policy: &RetryConfig, mut attempt: F) -> anyhow::Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let mut last_error = None;

    for n in 1..=policy.max_attempts {
        match attempt().await {
            Ok(value) => {
                info!(attempt = n, "database ready");
                return Ok(value);
            }
            Err(e) => {
                warn!(
                    attempt = n,
                    max_attempts = policy.max_attempts,
                    error = %format!("{e:#}"),
                    "database not ready"
                );
                last_error = Some(e);
                if n < policy.max_attempts {
                    tokio::time::sleep(policy.interval()).await;
                }
            }
        }
    }

    let err = last_error.unwrap_or_else(|| anyhow::anyhow!("no connection attempts configured"));
    Err(err.context(format!(
        "database unreachable after {} attempts",
        policy.max_attempts
    )))
}

/// Connecting → ready. Blocks until the store is usable or the budget is spent.
pub async fn bootstrap(config: &AppConfig) -> anyhow::Result<PgPool> {
    info!(max_attempts = config.db_retry.max_attempts, "connecting to database");
    with_retry(&config.db_retry, || connect(config)).await
}
