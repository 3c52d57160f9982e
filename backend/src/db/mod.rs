//! Database connection and pool management
//!
//! SQLite via sqlx: the default target is an embedded file-backed store
//! (created on first run), and `sqlite::memory:` through the same code
//! path serves as the no-persistence variant for demos and tests.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Create a SQLite connection pool
///
/// The database file is created if missing; foreign keys are enforced.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let connect_options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(connect_options)
        .await?;

    info!("Database pool created: max={}", max_connections);

    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_pool_and_health_check() {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();
        health_check(&pool).await.unwrap();
    }
}
