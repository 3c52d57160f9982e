//! Application state management
//!
//! Shared state passed to all request handlers via Axum's state
//! extraction. Every field is cheap to clone: the pool is internally
//! reference-counted and the config is wrapped in an Arc. State is
//! read-only during request handling.

use crate::config::AppConfig;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Get a reference to the database pool
    #[inline]
    pub fn db(&self) -> &SqlitePool {
        &self.db
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
