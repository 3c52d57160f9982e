//! Common test utilities for integration tests
//!
//! This module provides shared setup for integration tests. The suite
//! runs against in-memory SQLite, which doubles as the no-persistence
//! variant of the store.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use energy_tracker_backend::{
    config::{AppConfig, DatabaseConfig, ServerConfig},
    routes,
    state::AppState,
};
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    /// Create a new test application on a fresh in-memory database
    pub async fn new() -> Self {
        // In-memory SQLite lives per connection; a single-connection pool
        // keeps every request and assertion on the same database.
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database pool");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(pool.clone(), test_config());
        let app = routes::create_router(state);

        Self { app, pool }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Make a POST request with an urlencoded form body, as a browser would
    pub async fn post_form(&self, path: &str, body: &str) -> StatusCode {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        response.status()
    }

    /// Fetch and decode the dashboard view model
    pub async fn dashboard(&self) -> serde_json::Value {
        let (status, body) = self.get("/").await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_str(&body).expect("dashboard is valid JSON")
    }

    /// Submit a complete, valid setup form
    pub async fn setup_profile(&self) -> StatusCode {
        self.post_form("/setup", "height=180&weight=85&body_fat=22&age=28&gender=male")
            .await
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
    }
}
