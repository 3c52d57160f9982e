//! Route definitions for the Energy Tracker
//!
//! This module organizes all routes and applies middleware. Form routes
//! share the discard policy: a submission that fails to parse or arrives
//! before setup is dropped whole and the client is redirected to the
//! unchanged dashboard.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

mod dashboard;
mod health;
mod logs;
mod profile;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/setup", post(profile::setup))
        .route("/log", post(logs::record_log))
        .route("/update-body-fat", post(profile::update_body_fat))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The redirect every form submission ends in, committed or discarded
fn redirect_home() -> Redirect {
    Redirect::to("/")
}

/// Apply the discard policy to a service error
///
/// Validation failures and missing prerequisites drop the submission and
/// redirect to the unchanged dashboard, logged at WARN. Anything else is
/// a real failure and propagates.
fn discard_or_fail(context: &'static str, err: ApiError) -> Result<Redirect, ApiError> {
    match err {
        ApiError::Validation(reason) => {
            warn!(%reason, "discarding {} submission", context);
            Ok(redirect_home())
        }
        ApiError::NotFound(reason) => {
            warn!(%reason, "ignoring {} submission", context);
            Ok(redirect_home())
        }
        other => Err(other),
    }
}
