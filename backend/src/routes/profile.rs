//! Profile setup and body-fat update routes

use super::{discard_or_fail, redirect_home};
use crate::error::ApiError;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::State, response::Redirect, Form};
use energy_tracker_shared::types::{BodyFatForm, SetupForm};
use tracing::warn;

/// POST /setup - Create or update the profile from the setup form
///
/// All five fields are required; an incomplete or unparseable submission
/// is discarded whole and the client lands back on the unchanged
/// dashboard. Every accepted setup appends a body-fat history entry.
pub async fn setup(
    State(state): State<AppState>,
    Form(form): Form<SetupForm>,
) -> Result<Redirect, ApiError> {
    let input = match form.parse() {
        Ok(input) => input,
        Err(err) => {
            warn!(field = err.field(), reason = %err, "discarding setup submission");
            return Ok(redirect_home());
        }
    };

    match ProfileService::setup(state.db(), input).await {
        Ok(_) => Ok(redirect_home()),
        Err(err) => discard_or_fail("setup", err),
    }
}

/// POST /update-body-fat - Update the profile's body-fat percentage
///
/// A no-op (with redirect) when no profile exists yet.
pub async fn update_body_fat(
    State(state): State<AppState>,
    Form(form): Form<BodyFatForm>,
) -> Result<Redirect, ApiError> {
    let body_fat_percent = match form.parse() {
        Ok(value) => value,
        Err(err) => {
            warn!(field = err.field(), reason = %err, "discarding body-fat submission");
            return Ok(redirect_home());
        }
    };

    match ProfileService::update_body_fat(state.db(), body_fat_percent).await {
        Ok(_) => Ok(redirect_home()),
        Err(err) => discard_or_fail("body-fat", err),
    }
}
