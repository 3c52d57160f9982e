//! Daily log route

use super::{discard_or_fail, redirect_home};
use crate::error::ApiError;
use crate::services::LogService;
use crate::state::AppState;
use axum::{extract::State, response::Redirect, Form};
use energy_tracker_shared::types::LogForm;
use tracing::warn;

/// POST /log - Record one day's diet and exercise data
///
/// `date` defaults to today, `weight` to the profile's; walk, consumed
/// and burnt default to 0. A field that is present but unparseable
/// discards the whole submission - no partial write - and the client is
/// redirected to the unchanged dashboard. Submitting the same date again
/// overwrites that day's row.
pub async fn record_log(
    State(state): State<AppState>,
    Form(form): Form<LogForm>,
) -> Result<Redirect, ApiError> {
    let input = match form.parse() {
        Ok(input) => input,
        Err(err) => {
            warn!(field = err.field(), reason = %err, "discarding log submission");
            return Ok(redirect_home());
        }
    };

    match LogService::record_day(state.db(), input).await {
        Ok(_) => Ok(redirect_home()),
        Err(err) => discard_or_fail("log", err),
    }
}
