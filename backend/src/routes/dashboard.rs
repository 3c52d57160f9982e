//! Dashboard route

use crate::error::ApiError;
use crate::repositories::BodyFatHistoryRepository;
use crate::services::{LogService, ProfileService};
use crate::state::AppState;
use axum::{extract::State, Json};
use energy_tracker_shared::energy::katch_mcardle_bmr;
use energy_tracker_shared::types::{
    BodyFatEntryView, DailyLogView, DashboardResponse, ProfileView,
};
use energy_tracker_shared::week::{summarize_weeks, LoggedDay};

/// How much body-fat history the dashboard shows
const RECENT_BODY_FAT_ENTRIES: i64 = 10;

/// GET / - Render the dashboard view model
///
/// Profile (or setup-needed state), BMR, the full log list, weekly
/// summaries, and recent body-fat history. BMR is suppressed, not
/// defaulted, while no profile exists.
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, ApiError> {
    let profile = ProfileService::get(state.db()).await?;
    let logs = LogService::list_days(state.db()).await?;
    let history = BodyFatHistoryRepository::recent(state.db(), RECENT_BODY_FAT_ENTRIES)
        .await
        .map_err(ApiError::Internal)?;

    let bmr_kcal = profile
        .as_ref()
        .map(|p| katch_mcardle_bmr(p.weight_kg, p.body_fat_percent));

    let days: Vec<LoggedDay> = logs
        .iter()
        .map(|log| LoggedDay {
            date: log.log_date,
            total_burn_kcal: log.total_burn_kcal,
            consumed_kcal: log.consumed_kcal,
            deficit_kcal: log.deficit_kcal,
            fat_loss_g: log.fat_loss_g,
        })
        .collect();
    let weeks = summarize_weeks(&days);

    Ok(Json(DashboardResponse {
        setup_needed: profile.is_none(),
        profile: profile.map(|p| ProfileView {
            height_cm: p.height_cm,
            weight_kg: p.weight_kg,
            body_fat_percent: p.body_fat_percent,
            age_years: p.age_years,
            gender: p.gender,
        }),
        bmr_kcal,
        logs: logs
            .into_iter()
            .map(|log| DailyLogView {
                date: log.log_date,
                weight_kg: log.weight_kg,
                walk_km: log.walk_km,
                consumed_kcal: log.consumed_kcal,
                burnt_kcal: log.burnt_kcal,
                total_burn_kcal: log.total_burn_kcal,
                deficit_kcal: log.deficit_kcal,
                fat_loss_g: log.fat_loss_g,
            })
            .collect(),
        weeks,
        body_fat_history: history
            .into_iter()
            .map(|entry| BodyFatEntryView {
                body_fat_percent: entry.body_fat_percent,
                recorded_at: entry.recorded_at,
            })
            .collect(),
    }))
}
