//! Daily log service
//!
//! Records one day's diet and exercise data: applies the submission
//! defaults, derives the energy balance from the profile, and upserts the
//! date's row.

use crate::error::ApiError;
use crate::repositories::{DailyLogRecord, DailyLogRepository, ProfileRepository, UpsertDailyLog};
use chrono::Utc;
use energy_tracker_shared::energy::{daily_energy, katch_mcardle_bmr};
use energy_tracker_shared::types::LogInput;
use energy_tracker_shared::validation::{
    validate_calories, validate_distance_km, validate_weight_kg,
};
use sqlx::SqlitePool;

/// Daily log service for business logic
pub struct LogService;

impl LogService {
    /// Record (or overwrite) the log for one calendar date
    ///
    /// The date defaults to today and the weight to the profile's; the
    /// day's BMR uses that effective weight with the profile's body fat.
    /// Requires an existing profile.
    pub async fn record_day(pool: &SqlitePool, input: LogInput) -> Result<DailyLogRecord, ApiError> {
        let profile = ProfileRepository::get(pool)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("profile has not been set up".to_string()))?;

        let log_date = input.date.unwrap_or_else(|| Utc::now().date_naive());
        let weight_kg = input.weight_kg.unwrap_or(profile.weight_kg);

        validate_weight_kg("weight", weight_kg)?;
        validate_distance_km("walk", input.walk_km)?;
        validate_calories("consumed", input.consumed_kcal)?;
        validate_calories("burnt", input.burnt_kcal)?;

        let bmr = katch_mcardle_bmr(weight_kg, profile.body_fat_percent);
        let energy = daily_energy(bmr, input.walk_km, input.burnt_kcal, input.consumed_kcal);

        DailyLogRepository::upsert(
            pool,
            UpsertDailyLog {
                log_date,
                weight_kg,
                walk_km: input.walk_km,
                consumed_kcal: input.consumed_kcal,
                burnt_kcal: input.burnt_kcal,
                total_burn_kcal: energy.total_burn_kcal,
                deficit_kcal: energy.deficit_kcal,
                fat_loss_g: energy.fat_loss_g,
            },
        )
        .await
        .map_err(ApiError::Internal)
    }

    /// Get all logged days, most recent date first
    pub async fn list_days(pool: &SqlitePool) -> Result<Vec<DailyLogRecord>, ApiError> {
        DailyLogRepository::list_all(pool)
            .await
            .map_err(ApiError::Internal)
    }
}
