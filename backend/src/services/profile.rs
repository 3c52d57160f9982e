//! Profile service
//!
//! Business logic for the singleton user profile: setup, body-fat updates
//! with history, and reads for the dashboard.

use crate::error::ApiError;
use crate::repositories::{ProfileRecord, ProfileRepository};
use energy_tracker_shared::types::ProfileInput;
use energy_tracker_shared::validation::{
    validate_age_years, validate_height_cm, validate_percentage, validate_weight_kg,
};
use sqlx::SqlitePool;

/// Profile service for business logic
pub struct ProfileService;

impl ProfileService {
    /// Create or update the profile in place
    ///
    /// A body-fat history entry is recorded alongside every setup.
    pub async fn setup(pool: &SqlitePool, input: ProfileInput) -> Result<ProfileRecord, ApiError> {
        Self::validate(&input)?;

        ProfileRepository::set(pool, &input)
            .await
            .map_err(ApiError::Internal)
    }

    /// Update only the body-fat percentage, appending a history entry
    ///
    /// Requires an existing profile; the caller decides how to surface
    /// the `NotFound` (the form routes treat it as a no-op).
    pub async fn update_body_fat(
        pool: &SqlitePool,
        body_fat_percent: f64,
    ) -> Result<ProfileRecord, ApiError> {
        validate_percentage("body_fat", body_fat_percent)?;

        ProfileRepository::update_body_fat(pool, body_fat_percent)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("profile has not been set up".to_string()))
    }

    /// Get the singleton profile, or `None` before first setup
    pub async fn get(pool: &SqlitePool) -> Result<Option<ProfileRecord>, ApiError> {
        ProfileRepository::get(pool).await.map_err(ApiError::Internal)
    }

    fn validate(input: &ProfileInput) -> Result<(), ApiError> {
        validate_height_cm("height", input.height_cm)?;
        validate_weight_kg("weight", input.weight_kg)?;
        validate_percentage("body_fat", input.body_fat_percent)?;
        validate_age_years("age", input.age_years)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ProfileInput {
        ProfileInput {
            height_cm: 180.0,
            weight_kg: 85.0,
            body_fat_percent: 22.0,
            age_years: 28,
            gender: "male".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_sane_profile() {
        assert!(ProfileService::validate(&input()).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_fields() {
        let mut bad = input();
        bad.body_fat_percent = 140.0;
        assert!(matches!(
            ProfileService::validate(&bad),
            Err(ApiError::Validation(_))
        ));

        let mut bad = input();
        bad.height_cm = 10.0;
        assert!(ProfileService::validate(&bad).is_err());

        let mut bad = input();
        bad.age_years = 0;
        assert!(ProfileService::validate(&bad).is_err());
    }
}
