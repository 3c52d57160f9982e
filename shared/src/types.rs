//! Form and response types
//!
//! Raw form DTOs keep every field as an optional string so extraction never
//! rejects a submission; the `parse` methods turn them into typed inputs or
//! a `FieldError` that discards the whole submission.

use crate::errors::FieldError;
use crate::validation::{
    parse_optional_date, parse_optional_f64, parse_required_f64, parse_required_i64,
    parse_required_text,
};
use crate::week::WeekSummary;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Form Submissions
// ============================================================================

/// POST /setup form fields, as submitted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetupForm {
    pub height: Option<String>,
    pub weight: Option<String>,
    pub body_fat: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
}

/// Parsed profile setup input; all five fields are required
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileInput {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub body_fat_percent: f64,
    pub age_years: i64,
    pub gender: String,
}

impl SetupForm {
    pub fn parse(&self) -> Result<ProfileInput, FieldError> {
        Ok(ProfileInput {
            height_cm: parse_required_f64("height", self.height.as_deref())?,
            weight_kg: parse_required_f64("weight", self.weight.as_deref())?,
            body_fat_percent: parse_required_f64("body_fat", self.body_fat.as_deref())?,
            age_years: parse_required_i64("age", self.age.as_deref())?,
            gender: parse_required_text("gender", self.gender.as_deref())?,
        })
    }
}

/// POST /log form fields, as submitted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogForm {
    pub date: Option<String>,
    pub weight: Option<String>,
    pub walk: Option<String>,
    pub consumed: Option<String>,
    pub burnt: Option<String>,
}

/// Parsed daily log input
///
/// `date` defaults to today and `weight_kg` to the profile weight; both
/// defaults need request context, so they stay `None` here and are applied
/// by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct LogInput {
    pub date: Option<NaiveDate>,
    pub weight_kg: Option<f64>,
    pub walk_km: f64,
    pub consumed_kcal: f64,
    pub burnt_kcal: f64,
}

impl LogForm {
    pub fn parse(&self) -> Result<LogInput, FieldError> {
        Ok(LogInput {
            date: parse_optional_date("date", self.date.as_deref())?,
            weight_kg: parse_optional_f64("weight", self.weight.as_deref())?,
            walk_km: parse_optional_f64("walk", self.walk.as_deref())?.unwrap_or(0.0),
            consumed_kcal: parse_optional_f64("consumed", self.consumed.as_deref())?.unwrap_or(0.0),
            burnt_kcal: parse_optional_f64("burnt", self.burnt.as_deref())?.unwrap_or(0.0),
        })
    }
}

/// POST /update-body-fat form fields, as submitted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BodyFatForm {
    pub body_fat: Option<String>,
}

impl BodyFatForm {
    pub fn parse(&self) -> Result<f64, FieldError> {
        parse_required_f64("body_fat", self.body_fat.as_deref())
    }
}

// ============================================================================
// Dashboard View Models
// ============================================================================

/// The active profile as rendered on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub body_fat_percent: f64,
    pub age_years: i64,
    pub gender: String,
}

/// One daily log row as rendered on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLogView {
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub walk_km: f64,
    pub consumed_kcal: f64,
    pub burnt_kcal: f64,
    pub total_burn_kcal: f64,
    pub deficit_kcal: f64,
    pub fat_loss_g: f64,
}

/// One body-fat history entry, most recent first on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyFatEntryView {
    pub body_fat_percent: f64,
    pub recorded_at: DateTime<Utc>,
}

/// GET / response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// `None` until first setup; the UI shows a "setup needed" state
    pub profile: Option<ProfileView>,
    pub setup_needed: bool,
    /// Suppressed (not defaulted) while no profile exists
    pub bmr_kcal: Option<f64>,
    /// All logs, date descending
    pub logs: Vec<DailyLogView>,
    /// ISO-week summaries, most recent first
    pub weeks: Vec<WeekSummary>,
    /// Last 10 body-fat entries, most recent first
    pub body_fat_history: Vec<BodyFatEntryView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_form() -> SetupForm {
        SetupForm {
            height: Some("180".into()),
            weight: Some("85".into()),
            body_fat: Some("22".into()),
            age: Some("28".into()),
            gender: Some("male".into()),
        }
    }

    #[test]
    fn test_setup_form_parses_all_fields() {
        let input = setup_form().parse().unwrap();
        assert_eq!(input.height_cm, 180.0);
        assert_eq!(input.weight_kg, 85.0);
        assert_eq!(input.body_fat_percent, 22.0);
        assert_eq!(input.age_years, 28);
        assert_eq!(input.gender, "male");
    }

    #[test]
    fn test_setup_form_requires_every_field() {
        let mut form = setup_form();
        form.body_fat = None;
        assert_eq!(form.parse(), Err(FieldError::Missing("body_fat")));

        let mut form = setup_form();
        form.age = Some("twenty".into());
        assert_eq!(form.parse(), Err(FieldError::Malformed("age")));
    }

    #[test]
    fn test_log_form_defaults_energy_fields_to_zero() {
        let input = LogForm::default().parse().unwrap();
        assert_eq!(input.date, None);
        assert_eq!(input.weight_kg, None);
        assert_eq!(input.walk_km, 0.0);
        assert_eq!(input.consumed_kcal, 0.0);
        assert_eq!(input.burnt_kcal, 0.0);
    }

    #[test]
    fn test_log_form_malformed_field_fails_whole_submission() {
        let form = LogForm {
            walk: Some("abc".into()),
            consumed: Some("1800".into()),
            ..Default::default()
        };
        assert_eq!(form.parse(), Err(FieldError::Malformed("walk")));
    }

    #[test]
    fn test_log_form_parses_date_and_weight() {
        let form = LogForm {
            date: Some("2024-03-11".into()),
            weight: Some("84.2".into()),
            walk: Some("5".into()),
            consumed: Some("1800".into()),
            burnt: Some("200".into()),
        };
        let input = form.parse().unwrap();
        assert_eq!(input.date, Some("2024-03-11".parse().unwrap()));
        assert_eq!(input.weight_kg, Some(84.2));
        assert_eq!(input.walk_km, 5.0);
    }

    #[test]
    fn test_body_fat_form() {
        let form = BodyFatForm {
            body_fat: Some("21.5".into()),
        };
        assert_eq!(form.parse(), Ok(21.5));
        assert_eq!(
            BodyFatForm::default().parse(),
            Err(FieldError::Missing("body_fat"))
        );
    }
}
