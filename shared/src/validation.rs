//! Input parsing and validation
//!
//! Form submissions arrive as raw strings. The parsers here distinguish a
//! field that is absent (or blank, which HTML forms submit for untouched
//! inputs) from one that is present but unparseable: absent fields fall
//! back to the documented default, unparseable ones fail the submission.
//!
//! The `validate_*` functions apply physiological sanity ranges on the
//! parsed values.

use crate::errors::FieldError;
use chrono::NaiveDate;

/// Trim a raw field; blank counts as absent
fn normalize(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a required numeric field; absent or blank fails the submission
pub fn parse_required_f64(field: &'static str, raw: Option<&str>) -> Result<f64, FieldError> {
    match normalize(raw) {
        None => Err(FieldError::Missing(field)),
        Some(s) => parse_f64(field, s),
    }
}

/// Parse an optional numeric field; absent or blank yields `None`
pub fn parse_optional_f64(field: &'static str, raw: Option<&str>) -> Result<Option<f64>, FieldError> {
    match normalize(raw) {
        None => Ok(None),
        Some(s) => parse_f64(field, s).map(Some),
    }
}

/// Parse a required integer field (used for age)
pub fn parse_required_i64(field: &'static str, raw: Option<&str>) -> Result<i64, FieldError> {
    match normalize(raw) {
        None => Err(FieldError::Missing(field)),
        Some(s) => s.parse::<i64>().map_err(|_| FieldError::Malformed(field)),
    }
}

/// Parse an optional YYYY-MM-DD date field; absent or blank yields `None`
pub fn parse_optional_date(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<NaiveDate>, FieldError> {
    match normalize(raw) {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| FieldError::Malformed(field)),
    }
}

/// Parse a required free-text field
pub fn parse_required_text(field: &'static str, raw: Option<&str>) -> Result<String, FieldError> {
    normalize(raw)
        .map(str::to_string)
        .ok_or(FieldError::Missing(field))
}

fn parse_f64(field: &'static str, s: &str) -> Result<f64, FieldError> {
    // "NaN"/"inf" parse as floats but are never valid form input
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(FieldError::Malformed(field))
}

// ============================================================================
// Range Validation
// ============================================================================

/// Validate body weight in kg
pub fn validate_weight_kg(field: &'static str, weight_kg: f64) -> Result<(), FieldError> {
    if weight_kg < 20.0 {
        return Err(FieldError::out_of_range(field, "must be at least 20 kg"));
    }
    if weight_kg > 500.0 {
        return Err(FieldError::out_of_range(field, "must be at most 500 kg"));
    }
    Ok(())
}

/// Validate height in cm
/// Valid range: 50-300 cm (covers infants to tallest recorded humans)
pub fn validate_height_cm(field: &'static str, height_cm: f64) -> Result<(), FieldError> {
    if height_cm < 50.0 {
        return Err(FieldError::out_of_range(field, "must be at least 50 cm"));
    }
    if height_cm > 300.0 {
        return Err(FieldError::out_of_range(field, "must be at most 300 cm"));
    }
    Ok(())
}

/// Validate a percentage value (0-100)
pub fn validate_percentage(field: &'static str, value: f64) -> Result<(), FieldError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(FieldError::out_of_range(field, "must be between 0 and 100"));
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age_years(field: &'static str, age: i64) -> Result<(), FieldError> {
    if age < 1 {
        return Err(FieldError::out_of_range(field, "must be at least 1 year"));
    }
    if age > 150 {
        return Err(FieldError::out_of_range(field, "cannot exceed 150 years"));
    }
    Ok(())
}

/// Validate a calorie value
pub fn validate_calories(field: &'static str, calories: f64) -> Result<(), FieldError> {
    if calories < 0.0 {
        return Err(FieldError::out_of_range(field, "cannot be negative"));
    }
    if calories > 50000.0 {
        return Err(FieldError::out_of_range(field, "unreasonably high"));
    }
    Ok(())
}

/// Validate a walking distance in km
pub fn validate_distance_km(field: &'static str, distance_km: f64) -> Result<(), FieldError> {
    if distance_km < 0.0 {
        return Err(FieldError::out_of_range(field, "cannot be negative"));
    }
    if distance_km > 500.0 {
        return Err(FieldError::out_of_range(field, "unreasonably far"));
    }
    Ok(())
}
