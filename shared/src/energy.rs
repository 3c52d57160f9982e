//! Energy balance calculations
//!
//! Provides the Katch-McArdle basal metabolic rate calculation and the
//! daily energy balance derived from it (total burn, deficit, estimated
//! fat loss).
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Katch-McArdle from lean body mass; 7700 kcal/kg
//!    as the adipose tissue energy density
//! 3. **Type Safety**: Results carried in a dedicated struct, not tuples

use serde::{Deserialize, Serialize};

/// Walking energy cost, flat per-kilometer model
pub const WALK_KCAL_PER_KM: f64 = 60.0;

/// Energy density of adipose tissue (kcal per kg)
pub const KCAL_PER_KG_FAT: f64 = 7700.0;

// ============================================================================
// BMR (Katch-McArdle)
// ============================================================================

/// Calculate BMR using the Katch-McArdle equation
///
/// BMR = 370 + 21.6 × LBM(kg)
/// LBM = weight × (1 - body_fat_percent/100)
///
/// Result is rounded to the nearest whole kcal. Callers with no profile
/// data must suppress the computation rather than substitute defaults.
pub fn katch_mcardle_bmr(weight_kg: f64, body_fat_percent: f64) -> f64 {
    let lean_body_mass = weight_kg * (1.0 - body_fat_percent / 100.0);
    (370.0 + 21.6 * lean_body_mass).round()
}

// ============================================================================
// Daily Energy Balance
// ============================================================================

/// Daily energy balance result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyEnergy {
    /// BMR + walking cost + manual exercise burn (whole kcal)
    pub total_burn_kcal: f64,
    /// Total burn minus consumed; negative on a surplus day (whole kcal)
    pub deficit_kcal: f64,
    /// Estimated fat loss in grams, clamped at zero on surplus (2 decimals)
    pub fat_loss_g: f64,
}

/// Compute the daily energy balance
///
/// total_burn = BMR + walk_km × 60 + burnt
/// deficit    = total_burn - consumed
/// fat_loss_g = deficit / 7700 × 1000 when deficit > 0, else 0
///
/// No fat-gain estimate is modeled for a surplus day; the fat-loss figure
/// is clamped at exactly zero.
pub fn daily_energy(bmr_kcal: f64, walk_km: f64, burnt_kcal: f64, consumed_kcal: f64) -> DailyEnergy {
    let total_burn = bmr_kcal + walk_km * WALK_KCAL_PER_KM + burnt_kcal;
    let deficit = total_burn - consumed_kcal;

    let fat_loss_g = if deficit > 0.0 {
        deficit / KCAL_PER_KG_FAT * 1000.0
    } else {
        0.0
    };

    DailyEnergy {
        total_burn_kcal: total_burn.round(),
        deficit_kcal: deficit.round(),
        fat_loss_g: (fat_loss_g * 100.0).round() / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // BMR Tests
    // =========================================================================

    #[test]
    fn test_katch_mcardle_reference_value() {
        // 85kg at 22% body fat: LBM 66.3, BMR round(370 + 21.6*66.3) = 1802
        let bmr = katch_mcardle_bmr(85.0, 22.0);
        assert_eq!(bmr, 1802.0);
    }

    #[test]
    fn test_katch_mcardle_is_whole_kcal() {
        let bmr = katch_mcardle_bmr(72.4, 18.5);
        assert_eq!(bmr, bmr.round());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: BMR is always positive for physiological inputs
        #[test]
        fn prop_bmr_positive(weight in 20.0f64..500.0, body_fat in 0.0f64..100.0) {
            let bmr = katch_mcardle_bmr(weight, body_fat);
            prop_assert!(bmr > 0.0);
        }

        /// Property: more lean mass = higher BMR (same body fat)
        #[test]
        fn prop_bmr_increases_with_weight(
            weight1 in 50.0f64..100.0,
            weight2 in 100.1f64..150.0,
            body_fat in 5.0f64..50.0
        ) {
            let bmr1 = katch_mcardle_bmr(weight1, body_fat);
            let bmr2 = katch_mcardle_bmr(weight2, body_fat);
            prop_assert!(bmr2 >= bmr1);
        }

        /// Property: higher body fat = lower BMR (same weight)
        #[test]
        fn prop_bmr_decreases_with_body_fat(
            weight in 50.0f64..150.0,
            fat1 in 5.0f64..20.0,
            fat2 in 30.0f64..60.0
        ) {
            let bmr_lean = katch_mcardle_bmr(weight, fat1);
            let bmr_fat = katch_mcardle_bmr(weight, fat2);
            prop_assert!(bmr_lean > bmr_fat);
        }
    }

    // =========================================================================
    // Daily Energy Tests
    // =========================================================================

    #[test]
    fn test_daily_energy_deficit_day() {
        // BMR 1802, 5km walk (300), 200 manual burn, 1800 consumed
        let energy = daily_energy(1802.0, 5.0, 200.0, 1800.0);
        assert_eq!(energy.total_burn_kcal, 2302.0);
        assert_eq!(energy.deficit_kcal, 502.0);
        // 502 / 7700 * 1000 = 65.19...
        assert_eq!(energy.fat_loss_g, 65.19);
    }

    #[test]
    fn test_daily_energy_surplus_clamps_fat_loss() {
        let energy = daily_energy(1802.0, 0.0, 0.0, 2500.0);
        assert_eq!(energy.deficit_kcal, -698.0);
        assert_eq!(energy.fat_loss_g, 0.0);
    }

    #[test]
    fn test_daily_energy_zero_deficit_clamps_fat_loss() {
        let energy = daily_energy(1800.0, 0.0, 0.0, 1800.0);
        assert_eq!(energy.deficit_kcal, 0.0);
        assert_eq!(energy.fat_loss_g, 0.0);
    }

    #[test]
    fn test_daily_energy_all_zero_inputs_is_bmr_only() {
        let energy = daily_energy(1500.0, 0.0, 0.0, 0.0);
        assert_eq!(energy.total_burn_kcal, 1500.0);
        assert_eq!(energy.deficit_kcal, 1500.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: fat loss is never negative, regardless of surplus size
        #[test]
        fn prop_fat_loss_never_negative(
            bmr in 800.0f64..3000.0,
            walk in 0.0f64..50.0,
            burnt in 0.0f64..3000.0,
            consumed in 0.0f64..20000.0
        ) {
            let energy = daily_energy(bmr, walk, burnt, consumed);
            prop_assert!(energy.fat_loss_g >= 0.0);
        }

        /// Property: fat loss is exactly zero whenever the deficit is not positive
        #[test]
        fn prop_surplus_day_has_zero_fat_loss(
            bmr in 800.0f64..3000.0,
            extra in 1.0f64..10000.0
        ) {
            let consumed = bmr + extra;
            let energy = daily_energy(bmr, 0.0, 0.0, consumed);
            prop_assert!(energy.deficit_kcal <= 0.0);
            prop_assert_eq!(energy.fat_loss_g, 0.0);
        }

        /// Property: walking only ever adds to the total burn
        #[test]
        fn prop_walking_increases_total_burn(
            bmr in 800.0f64..3000.0,
            walk in 0.1f64..50.0
        ) {
            let rest = daily_energy(bmr, 0.0, 0.0, 0.0);
            let walked = daily_energy(bmr, walk, 0.0, 0.0);
            prop_assert!(walked.total_burn_kcal > rest.total_burn_kcal);
        }

        /// Property: totals are rounded to whole kcal
        #[test]
        fn prop_outputs_rounded(
            bmr in 800.0f64..3000.0,
            walk in 0.0f64..50.0,
            burnt in 0.0f64..2000.0,
            consumed in 0.0f64..6000.0
        ) {
            let energy = daily_energy(bmr, walk, burnt, consumed);
            prop_assert_eq!(energy.total_burn_kcal, energy.total_burn_kcal.round());
            prop_assert_eq!(energy.deficit_kcal, energy.deficit_kcal.round());
        }
    }
}
