//! Weekly aggregation of daily logs
//!
//! Groups logged days by the Monday of their ISO week and sums the energy
//! figures. Pure and recomputed per request; log volume is one row per day,
//! so there is no need for caching or incremental updates.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The per-day figures the aggregator consumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoggedDay {
    pub date: NaiveDate,
    pub total_burn_kcal: f64,
    pub consumed_kcal: f64,
    pub deficit_kcal: f64,
    pub fat_loss_g: f64,
}

/// One ISO week's summed figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// The Monday that keys this week
    pub week_start: NaiveDate,
    pub total_burn_kcal: f64,
    pub consumed_kcal: f64,
    pub deficit_kcal: f64,
    pub fat_loss_g: f64,
    /// Number of days with a log entry this week
    pub days: usize,
}

/// The Monday of the ISO week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    // Subtracting at most 6 days from a valid NaiveDate cannot underflow
    // within chrono's supported range for calendar data.
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Sum daily logs into per-week summaries, most recent week first
pub fn summarize_weeks<'a, I>(days: I) -> Vec<WeekSummary>
where
    I: IntoIterator<Item = &'a LoggedDay>,
{
    let mut weeks: BTreeMap<NaiveDate, WeekSummary> = BTreeMap::new();

    for day in days {
        let start = week_start(day.date);
        let entry = weeks.entry(start).or_insert_with(|| WeekSummary {
            week_start: start,
            total_burn_kcal: 0.0,
            consumed_kcal: 0.0,
            deficit_kcal: 0.0,
            fat_loss_g: 0.0,
            days: 0,
        });

        entry.total_burn_kcal += day.total_burn_kcal;
        entry.consumed_kcal += day.consumed_kcal;
        entry.deficit_kcal += day.deficit_kcal;
        entry.fat_loss_g += day.fat_loss_g;
        entry.days += 1;
    }

    weeks.into_values().rev().collect()
}
