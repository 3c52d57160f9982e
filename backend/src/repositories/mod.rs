//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod logs;
pub mod profile;

pub use logs::{DailyLogRecord, DailyLogRepository, UpsertDailyLog};
pub use profile::{BodyFatEntryRecord, BodyFatHistoryRepository, ProfileRecord, ProfileRepository};
