//! Daily log repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;

/// Daily log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DailyLogRecord {
    pub id: i64,
    pub log_date: NaiveDate,
    pub weight_kg: f64,
    pub walk_km: f64,
    pub consumed_kcal: f64,
    pub burnt_kcal: f64,
    pub total_burn_kcal: f64,
    pub deficit_kcal: f64,
    pub fat_loss_g: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for upserting a daily log
#[derive(Debug, Clone)]
pub struct UpsertDailyLog {
    pub log_date: NaiveDate,
    pub weight_kg: f64,
    pub walk_km: f64,
    pub consumed_kcal: f64,
    pub burnt_kcal: f64,
    pub total_burn_kcal: f64,
    pub deficit_kcal: f64,
    pub fat_loss_g: f64,
}

/// Daily log repository for database operations
pub struct DailyLogRepository;

impl DailyLogRepository {
    /// Insert the day's log, or overwrite it if the date already has one
    ///
    /// The UNIQUE constraint on log_date carries the upsert: exactly one
    /// row per date exists after the call, created_at is preserved on
    /// overwrite and updated_at reflects the latest submission.
    pub async fn upsert(pool: &SqlitePool, input: UpsertDailyLog) -> Result<DailyLogRecord> {
        let now = Utc::now();

        let record = sqlx::query_as::<_, DailyLogRecord>(
            r#"
            INSERT INTO daily_logs
                (log_date, weight_kg, walk_km, consumed_kcal, burnt_kcal,
                 total_burn_kcal, deficit_kcal, fat_loss_g, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(log_date) DO UPDATE SET
                weight_kg = excluded.weight_kg,
                walk_km = excluded.walk_km,
                consumed_kcal = excluded.consumed_kcal,
                burnt_kcal = excluded.burnt_kcal,
                total_burn_kcal = excluded.total_burn_kcal,
                deficit_kcal = excluded.deficit_kcal,
                fat_loss_g = excluded.fat_loss_g,
                updated_at = excluded.updated_at
            RETURNING id, log_date, weight_kg, walk_km, consumed_kcal, burnt_kcal,
                      total_burn_kcal, deficit_kcal, fat_loss_g, created_at, updated_at
            "#,
        )
        .bind(input.log_date)
        .bind(input.weight_kg)
        .bind(input.walk_km)
        .bind(input.consumed_kcal)
        .bind(input.burnt_kcal)
        .bind(input.total_burn_kcal)
        .bind(input.deficit_kcal)
        .bind(input.fat_loss_g)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get all daily logs ordered by date descending
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<DailyLogRecord>> {
        let records = sqlx::query_as::<_, DailyLogRecord>(
            r#"
            SELECT id, log_date, weight_kg, walk_km, consumed_kcal, burnt_kcal,
                   total_burn_kcal, deficit_kcal, fat_loss_g, created_at, updated_at
            FROM daily_logs
            ORDER BY log_date DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get the log for a specific date
    pub async fn get_by_date(pool: &SqlitePool, date: NaiveDate) -> Result<Option<DailyLogRecord>> {
        let record = sqlx::query_as::<_, DailyLogRecord>(
            r#"
            SELECT id, log_date, weight_kg, walk_km, consumed_kcal, burnt_kcal,
                   total_burn_kcal, deficit_kcal, fat_loss_g, created_at, updated_at
            FROM daily_logs
            WHERE log_date = ?1
            "#,
        )
        .bind(date)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
