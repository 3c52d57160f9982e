//! Profile and body-fat history repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use energy_tracker_shared::types::ProfileInput;
use sqlx::SqlitePool;

/// The singleton profile row id; the schema pins it with CHECK (id = 1)
const PROFILE_ID: i64 = 1;

/// Profile record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRecord {
    pub id: i64,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub body_fat_percent: f64,
    pub age_years: i64,
    pub gender: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body-fat history record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BodyFatEntryRecord {
    pub id: i64,
    pub body_fat_percent: f64,
    pub recorded_at: DateTime<Utc>,
}

/// Profile repository for database operations
pub struct ProfileRepository;

impl ProfileRepository {
    /// Create the profile or overwrite it in place
    ///
    /// Appends a body-fat history entry in the same transaction, so a
    /// reader never sees a profile whose history is missing its entry.
    pub async fn set(pool: &SqlitePool, input: &ProfileInput) -> Result<ProfileRecord> {
        let now = Utc::now();
        let mut tx = pool.begin().await?;

        let record = sqlx::query_as::<_, ProfileRecord>(
            r#"
            INSERT INTO user_profile
                (id, height_cm, weight_kg, body_fat_percent, age_years, gender, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(id) DO UPDATE SET
                height_cm = excluded.height_cm,
                weight_kg = excluded.weight_kg,
                body_fat_percent = excluded.body_fat_percent,
                age_years = excluded.age_years,
                gender = excluded.gender,
                updated_at = excluded.updated_at
            RETURNING id, height_cm, weight_kg, body_fat_percent, age_years, gender, created_at, updated_at
            "#,
        )
        .bind(PROFILE_ID)
        .bind(input.height_cm)
        .bind(input.weight_kg)
        .bind(input.body_fat_percent)
        .bind(input.age_years)
        .bind(&input.gender)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO body_fat_history (body_fat_percent, recorded_at)
            VALUES (?1, ?2)
            "#,
        )
        .bind(input.body_fat_percent)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(record)
    }

    /// Update only the body-fat field, appending a history entry
    ///
    /// Returns `None` without writing anything when no profile exists.
    pub async fn update_body_fat(
        pool: &SqlitePool,
        body_fat_percent: f64,
    ) -> Result<Option<ProfileRecord>> {
        let now = Utc::now();
        let mut tx = pool.begin().await?;

        let record = sqlx::query_as::<_, ProfileRecord>(
            r#"
            UPDATE user_profile
            SET body_fat_percent = ?1, updated_at = ?2
            WHERE id = ?3
            RETURNING id, height_cm, weight_kg, body_fat_percent, age_years, gender, created_at, updated_at
            "#,
        )
        .bind(body_fat_percent)
        .bind(now)
        .bind(PROFILE_ID)
        .fetch_optional(&mut *tx)
        .await?;

        if record.is_some() {
            sqlx::query(
                r#"
                INSERT INTO body_fat_history (body_fat_percent, recorded_at)
                VALUES (?1, ?2)
                "#,
            )
            .bind(body_fat_percent)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(record)
    }

    /// Get the singleton profile, if setup has ever run
    pub async fn get(pool: &SqlitePool) -> Result<Option<ProfileRecord>> {
        let record = sqlx::query_as::<_, ProfileRecord>(
            r#"
            SELECT id, height_cm, weight_kg, body_fat_percent, age_years, gender, created_at, updated_at
            FROM user_profile
            WHERE id = ?1
            "#,
        )
        .bind(PROFILE_ID)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}

/// Body-fat history repository for database operations
pub struct BodyFatHistoryRepository;

impl BodyFatHistoryRepository {
    /// Get the N most recent history entries, most recent first
    pub async fn recent(pool: &SqlitePool, limit: i64) -> Result<Vec<BodyFatEntryRecord>> {
        let records = sqlx::query_as::<_, BodyFatEntryRecord>(
            r#"
            SELECT id, body_fat_percent, recorded_at
            FROM body_fat_history
            ORDER BY recorded_at DESC, id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Total number of history entries
    pub async fn count(pool: &SqlitePool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM body_fat_history
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
