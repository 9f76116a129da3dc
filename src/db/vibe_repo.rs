// src/db/vibe_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::vibe::{NewVibeSample, VibeSample},
};

const SAMPLE_COLUMNS: &str =
    "id, venue_id, door_strictness, queue_estimate, music_intensity, crowd_heat, suggestion, recorded_at";

#[derive(Clone)]
pub struct VibeRepository {
    pool: PgPool,
}

impl VibeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn latest_for_venue(&self, venue_id: Uuid) -> Result<Option<VibeSample>, AppError> {
        let sql = format!(
            "SELECT {SAMPLE_COLUMNS} FROM vibe_samples WHERE venue_id = $1 ORDER BY recorded_at DESC LIMIT 1"
        );
        let sample = sqlx::query_as::<_, VibeSample>(&sql)
            .bind(venue_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(sample)
    }

    pub async fn insert(
        &self,
        venue_id: Uuid,
        reported_by: Uuid,
        sample: &NewVibeSample,
    ) -> Result<VibeSample, AppError> {
        let sql = format!(
            r#"
            INSERT INTO vibe_samples (
                venue_id, reported_by, door_strictness, queue_estimate,
                music_intensity, crowd_heat, suggestion
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {SAMPLE_COLUMNS}
            "#
        );
        let created = sqlx::query_as::<_, VibeSample>(&sql)
            .bind(venue_id)
            .bind(reported_by)
            .bind(sample.door_strictness)
            .bind(sample.queue_estimate)
            .bind(sample.music_intensity)
            .bind(sample.crowd_heat)
            .bind(&sample.suggestion)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }
}
