// src/db/review_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::review::{NewReview, Review},
};

const REVIEW_COLUMNS: &str = r#"
    r.id, r.venue_id, r.user_id,
    CASE WHEN r.is_anonymous THEN NULL ELSE u.display_name END AS author_name,
    r.is_anonymous, r.music, r.vibe, r.crowd, r.safety,
    r.comment, r.queue_time, r.photo_url, r.created_at
"#;

#[derive(Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Todas as reviews do local, mais novas primeiro.
    pub async fn list_for_venue(&self, venue_id: Uuid) -> Result<Vec<Review>, AppError> {
        let sql = format!(
            r#"
            SELECT {REVIEW_COLUMNS}
            FROM reviews r
            LEFT JOIN users u ON u.id = r.user_id
            WHERE r.venue_id = $1
            ORDER BY r.created_at DESC
            "#
        );
        let reviews = sqlx::query_as::<_, Review>(&sql)
            .bind(venue_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(reviews)
    }

    pub async fn list_page(&self, venue_id: Uuid, limit: i64, offset: i64) -> Result<Vec<Review>, AppError> {
        let sql = format!(
            r#"
            SELECT {REVIEW_COLUMNS}
            FROM reviews r
            LEFT JOIN users u ON u.id = r.user_id
            WHERE r.venue_id = $1
            ORDER BY r.created_at DESC
            LIMIT $2 OFFSET $3
            "#
        );
        let reviews = sqlx::query_as::<_, Review>(&sql)
            .bind(venue_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(reviews)
    }

    pub async fn count_for_venue(&self, venue_id: Uuid) -> Result<i64, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE venue_id = $1")
            .bind(venue_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// Comentários recentes e a média das quatro notas de cada um.
    pub async fn recent_comments(&self, limit: i64) -> Result<Vec<(String, i32)>, AppError> {
        let rows: Vec<(String, i32)> = sqlx::query_as(
            r#"
            SELECT comment, ((music + vibe + crowd + safety) / 4)::int AS mean_rating
            FROM reviews
            WHERE btrim(comment) <> ''
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, review: &NewReview) -> Result<Review, AppError> {
        // CTE para devolver a linha já com o nome do autor resolvido.
        let sql = format!(
            r#"
            WITH r AS (
                INSERT INTO reviews (
                    venue_id, user_id, is_anonymous,
                    music, vibe, crowd, safety,
                    comment, queue_time, photo_url
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                RETURNING *
            )
            SELECT {REVIEW_COLUMNS}
            FROM r
            LEFT JOIN users u ON u.id = r.user_id
            "#
        );
        let created = sqlx::query_as::<_, Review>(&sql)
            .bind(review.venue_id)
            .bind(review.user_id)
            .bind(review.is_anonymous)
            .bind(review.ratings.music)
            .bind(review.ratings.vibe)
            .bind(review.ratings.crowd)
            .bind(review.ratings.safety)
            .bind(&review.comment)
            .bind(review.queue_time)
            .bind(review.photo_url.as_deref())
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }
}
