// src/db/favorite_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::venue_repo::VENUE_COLUMNS,
    models::{favorite::FavoriteVenue, venue::VenueKind},
};

#[derive(Clone)]
pub struct FavoriteRepository {
    pool: PgPool,
    live_window_minutes: i32,
}

impl FavoriteRepository {
    pub fn new(pool: PgPool, live_window_minutes: i32) -> Self {
        Self { pool, live_window_minutes }
    }

    pub async fn is_favorite(&self, user_id: Uuid, venue_id: Uuid) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = $1 AND venue_id = $2)",
        )
        .bind(user_id)
        .bind(venue_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Uma consulta só para a lista inteira; devolve os IDs que são favoritos.
    pub async fn favorited_among(&self, user_id: Uuid, venue_ids: &[Uuid]) -> Result<Vec<Uuid>, AppError> {
        if venue_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = sqlx::query_scalar(
            "SELECT venue_id FROM favorites WHERE user_id = $1 AND venue_id = ANY($2)",
        )
        .bind(user_id)
        .bind(venue_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(ids)
    }

    /// Idempotente: favoritar duas vezes não é erro.
    pub async fn add(&self, user_id: Uuid, venue_id: Uuid) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO favorites (user_id, venue_id)
            VALUES ($1, $2)
            ON CONFLICT ON CONSTRAINT favorites_user_venue_key DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(venue_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Devolve se havia algo para remover.
    pub async fn remove(&self, user_id: Uuid, venue_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND venue_id = $2")
            .bind(user_id)
            .bind(venue_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_for_user(&self, user_id: Uuid, kind: VenueKind) -> Result<Vec<FavoriteVenue>, AppError> {
        let sql = format!(
            r#"
            SELECT {VENUE_COLUMNS},
                   f.id AS favorite_id,
                   f.created_at AS favorite_created_at
            FROM favorites f
            JOIN venues v ON v.id = f.venue_id
            JOIN districts d ON d.id = v.district_id
            WHERE f.user_id = $2 AND v.kind = $3
            ORDER BY f.created_at DESC
            "#
        );
        let favorites = sqlx::query_as::<_, FavoriteVenue>(&sql)
            .bind(self.live_window_minutes)
            .bind(user_id)
            .bind(kind)
            .fetch_all(&self.pool)
            .await?;
        Ok(favorites)
    }
}
