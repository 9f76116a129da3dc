// src/db/venue_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::venue::{District, Theme, Venue, VenueFilter, VenueKind},
};

// Projeção comum dos locais. `$1` é a janela (minutos) que conta como vibe ao vivo.
pub(crate) const VENUE_COLUMNS: &str = r#"
    v.id, v.kind, v.name, d.name AS district, v.description, v.address,
    v.music, v.vibe, v.crowd, v.safety,
    (v.has_live_vibe OR EXISTS (
        SELECT 1 FROM vibe_samples s
        WHERE s.venue_id = v.id
          AND s.recorded_at > now() - make_interval(mins => $1)
    )) AS has_live_vibe,
    ARRAY(
        SELECT t.name FROM venue_themes vt
        JOIN themes t ON t.id = vt.theme_id
        WHERE vt.venue_id = v.id
        ORDER BY t.name
    ) AS tags,
    v.created_at
"#;

#[derive(Clone)]
pub struct VenueRepository {
    pool: PgPool,
    live_window_minutes: i32,
}

impl VenueRepository {
    pub fn new(pool: PgPool, live_window_minutes: i32) -> Self {
        Self { pool, live_window_minutes }
    }

    /// Distrito por igualdade E qualquer uma das tags, direto no SQL.
    pub async fn list_venues(&self, kind: VenueKind, filter: &VenueFilter) -> Result<Vec<Venue>, AppError> {
        let sql = format!(
            r#"
            SELECT {VENUE_COLUMNS}
            FROM venues v
            JOIN districts d ON d.id = v.district_id
            WHERE v.kind = $2
              AND ($3::text IS NULL OR d.name = $3)
              AND (cardinality($4::text[]) = 0 OR EXISTS (
                    SELECT 1 FROM venue_themes vt
                    JOIN themes t ON t.id = vt.theme_id
                    WHERE vt.venue_id = v.id AND lower(t.name) = ANY($4)
              ))
            ORDER BY v.name ASC
            "#
        );

        let venues = sqlx::query_as::<_, Venue>(&sql)
            .bind(self.live_window_minutes)
            .bind(kind)
            .bind(filter.district())
            .bind(filter.tags())
            .fetch_all(&self.pool)
            .await?;
        Ok(venues)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Venue>, AppError> {
        let sql = format!(
            r#"
            SELECT {VENUE_COLUMNS}
            FROM venues v
            JOIN districts d ON d.id = v.district_id
            WHERE v.id = $2
            "#
        );

        let venue = sqlx::query_as::<_, Venue>(&sql)
            .bind(self.live_window_minutes)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(venue)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM venues WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    pub async fn list_districts(&self) -> Result<Vec<District>, AppError> {
        let districts = sqlx::query_as::<_, District>("SELECT id, name FROM districts ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(districts)
    }

    pub async fn list_themes(&self) -> Result<Vec<Theme>, AppError> {
        let themes = sqlx::query_as::<_, Theme>("SELECT id, name FROM themes ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(themes)
    }
}
