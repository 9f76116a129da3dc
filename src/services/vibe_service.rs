// src/services/vibe_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{VenueRepository, VibeRepository},
    models::{
        auth::User,
        vibe::{NewVibeSample, RecordVibePayload, VibeSummary},
    },
};

#[derive(Clone)]
pub struct VibeService {
    vibe_repo: VibeRepository,
    venue_repo: VenueRepository,
}

impl VibeService {
    pub fn new(vibe_repo: VibeRepository, venue_repo: VenueRepository) -> Self {
        Self { vibe_repo, venue_repo }
    }

    /// Resumo da amostra mais recente.
    pub async fn get_vibe_summary(&self, venue_id: Uuid) -> Result<VibeSummary, AppError> {
        if !self.venue_repo.exists(venue_id).await? {
            return Err(AppError::VenueNotFound);
        }
        self.vibe_repo
            .latest_for_venue(venue_id)
            .await?
            .map(VibeSummary::from)
            .ok_or(AppError::VibeNotFound)
    }

    pub async fn record_sample(
        &self,
        user: &User,
        venue_id: Uuid,
        payload: &RecordVibePayload,
    ) -> Result<VibeSummary, AppError> {
        if !self.venue_repo.exists(venue_id).await? {
            return Err(AppError::VenueNotFound);
        }

        let sample = NewVibeSample::from(payload);
        let created = self.vibe_repo.insert(venue_id, user.id, &sample).await?;

        tracing::info!(venue_id = %venue_id, crowd_heat = created.crowd_heat, "📡 Nova amostra de vibe");
        Ok(VibeSummary::from(created))
    }
}
