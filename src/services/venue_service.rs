// src/services/venue_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{FavoriteRepository, ReviewRepository, VenueRepository, VibeRepository},
    models::{
        auth::User,
        venue::{District, Theme, Venue, VenueDetail, VenueFilter, VenueKind},
        vibe::VibeSummary,
    },
    services::review_service::average_ratings,
};

#[derive(Clone)]
pub struct VenueService {
    venue_repo: VenueRepository,
    review_repo: ReviewRepository,
    vibe_repo: VibeRepository,
    favorite_repo: FavoriteRepository,
}

impl VenueService {
    pub fn new(
        venue_repo: VenueRepository,
        review_repo: ReviewRepository,
        vibe_repo: VibeRepository,
        favorite_repo: FavoriteRepository,
    ) -> Self {
        Self { venue_repo, review_repo, vibe_repo, favorite_repo }
    }

    pub async fn list_venues(&self, kind: VenueKind, filter: &VenueFilter) -> Result<Vec<Venue>, AppError> {
        self.venue_repo.list_venues(kind, filter).await
    }

    pub async fn get_venue(&self, id: Uuid) -> Result<Venue, AppError> {
        self.venue_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::VenueNotFound)
    }

    pub async fn list_districts(&self) -> Result<Vec<District>, AppError> {
        self.venue_repo.list_districts().await
    }

    pub async fn list_themes(&self) -> Result<Vec<Theme>, AppError> {
        self.venue_repo.list_themes().await
    }

    /// Local, reviews, vibe e favorito em paralelo; as médias saem das reviews.
    pub async fn get_venue_detail(&self, id: Uuid, viewer: Option<&User>) -> Result<VenueDetail, AppError> {
        let favorite = async {
            match viewer {
                Some(user) => self.favorite_repo.is_favorite(user.id, id).await,
                None => Ok(false),
            }
        };

        let (venue, reviews, latest_sample, is_favorite) = tokio::try_join!(
            self.venue_repo.find_by_id(id),
            self.review_repo.list_for_venue(id),
            self.vibe_repo.latest_for_venue(id),
            favorite,
        )?;

        let venue = venue.ok_or(AppError::VenueNotFound)?;
        let average_ratings = average_ratings(reviews.iter().map(|r| &r.ratings), venue.ratings);
        let axis_labels = venue.kind.axis_labels().iter().map(|l| l.to_string()).collect();

        Ok(VenueDetail {
            axis_labels,
            average_ratings,
            review_count: reviews.len(),
            reviews,
            vibe: latest_sample.map(VibeSummary::from),
            is_favorite,
            venue,
        })
    }
}
