// src/services/review_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ReviewRepository, VenueRepository},
    models::{
        auth::User,
        review::{CreateReviewPayload, NewReview, Review, ReviewPage, ReviewPageQuery},
        venue::VenueRatings,
    },
};

/// Média aritmética de cada eixo, arredondada para o inteiro mais próximo.
/// Sem reviews, vale a nota estática do local.
pub fn average_ratings<'a, I>(ratings: I, fallback: VenueRatings) -> VenueRatings
where
    I: IntoIterator<Item = &'a VenueRatings>,
{
    let mut count: i64 = 0;
    let mut totals = [0i64; 4];
    for r in ratings {
        count += 1;
        totals[0] += i64::from(r.music);
        totals[1] += i64::from(r.vibe);
        totals[2] += i64::from(r.crowd);
        totals[3] += i64::from(r.safety);
    }

    if count == 0 {
        return fallback;
    }

    // Notas nunca são negativas: (2*soma + n) / 2n arredonda .5 para cima.
    let mean = |total: i64| ((2 * total + count) / (2 * count)) as i16;
    VenueRatings {
        music: mean(totals[0]),
        vibe: mean(totals[1]),
        crowd: mean(totals[2]),
        safety: mean(totals[3]),
    }
}

#[derive(Clone)]
pub struct ReviewService {
    review_repo: ReviewRepository,
    venue_repo: VenueRepository,
}

impl ReviewService {
    pub fn new(review_repo: ReviewRepository, venue_repo: VenueRepository) -> Self {
        Self { review_repo, venue_repo }
    }

    pub async fn list_reviews(&self, venue_id: Uuid, query: &ReviewPageQuery) -> Result<ReviewPage, AppError> {
        if !self.venue_repo.exists(venue_id).await? {
            return Err(AppError::VenueNotFound);
        }

        let (page, per_page) = query.resolve();
        let offset = i64::from(page - 1) * i64::from(per_page);

        let (reviews, total) = tokio::try_join!(
            self.review_repo.list_page(venue_id, i64::from(per_page), offset),
            self.review_repo.count_for_venue(venue_id),
        )?;

        Ok(ReviewPage { reviews, page, per_page, total })
    }

    pub async fn create_review(
        &self,
        user: &User,
        venue_id: Uuid,
        payload: &CreateReviewPayload,
    ) -> Result<Review, AppError> {
        if !self.venue_repo.exists(venue_id).await? {
            return Err(AppError::VenueNotFound);
        }

        let new_review = NewReview::from_payload(venue_id, user.id, payload);
        let review = self.review_repo.create(&new_review).await?;

        tracing::info!(
            venue_id = %venue_id,
            review_id = %review.id,
            anonymous = review.is_anonymous,
            "📝 Review criada"
        );
        Ok(review)
    }
}
