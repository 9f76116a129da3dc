// src/models/review.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::venue::{VenueRatings, RATING_MAX, RATING_MIN};

pub const DEFAULT_RATING: f64 = 50.0;
pub const DEFAULT_PER_PAGE: u32 = 5;
pub const MAX_PER_PAGE: u32 = 50;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub venue_id: Uuid,
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub user_id: Option<Uuid>,
    /// Ausente quando a review é anônima.
    pub author_name: Option<String>,
    pub is_anonymous: bool,
    #[sqlx(flatten)]
    pub ratings: VenueRatings,
    pub comment: String,
    /// Minutos de fila
    pub queue_time: Option<i32>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Escala em que o cliente mandou as notas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RatingScale {
    #[default]
    Percent,
    /// 0-5, multiplicado por 20
    Five,
}

impl RatingScale {
    pub fn to_percent(self, value: f64) -> i16 {
        let scaled = match self {
            RatingScale::Percent => value,
            RatingScale::Five => value * 20.0,
        };
        scaled
            .round()
            .clamp(f64::from(RATING_MIN), f64::from(RATING_MAX)) as i16
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ReviewRatingsInput {
    pub music: Option<f64>,
    pub vibe: Option<f64>,
    pub crowd: Option<f64>,
    pub safety: Option<f64>,
}

impl ReviewRatingsInput {
    /// Notas omitidas ficam em 50, como o slider começa no formulário.
    pub fn resolve(&self, scale: RatingScale) -> VenueRatings {
        let default = match scale {
            RatingScale::Percent => DEFAULT_RATING,
            RatingScale::Five => DEFAULT_RATING / 20.0,
        };
        let axis = |value: Option<f64>| scale.to_percent(value.unwrap_or(default));
        VenueRatings {
            music: axis(self.music),
            vibe: axis(self.vibe),
            crowd: axis(self.crowd),
            safety: axis(self.safety),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewPayload {
    #[serde(default)]
    pub ratings: ReviewRatingsInput,
    #[serde(default)]
    pub scale: RatingScale,
    #[validate(length(max = 2000, message = "The comment must have at most 2000 characters."))]
    pub comment: Option<String>,
    #[validate(range(min = 0, max = 600, message = "The queue time must be between 0 and 600 minutes."))]
    pub queue_time: Option<i32>,
    /// Padrão: anônima
    pub is_anonymous: Option<bool>,
    #[validate(url(message = "The photo URL is invalid."))]
    pub photo_url: Option<String>,
}

/// Review já normalizada, pronta para o INSERT.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub venue_id: Uuid,
    pub user_id: Uuid,
    pub is_anonymous: bool,
    pub ratings: VenueRatings,
    pub comment: String,
    pub queue_time: Option<i32>,
    pub photo_url: Option<String>,
}

impl NewReview {
    pub fn from_payload(venue_id: Uuid, user_id: Uuid, payload: &CreateReviewPayload) -> Self {
        Self {
            venue_id,
            user_id,
            is_anonymous: payload.is_anonymous.unwrap_or(true),
            ratings: payload.ratings.resolve(payload.scale),
            comment: payload.comment.as_deref().unwrap_or_default().trim().to_string(),
            queue_time: payload.queue_time,
            photo_url: payload
                .photo_url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ReviewPageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ReviewPageQuery {
    /// (página, itens por página), com página começando em 1.
    pub fn resolve(&self) -> (u32, u32) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
        (page, per_page)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPage {
    pub reviews: Vec<Review>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: serde_json::Value) -> CreateReviewPayload {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn omitted_ratings_default_to_fifty() {
        let input = ReviewRatingsInput { music: Some(90.0), ..Default::default() };
        let ratings = input.resolve(RatingScale::Percent);
        assert_eq!(ratings, VenueRatings { music: 90, vibe: 50, crowd: 50, safety: 50 });
    }

    #[test]
    fn five_point_scale_is_scaled_and_clamped() {
        assert_eq!(RatingScale::Five.to_percent(4.0), 80);
        assert_eq!(RatingScale::Five.to_percent(4.5), 90);
        assert_eq!(RatingScale::Five.to_percent(7.0), 100);
        assert_eq!(RatingScale::Percent.to_percent(-12.0), 0);
        assert_eq!(RatingScale::Percent.to_percent(150.0), 100);
    }

    #[test]
    fn reviews_are_anonymous_by_default() {
        let venue_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let review = NewReview::from_payload(
            venue_id,
            user_id,
            &payload(serde_json::json!({ "comment": "  bass was huge  " })),
        );
        assert!(review.is_anonymous);
        assert_eq!(review.comment, "bass was huge");
        assert_eq!(review.ratings, VenueRatings { music: 50, vibe: 50, crowd: 50, safety: 50 });
    }

    #[test]
    fn five_scale_payload_parses() {
        let review = NewReview::from_payload(
            Uuid::new_v4(),
            Uuid::new_v4(),
            &payload(serde_json::json!({
                "scale": "five",
                "ratings": { "music": 5, "vibe": 3, "crowd": 0, "safety": 4 },
                "isAnonymous": false,
                "queueTime": 30
            })),
        );
        assert!(!review.is_anonymous);
        assert_eq!(review.queue_time, Some(30));
        assert_eq!(review.ratings, VenueRatings { music: 100, vibe: 60, crowd: 0, safety: 80 });
    }

    #[test]
    fn queue_time_out_of_range_fails_validation() {
        let p = payload(serde_json::json!({ "queueTime": 900 }));
        assert!(p.validate().is_err());
    }

    #[test]
    fn pagination_is_bounded() {
        let q = ReviewPageQuery { page: Some(0), per_page: Some(500) };
        assert_eq!(q.resolve(), (1, MAX_PER_PAGE));
        let q = ReviewPageQuery { page: None, per_page: None };
        assert_eq!(q.resolve(), (1, DEFAULT_PER_PAGE));
    }
}
