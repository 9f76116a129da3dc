// src/handlers/reviews.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::review::{CreateReviewPayload, Review, ReviewPage, ReviewPageQuery},
};

// GET /api/venues/{id}/reviews
#[utoipa::path(
    get,
    path = "/api/venues/{id}/reviews",
    tag = "Reviews",
    params(
        ("id" = Uuid, Path, description = "ID do local"),
        ReviewPageQuery
    ),
    responses(
        (status = 200, description = "Página de reviews, mais recentes primeiro", body = ReviewPage),
        (status = 404, description = "Local não encontrado")
    )
)]
pub async fn list_reviews(
    State(app_state): State<AppState>,
    Path(venue_id): Path<Uuid>,
    Query(query): Query<ReviewPageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = app_state.review_service.list_reviews(venue_id, &query).await?;
    Ok((StatusCode::OK, Json(page)))
}

// POST /api/venues/{id}/reviews
#[utoipa::path(
    post,
    path = "/api/venues/{id}/reviews",
    tag = "Reviews",
    params(
        ("id" = Uuid, Path, description = "ID do local")
    ),
    request_body = CreateReviewPayload,
    responses(
        (status = 201, description = "Review criada", body = Review),
        (status = 400, description = "Dados inválidos"),
        (status = 401, description = "Não autorizado"),
        (status = 404, description = "Local não encontrado")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn create_review(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(venue_id): Path<Uuid>,
    Json(payload): Json<CreateReviewPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let review = app_state
        .review_service
        .create_review(&user, venue_id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(review)))
}
