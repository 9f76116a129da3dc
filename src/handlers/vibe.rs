// src/handlers/vibe.rs

use axum::{
    extract::{Path, State},
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
    models::vibe::{RecordVibePayload, VibeSummary},
};

// GET /api/venues/{id}/vibe
#[utoipa::path(
    get,
    path = "/api/venues/{id}/vibe",
    tag = "Vibe",
    params(
        ("id" = Uuid, Path, description = "ID do local")
    ),
    responses(
        (status = 200, description = "Resumo da amostra mais recente", body = VibeSummary),
        (status = 404, description = "Local inexistente ou sem amostras")
    )
)]
pub async fn get_vibe(
    State(app_state): State<AppState>,
    Path(venue_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.vibe_service.get_vibe_summary(venue_id).await?;
    Ok((StatusCode::OK, Json(summary)))
}

// POST /api/venues/{id}/vibe
#[utoipa::path(
    post,
    path = "/api/venues/{id}/vibe",
    tag = "Vibe",
    params(
        ("id" = Uuid, Path, description = "ID do local")
    ),
    request_body = RecordVibePayload,
    responses(
        (status = 201, description = "Amostra registrada", body = VibeSummary),
        (status = 401, description = "Não autorizado"),
        (status = 404, description = "Local não encontrado")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn record_vibe(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(venue_id): Path<Uuid>,
    Json(payload): Json<RecordVibePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let summary = app_state
        .vibe_service
        .record_sample(&user, venue_id, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(summary)))
}
