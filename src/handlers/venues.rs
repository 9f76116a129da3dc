// src/handlers/venues.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::MaybeUser,
    models::venue::{District, Theme, Venue, VenueDetail, VenueKind, VenueListQuery},
};

async fn list_by_kind(
    app_state: &AppState,
    kind: VenueKind,
    query: &VenueListQuery,
) -> Result<Json<Vec<Venue>>, AppError> {
    let venues = app_state
        .venue_service
        .list_venues(kind, &query.filter())
        .await?;
    Ok(Json(venues))
}

// GET /api/clubs
#[utoipa::path(
    get,
    path = "/api/clubs",
    tag = "Venues",
    params(VenueListQuery),
    responses(
        (status = 200, description = "Clubs, filtrados por distrito e tags", body = Vec<Venue>)
    )
)]
pub async fn list_clubs(
    State(app_state): State<AppState>,
    Query(query): Query<VenueListQuery>,
) -> Result<impl IntoResponse, AppError> {
    list_by_kind(&app_state, VenueKind::Club, &query).await
}

// GET /api/bars
#[utoipa::path(
    get,
    path = "/api/bars",
    tag = "Venues",
    params(VenueListQuery),
    responses(
        (status = 200, description = "Bares, filtrados por distrito e tags", body = Vec<Venue>)
    )
)]
pub async fn list_bars(
    State(app_state): State<AppState>,
    Query(query): Query<VenueListQuery>,
) -> Result<impl IntoResponse, AppError> {
    list_by_kind(&app_state, VenueKind::Bar, &query).await
}

// GET /api/venues/{id}
#[utoipa::path(
    get,
    path = "/api/venues/{id}",
    tag = "Venues",
    params(
        ("id" = Uuid, Path, description = "ID do local")
    ),
    responses(
        (status = 200, description = "Local", body = Venue),
        (status = 404, description = "Local não encontrado")
    )
)]
pub async fn get_venue(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let venue = app_state.venue_service.get_venue(id).await?;
    Ok((StatusCode::OK, Json(venue)))
}

// GET /api/venues/{id}/detail
#[utoipa::path(
    get,
    path = "/api/venues/{id}/detail",
    tag = "Venues",
    params(
        ("id" = Uuid, Path, description = "ID do local")
    ),
    responses(
        (status = 200, description = "Página de detalhe: médias, reviews, vibe e favorito", body = VenueDetail),
        (status = 404, description = "Local não encontrado")
    ),
    security(
        (),
        ("api_jwt" = [])
    )
)]
pub async fn get_venue_detail(
    State(app_state): State<AppState>,
    viewer: MaybeUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let detail = app_state
        .venue_service
        .get_venue_detail(id, viewer.user())
        .await?;
    Ok((StatusCode::OK, Json(detail)))
}

// GET /api/districts
#[utoipa::path(
    get,
    path = "/api/districts",
    tag = "Venues",
    responses(
        (status = 200, description = "Distritos de Berlim", body = Vec<District>)
    )
)]
pub async fn list_districts(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let districts = app_state.venue_service.list_districts().await?;
    Ok((StatusCode::OK, Json(districts)))
}

// GET /api/themes
#[utoipa::path(
    get,
    path = "/api/themes",
    tag = "Venues",
    responses(
        (status = 200, description = "Temas usados como tags", body = Vec<Theme>)
    )
)]
pub async fn list_themes(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let themes = app_state.venue_service.list_themes().await?;
    Ok((StatusCode::OK, Json(themes)))
}
