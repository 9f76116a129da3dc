// src/handlers/favorites.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::{AuthenticatedUser, MaybeUser},
    models::{
        favorite::{FavoriteListQuery, FavoriteState, FavoriteStatusQuery, FavoriteVenue},
        venue::VenueKind,
    },
};

// GET /api/favorites/status?ids=a,b
#[utoipa::path(
    get,
    path = "/api/favorites/status",
    tag = "Favorites",
    params(FavoriteStatusQuery),
    responses(
        (status = 200, description = "Um booleano por ID pedido; tudo false sem sessão", body = HashMap<String, bool>)
    ),
    security(
        (),
        ("api_jwt" = [])
    )
)]
pub async fn favorite_statuses(
    State(app_state): State<AppState>,
    viewer: MaybeUser,
    Query(query): Query<FavoriteStatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let statuses = app_state
        .favorite_service
        .favorite_statuses(viewer.user(), &query.requested_ids())
        .await?;
    Ok((StatusCode::OK, Json(statuses)))
}

// GET /api/favorites?kind=club
#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = "Favorites",
    params(FavoriteListQuery),
    responses(
        (status = 200, description = "Favoritos do usuário, mais recentes primeiro", body = Vec<FavoriteVenue>),
        (status = 401, description = "Não autorizado")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn list_favorites(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(query): Query<FavoriteListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let kind = query.kind.unwrap_or(VenueKind::Club);
    let favorites = app_state
        .favorite_service
        .list_favorites(&user, kind, &query.filter())
        .await?;
    Ok((StatusCode::OK, Json(favorites)))
}

// GET /api/favorites/{venue_id}
#[utoipa::path(
    get,
    path = "/api/favorites/{venue_id}",
    tag = "Favorites",
    params(
        ("venue_id" = Uuid, Path, description = "ID do local")
    ),
    responses(
        (status = 200, description = "Estado do favorito", body = FavoriteState),
        (status = 401, description = "Não autorizado")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn get_favorite(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(venue_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let is_favorite = app_state.favorite_service.is_favorite(&user, venue_id).await?;
    Ok((StatusCode::OK, Json(FavoriteState { venue_id, is_favorite })))
}

// PUT /api/favorites/{venue_id}
#[utoipa::path(
    put,
    path = "/api/favorites/{venue_id}",
    tag = "Favorites",
    params(
        ("venue_id" = Uuid, Path, description = "ID do local")
    ),
    responses(
        (status = 200, description = "Local favoritado (idempotente)", body = FavoriteState),
        (status = 401, description = "Não autorizado"),
        (status = 404, description = "Local não encontrado")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn add_favorite(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(venue_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let state = app_state.favorite_service.add_favorite(&user, venue_id).await?;
    Ok((StatusCode::OK, Json(state)))
}

// DELETE /api/favorites/{venue_id}
#[utoipa::path(
    delete,
    path = "/api/favorites/{venue_id}",
    tag = "Favorites",
    params(
        ("venue_id" = Uuid, Path, description = "ID do local")
    ),
    responses(
        (status = 200, description = "Favorito removido (idempotente)", body = FavoriteState),
        (status = 401, description = "Não autorizado")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn remove_favorite(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(venue_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let state = app_state.favorite_service.remove_favorite(&user, venue_id).await?;
    Ok((StatusCode::OK, Json(state)))
}

// POST /api/favorites/{venue_id}/toggle
#[utoipa::path(
    post,
    path = "/api/favorites/{venue_id}/toggle",
    tag = "Favorites",
    params(
        ("venue_id" = Uuid, Path, description = "ID do local")
    ),
    responses(
        (status = 200, description = "Estado resultante", body = FavoriteState),
        (status = 401, description = "Não autorizado"),
        (status = 404, description = "Local não encontrado")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn toggle_favorite(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(venue_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let state = app_state.favorite_service.toggle_favorite(&user, venue_id).await?;
    Ok((StatusCode::OK, Json(state)))
}
