// src/handlers/landing.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::landing::{WordStream, WordStreamParams, WordStreamQuery},
};

// GET /api/landing/word-stream
#[utoipa::path(
    get,
    path = "/api/landing/word-stream",
    tag = "Landing",
    params(WordStreamQuery),
    responses(
        (status = 200, description = "Paleta e palavras animadas da landing", body = WordStream),
        (status = 400, description = "Cor base inválida")
    )
)]
pub async fn word_stream(
    State(app_state): State<AppState>,
    Query(query): Query<WordStreamQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = WordStreamParams::from(&query);
    let stream = app_state.landing_service.word_stream(&params).await?;
    Ok((StatusCode::OK, Json(stream)))
}
