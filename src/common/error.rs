// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Tipo de erro único da aplicação. Handlers devolvem Result<_, AppError>.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Requisição inválida: {0}")]
    BadRequest(String),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Local não encontrado")]
    VenueNotFound,

    #[error("Nenhuma amostra de vibe para o local")]
    VibeNotFound,

    #[error("Plano não encontrado")]
    PlanNotFound,

    #[error("Plano lotado")]
    PlanFull,

    #[error("Usuário já participa do plano")]
    AlreadyMember,

    #[error("Usuário não participa do plano")]
    NotMember,

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::EmailAlreadyExists | AppError::PlanFull | AppError::AlreadyMember => {
                StatusCode::CONFLICT
            }
            AppError::InvalidCredentials | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::UserNotFound
            | AppError::VenueNotFound
            | AppError::VibeNotFound
            | AppError::PlanNotFound
            | AppError::NotMember => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            // Devolve todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid.",
                    "details": details,
                }));
                return (status, body).into_response();
            }
            AppError::BadRequest(message) => message,
            AppError::EmailAlreadyExists => "This e-mail is already in use.".to_string(),
            AppError::InvalidCredentials => "Invalid e-mail or password.".to_string(),
            AppError::InvalidToken => "Missing or invalid authentication token.".to_string(),
            AppError::UserNotFound => "User not found.".to_string(),
            AppError::VenueNotFound => "Venue not found.".to_string(),
            AppError::VibeNotFound => "No live vibe reported for this venue yet.".to_string(),
            AppError::PlanNotFound => "Plan not found.".to_string(),
            AppError::PlanFull => "This plan is already full.".to_string(),
            AppError::AlreadyMember => "You already joined this plan.".to_string(),
            AppError::NotMember => "You are not part of this plan.".to_string(),

            // O resto vira 500; o detalhe fica só no log.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                "An unexpected error occurred.".to_string()
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_absence_maps_to_not_found() {
        assert_eq!(AppError::VenueNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::PlanNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::VibeNotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn capacity_conflicts_map_to_409() {
        assert_eq!(AppError::PlanFull.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::AlreadyMember.status(), StatusCode::CONFLICT);
        assert_eq!(AppError::EmailAlreadyExists.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn unexpected_failures_are_500() {
        let err = AppError::InternalServerError(anyhow::anyhow!("boom"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn auth_failures_are_401() {
        assert_eq!(AppError::InvalidToken.into_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
    }
}
