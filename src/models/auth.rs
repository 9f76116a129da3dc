// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::validate_not_blank;

// Usuário vindo do banco
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    #[schema(ignore)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserPayload {
    #[validate(email(message = "The e-mail address is invalid."))]
    pub email: String,
    #[validate(length(min = 6, message = "The password must have at least 6 characters."))]
    pub password: String,
    #[validate(
        length(min = 1, max = 40, message = "The display name must have 1 to 40 characters."),
        custom(function = "validate_not_blank")
    )]
    pub display_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginUserPayload {
    #[validate(email(message = "The e-mail address is invalid."))]
    pub email: String,
    #[validate(length(min = 6, message = "The password must have at least 6 characters."))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
}

// "claims" dentro do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // ID do usuário
    pub exp: usize, // quando o token expira
    pub iat: usize, // quando o token foi criado
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_display_name_is_rejected() {
        let payload = RegisterUserPayload {
            email: "nachteule@example.com".into(),
            password: "secret123".into(),
            display_name: "    ".into(),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("display_name"));
    }

    #[test]
    fn regular_registration_passes() {
        let payload = RegisterUserPayload {
            email: "nachteule@example.com".into(),
            password: "secret123".into(),
            display_name: "Nachteule".into(),
        };
        assert!(payload.validate().is_ok());
    }
}
