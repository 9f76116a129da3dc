// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,

        // --- Users ---
        handlers::auth::get_me,

        // --- Venues ---
        handlers::venues::list_clubs,
        handlers::venues::list_bars,
        handlers::venues::get_venue,
        handlers::venues::get_venue_detail,
        handlers::venues::list_districts,
        handlers::venues::list_themes,

        // --- Reviews ---
        handlers::reviews::list_reviews,
        handlers::reviews::create_review,

        // --- Vibe ---
        handlers::vibe::get_vibe,
        handlers::vibe::record_vibe,

        // --- Favorites ---
        handlers::favorites::favorite_statuses,
        handlers::favorites::list_favorites,
        handlers::favorites::get_favorite,
        handlers::favorites::add_favorite,
        handlers::favorites::remove_favorite,
        handlers::favorites::toggle_favorite,

        // --- Plans ---
        handlers::plans::list_plans,
        handlers::plans::create_plan,
        handlers::plans::get_plan,
        handlers::plans::list_members,
        handlers::plans::join_plan,
        handlers::plans::leave_plan,

        // --- Landing ---
        handlers::landing::word_stream,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Venues ---
            models::venue::VenueKind,
            models::venue::VenueRatings,
            models::venue::Venue,
            models::venue::District,
            models::venue::Theme,
            models::venue::VenueDetail,

            // --- Reviews ---
            models::review::Review,
            models::review::RatingScale,
            models::review::ReviewRatingsInput,
            models::review::CreateReviewPayload,
            models::review::ReviewPage,

            // --- Vibe ---
            models::vibe::VibeSummary,
            models::vibe::RecordVibePayload,

            // --- Favorites ---
            models::favorite::FavoriteVenue,
            models::favorite::FavoriteState,

            // --- Plans ---
            models::plan::Plan,
            models::plan::PlanMember,
            models::plan::CreatePlanPayload,
            models::plan::JoinPlanPayload,
            models::plan::JoinPlanResponse,

            // --- Landing ---
            models::landing::WordDirection,
            models::landing::WordItem,
            models::landing::WordStream,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Dados do Usuário"),
        (name = "Venues", description = "Clubs, bares, distritos e temas"),
        (name = "Reviews", description = "Avaliações dos locais"),
        (name = "Vibe", description = "Vibe ao vivo reportada pelo público"),
        (name = "Favorites", description = "Locais favoritos do usuário"),
        (name = "Plans", description = "Encontros em grupo"),
        (name = "Landing", description = "Fluxo decorativo de palavras da landing")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_routes_and_bearer_scheme() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/clubs"));
        assert!(doc.paths.paths.contains_key("/api/plans/{id}/join"));
        assert!(doc.paths.paths.contains_key("/api/landing/word-stream"));

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("api_jwt"));
    }
}
