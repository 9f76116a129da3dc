// src/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::auth::auth_guard};

/// Monta o router completo com estado, docs e camadas HTTP.
pub fn build_router(app_state: AppState) -> Router {
    let auth_layer = || axum_middleware::from_fn_with_state(app_state.clone(), auth_guard);

    // Rotas de autenticação (públicas)
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    let user_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .layer(auth_layer());

    // Leitura pública; escrita (review, vibe) exige sessão
    let venue_routes = Router::new()
        .route("/{id}", get(handlers::venues::get_venue))
        .route("/{id}/detail", get(handlers::venues::get_venue_detail))
        .route("/{id}/reviews", get(handlers::reviews::list_reviews))
        .route("/{id}/vibe", get(handlers::vibe::get_vibe))
        .merge(
            Router::new()
                .route("/{id}/reviews", post(handlers::reviews::create_review))
                .route("/{id}/vibe", post(handlers::vibe::record_vibe))
                .layer(auth_layer()),
        );

    // `status` aceita visitante; o resto é do usuário logado
    let favorite_routes = Router::new()
        .route("/status", get(handlers::favorites::favorite_statuses))
        .merge(
            Router::new()
                .route("/", get(handlers::favorites::list_favorites))
                .route(
                    "/{venue_id}",
                    get(handlers::favorites::get_favorite)
                        .put(handlers::favorites::add_favorite)
                        .delete(handlers::favorites::remove_favorite),
                )
                .route("/{venue_id}/toggle", post(handlers::favorites::toggle_favorite))
                .layer(auth_layer()),
        );

    let plan_routes = Router::new()
        .route("/", get(handlers::plans::list_plans))
        .route("/{id}", get(handlers::plans::get_plan))
        .route("/{id}/members", get(handlers::plans::list_members))
        .merge(
            Router::new()
                .route("/", post(handlers::plans::create_plan))
                .route(
                    "/{id}/join",
                    post(handlers::plans::join_plan).delete(handlers::plans::leave_plan),
                )
                .layer(auth_layer()),
        );

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/districts", get(handlers::venues::list_districts))
        .route("/api/themes", get(handlers::venues::list_themes))
        .route("/api/clubs", get(handlers::venues::list_clubs))
        .route("/api/bars", get(handlers::venues::list_bars))
        .route("/api/landing/word-stream", get(handlers::landing::word_stream))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api/venues", venue_routes)
        .nest("/api/favorites", favorite_routes)
        .nest("/api/plans", plan_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
