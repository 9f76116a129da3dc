// src/config.rs

pub mod settings;

use crate::{
    db::{FavoriteRepository, PlanRepository, ReviewRepository, UserRepository, VenueRepository, VibeRepository},
    services::{
        auth::AuthService, favorite_service::FavoriteService, landing_service::LandingService,
        plan_service::PlanService, review_service::ReviewService, venue_service::VenueService,
        vibe_service::VibeService,
    },
};
pub use settings::Settings;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub settings: Arc<Settings>,
    pub auth_service: AuthService,
    pub venue_service: VenueService,
    pub review_service: ReviewService,
    pub vibe_service: VibeService,
    pub favorite_service: FavoriteService,
    pub plan_service: PlanService,
    pub landing_service: LandingService,
}

impl AppState {
    pub async fn new(settings: Settings) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(settings.database_max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&settings.database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool, settings))
    }

    /// Monta o gráfico de dependências em cima de uma pool já criada.
    pub fn from_pool(db_pool: PgPool, settings: Settings) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let venue_repo = VenueRepository::new(db_pool.clone(), settings.vibe_live_window_minutes);
        let review_repo = ReviewRepository::new(db_pool.clone());
        let vibe_repo = VibeRepository::new(db_pool.clone());
        let favorite_repo = FavoriteRepository::new(db_pool.clone(), settings.vibe_live_window_minutes);
        let plan_repo = PlanRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            user_repo,
            db_pool.clone(),
            settings.jwt_secret.clone(),
            settings.jwt_ttl_days,
        );
        let venue_service = VenueService::new(
            venue_repo.clone(),
            review_repo.clone(),
            vibe_repo.clone(),
            favorite_repo.clone(),
        );
        let review_service = ReviewService::new(review_repo.clone(), venue_repo.clone());
        let vibe_service = VibeService::new(vibe_repo, venue_repo.clone());
        let favorite_service = FavoriteService::new(favorite_repo, venue_repo);
        let plan_service = PlanService::new(plan_repo, db_pool.clone());
        let landing_service = LandingService::new(review_repo);

        Self {
            db_pool,
            settings: Arc::new(settings),
            auth_service,
            venue_service,
            review_service,
            vibe_service,
            favorite_service,
            plan_service,
            landing_service,
        }
    }
}
