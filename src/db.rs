pub mod user_repo;
pub use user_repo::UserRepository;
pub mod venue_repo;
pub use venue_repo::VenueRepository;
pub mod review_repo;
pub use review_repo::ReviewRepository;
pub mod vibe_repo;
pub use vibe_repo::VibeRepository;
pub mod favorite_repo;
pub use favorite_repo::FavoriteRepository;
pub mod plan_repo;
pub use plan_repo::PlanRepository;
