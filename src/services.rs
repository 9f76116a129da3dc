pub mod auth;
pub mod favorite_service;
pub mod landing_service;
pub mod plan_service;
pub mod review_service;
pub mod venue_service;
pub mod vibe_service;
