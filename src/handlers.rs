pub mod auth;
pub mod favorites;
pub mod landing;
pub mod plans;
pub mod reviews;
pub mod venues;
pub mod vibe;
