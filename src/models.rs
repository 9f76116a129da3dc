pub mod auth;
pub mod favorite;
pub mod landing;
pub mod plan;
pub mod review;
pub mod venue;
pub mod vibe;
