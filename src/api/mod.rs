//! API endpoint modules.

pub mod auth;
pub mod favorites;
pub mod games;
pub mod health;

pub use auth::configure_routes as configure_auth_routes;
pub use favorites::configure_routes as configure_favorite_routes;
pub use games::configure_routes as configure_game_routes;
pub use health::configure_health_routes;
