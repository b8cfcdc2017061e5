//! Wire-format models for the gameshelf API.

use crate::error::{AppError, AppResult};

pub mod favorite;
pub mod game;
pub mod user;

// Re-export commonly used types
pub use favorite::{FavoriteCreated, FavoriteDetail};
pub use game::{CreateGameRequest, Game, GameFilter, GameListResponse, ListGamesQuery, NewGame};
pub use user::{AuthenticatedUser, LoginRequest, NewUser, RegisterRequest, UserRef};

/// Body for endpoints that answer with a single human-readable message.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Pull a required request field out of its Option, naming the field in the
/// error the way the API reports missing values.
pub(crate) fn require_field(value: Option<String>, field: &str) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::InvalidInput(format!(
            "missing value for {}",
            field
        ))),
    }
}
