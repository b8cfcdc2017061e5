//! Game wire models: list query, create request, responses.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::require_field;

/// Default number of games per page.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Upper bound for the page_size query parameter.
pub const MAX_PAGE_SIZE: u64 = 25;
/// Maximum length of the varchar columns on games.
const MAX_FIELD_LEN: usize = 64;

/// A game as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: i32,
    pub name: String,
    pub year_released: i32,
    pub genre: String,
    pub studio: String,
}

impl From<crate::entity::game::Model> for Game {
    fn from(m: crate::entity::game::Model) -> Self {
        Game {
            id: m.id,
            name: m.name,
            year_released: m.year_released,
            genre: m.genre,
            studio: m.studio,
        }
    }
}

/// Equality filters for the game listing.
#[derive(Debug, Clone, Default)]
pub struct GameFilter {
    pub genre: Option<String>,
    pub year_released: Option<i32>,
}

/// Query parameters for GET /games.
#[derive(Debug, Clone, Deserialize)]
pub struct ListGamesQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub genre: Option<String>,
    pub year_released: Option<i32>,
}

impl ListGamesQuery {
    /// Requested page, 1-based.
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size clamped to the allowed maximum.
    pub fn clamped_page_size(&self) -> u64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    /// Calculate the offset for database queries.
    pub fn offset(&self) -> u64 {
        (self.page() - 1) * self.clamped_page_size()
    }

    pub fn filter(&self) -> GameFilter {
        GameFilter {
            genre: self.genre.clone(),
            year_released: self.year_released,
        }
    }
}

/// Request body for POST /games.
#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub name: Option<String>,
    pub year_released: Option<i32>,
    pub genre: Option<String>,
    pub studio: Option<String>,
}

/// Validated game fields ready for insertion.
#[derive(Debug, Clone)]
pub struct NewGame {
    pub name: String,
    pub year_released: i32,
    pub genre: String,
    pub studio: String,
}

impl CreateGameRequest {
    /// Validate the request, reporting the first missing field by name and
    /// rejecting over-long values.
    pub fn validate(self) -> AppResult<NewGame> {
        let name = require_field(self.name, "name")?;
        let year_released = self
            .year_released
            .ok_or_else(|| AppError::InvalidInput("missing value for year_released".to_string()))?;
        let genre = require_field(self.genre, "genre")?;
        let studio = require_field(self.studio, "studio")?;

        if name.len() > MAX_FIELD_LEN || genre.len() > MAX_FIELD_LEN || studio.len() > MAX_FIELD_LEN
        {
            return Err(AppError::InvalidInput("wrong input data".to_string()));
        }

        Ok(NewGame {
            name,
            year_released,
            genre,
            studio,
        })
    }
}

/// Paged game listing: total count plus absolute next/previous page URLs.
#[derive(Debug, Serialize, Deserialize)]
pub struct GameListResponse {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Game>,
}
