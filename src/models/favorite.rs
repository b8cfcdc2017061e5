//! Favorite wire models.

use serde::{Deserialize, Serialize};

use crate::models::game::Game;
use crate::models::user::UserRef;

/// A favorite with its game and owner expanded, as returned by the
/// favorites listing and detail endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteDetail {
    pub id: i32,
    pub game: Game,
    pub user: UserRef,
}

/// Response for a newly created favorite; references by id only.
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteCreated {
    pub id: i32,
    pub game: i32,
    pub user: i32,
}
