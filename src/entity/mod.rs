//! SeaORM entity definitions for the gameshelf database.

pub mod auth_token;
pub mod favorite;
pub mod game;
pub mod user;
