//! Database operations for favorites.

use sea_orm::*;

use crate::error::AppResult;

/// List a user's favorites with their games, ordered by favorite id.
pub async fn list_for_user(
    db: &DatabaseConnection,
    user_id: i32,
) -> AppResult<Vec<(crate::entity::favorite::Model, crate::entity::game::Model)>> {
    let rows = crate::entity::favorite::Entity::find()
        .filter(crate::entity::favorite::Column::UserId.eq(user_id))
        .find_also_related(crate::entity::game::Entity)
        .order_by_asc(crate::entity::favorite::Column::Id)
        .all(db)
        .await?;

    // game is None only if the FK is broken.
    Ok(rows
        .into_iter()
        .filter_map(|(favorite, game)| game.map(|g| (favorite, g)))
        .collect())
}

/// Find a favorite by id together with its game.
pub async fn find_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> AppResult<Option<(crate::entity::favorite::Model, crate::entity::game::Model)>> {
    let result = crate::entity::favorite::Entity::find_by_id(id)
        .find_also_related(crate::entity::game::Entity)
        .one(db)
        .await?;

    Ok(result.and_then(|(favorite, game)| game.map(|g| (favorite, g))))
}

/// Check whether the user already has the game in their favorites.
pub async fn exists(db: &DatabaseConnection, user_id: i32, game_id: i32) -> AppResult<bool> {
    let count = crate::entity::favorite::Entity::find()
        .filter(crate::entity::favorite::Column::UserId.eq(user_id))
        .filter(crate::entity::favorite::Column::GameId.eq(game_id))
        .count(db)
        .await?;

    Ok(count > 0)
}

/// Insert a favorite for the user.
pub async fn insert(
    db: &DatabaseConnection,
    user_id: i32,
    game_id: i32,
) -> AppResult<crate::entity::favorite::Model> {
    let model = crate::entity::favorite::ActiveModel {
        game_id: Set(game_id),
        user_id: Set(user_id),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}
