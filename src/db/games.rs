//! Database operations for games.

use sea_orm::*;

use crate::error::AppResult;
use crate::models::{Game, GameFilter, NewGame};

fn filtered(filter: &GameFilter) -> Select<crate::entity::game::Entity> {
    let mut query = crate::entity::game::Entity::find();
    if let Some(ref genre) = filter.genre {
        query = query.filter(crate::entity::game::Column::Genre.eq(genre.clone()));
    }
    if let Some(year) = filter.year_released {
        query = query.filter(crate::entity::game::Column::YearReleased.eq(year));
    }
    query
}

/// Count games matching the filter and fetch one page, ordered by id.
/// `page` is 1-based.
pub async fn list_page(
    db: &DatabaseConnection,
    filter: &GameFilter,
    page: u64,
    page_size: u64,
) -> AppResult<(u64, Vec<Game>)> {
    let paginator = filtered(filter)
        .order_by_asc(crate::entity::game::Column::Id)
        .paginate(db, page_size);

    let total = paginator.num_items().await?;
    let models = paginator.fetch_page(page.saturating_sub(1)).await?;

    Ok((total, models.into_iter().map(Game::from).collect()))
}

/// Insert a new game and return it with its assigned id.
pub async fn insert(db: &DatabaseConnection, new: NewGame) -> AppResult<Game> {
    let model = crate::entity::game::ActiveModel {
        name: Set(new.name),
        year_released: Set(new.year_released),
        genre: Set(new.genre),
        studio: Set(new.studio),
        ..Default::default()
    };

    let inserted = model.insert(db).await?;
    Ok(inserted.into())
}

/// Find a game by id.
pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Option<Game>> {
    let result = crate::entity::game::Entity::find_by_id(id).one(db).await?;
    Ok(result.map(Game::from))
}
