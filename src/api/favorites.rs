//! Favorites endpoints.
//!
//! All routes operate on the authenticated user's own favorites; the detail
//! route rejects favorites owned by someone else with a 403.

use actix_web::{HttpResponse, get, post, web};
use tracing::info;

use crate::auth::TokenAuth;
use crate::db::{self, DbPool};
use crate::error::{AppError, AppResult};
use crate::models::{FavoriteCreated, FavoriteDetail, MessageResponse, UserRef};

/// Configure favorites routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_favorites)
        .service(get_favorite)
        .service(add_favorite);
}

/// List the authenticated user's favorites with their games.
///
/// GET /users/favorites
#[get("/users/favorites")]
pub async fn list_favorites(auth: TokenAuth, pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = db::favorites::list_for_user(pool.connection(), auth.user.id).await?;

    let user = UserRef {
        username: auth.user.username,
    };
    let favorites: Vec<FavoriteDetail> = rows
        .into_iter()
        .map(|(favorite, game)| FavoriteDetail {
            id: favorite.id,
            game: game.into(),
            user: user.clone(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(favorites))
}

/// Get a single favorite by its id.
///
/// GET /users/favorites/{id}
#[get("/users/favorites/{id}")]
pub async fn get_favorite(
    auth: TokenAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let (favorite, game) = db::favorites::find_by_id(pool.connection(), id)
        .await?
        .ok_or_else(|| AppError::NotFound("Favorites".to_string()))?;

    if favorite.user_id != auth.user.id {
        return Err(AppError::Forbidden(format!(
            "favorite with id {} does not belong to authenticated user",
            id
        )));
    }

    Ok(HttpResponse::Ok().json(FavoriteDetail {
        id: favorite.id,
        game: game.into(),
        user: UserRef {
            username: auth.user.username,
        },
    }))
}

/// Add the game with the given id to the authenticated user's favorites.
/// Adding a game that is already a favorite is a no-op answered with 200.
///
/// POST /users/favorites/{id}
#[post("/users/favorites/{id}")]
pub async fn add_favorite(
    auth: TokenAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let game_id = path.into_inner();
    let conn = pool.connection();

    let game = db::games::find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("game with id {}", game_id)))?;

    // Duplicate check lives here, not in the schema
    if db::favorites::exists(conn, auth.user.id, game_id).await? {
        return Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
            "game {} already added to favorites",
            game.name
        ))));
    }

    let favorite = db::favorites::insert(conn, auth.user.id, game_id).await?;
    info!(user_id = auth.user.id, game_id, "Favorite added");

    Ok(HttpResponse::Created().json(FavoriteCreated {
        id: favorite.id,
        game: favorite.game_id,
        user: favorite.user_id,
    }))
}
