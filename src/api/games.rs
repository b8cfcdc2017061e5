//! Game catalog endpoints.

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::info;

use crate::auth::TokenAuth;
use crate::db::{self, DbPool};
use crate::error::{AppError, AppResult};
use crate::models::{CreateGameRequest, GameListResponse, ListGamesQuery};

/// Configure game routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_games).service(create_game).service(get_game);
}

/// Build the absolute URL of a neighbouring page, preserving the active
/// filters and page size.
fn page_url(req: &HttpRequest, query: &ListGamesQuery, page: u64) -> String {
    let conn = req.connection_info();
    let mut params = vec![format!("page={}", page)];
    if let Some(size) = query.page_size {
        params.push(format!("page_size={}", size));
    }
    if let Some(ref genre) = query.genre {
        params.push(format!("genre={}", urlencoding::encode(genre)));
    }
    if let Some(year) = query.year_released {
        params.push(format!("year_released={}", year));
    }

    format!(
        "{}://{}{}?{}",
        conn.scheme(),
        conn.host(),
        req.path(),
        params.join("&")
    )
}

/// List games with pagination and optional equality filters.
///
/// GET /games?page=1&page_size=10&genre=RPG&year_released=2000
#[get("/games")]
pub async fn list_games(
    _auth: TokenAuth,
    req: HttpRequest,
    pool: web::Data<DbPool>,
    query: web::Query<ListGamesQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let page = query.page();
    let page_size = query.clamped_page_size();

    let (count, results) =
        db::games::list_page(pool.connection(), &query.filter(), page, page_size).await?;

    // Pages past the end are a 404; an empty first page is an empty 200.
    if page > 1 && query.offset() >= count {
        return Err(AppError::NotFound(format!("page {}", page)));
    }

    let next = if page * page_size < count {
        Some(page_url(&req, &query, page + 1))
    } else {
        None
    };
    let previous = if page > 1 {
        Some(page_url(&req, &query, page - 1))
    } else {
        None
    };

    Ok(HttpResponse::Ok().json(GameListResponse {
        count,
        next,
        previous,
        results,
    }))
}

/// Add a new game to the catalog.
///
/// POST /games
#[post("/games")]
pub async fn create_game(
    _auth: TokenAuth,
    pool: web::Data<DbPool>,
    body: web::Json<CreateGameRequest>,
) -> AppResult<HttpResponse> {
    let new_game = body.into_inner().validate()?;

    let game = db::games::insert(pool.connection(), new_game).await?;
    info!(game_id = game.id, name = %game.name, "Game created");

    Ok(HttpResponse::Created().json(game))
}

/// Get a single game by id.
///
/// GET /games/{id}
#[get("/games/{id}")]
pub async fn get_game(
    _auth: TokenAuth,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let game = db::games::find_by_id(pool.connection(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("game with id {}", id)))?;

    Ok(HttpResponse::Ok().json(game))
}
