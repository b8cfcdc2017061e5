//! Registration and login endpoints.

use actix_web::{HttpResponse, post, web};
use tracing::info;

use crate::db::{self, DbPool};
use crate::error::{AppError, AppResult};
use crate::models::{LoginRequest, MessageResponse, RegisterRequest};
use crate::services::{password, token};

/// Configure auth routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register).service(login);
}

/// Register a new user.
///
/// POST /users/auth/register
#[post("/users/auth/register")]
pub async fn register(
    pool: web::Data<DbPool>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let new_user = body.into_inner().validate()?;
    let conn = pool.connection();

    // Pre-check uniqueness so the caller gets a 409 instead of a DB error
    if db::users::username_taken(conn, &new_user.username).await? {
        return Err(AppError::Conflict("username already taken".to_string()));
    }
    if db::users::email_taken(conn, &new_user.email).await? {
        return Err(AppError::Conflict("email already taken".to_string()));
    }

    let password_hash = password::hash_password(&new_user.password)?;
    let user = db::users::insert(conn, &new_user, password_hash).await?;
    info!(user_id = user.id, username = %user.username, "User registered");

    Ok(HttpResponse::Created().json(MessageResponse::new("user created")))
}

/// Log in with username and password, obtaining a fresh bearer token.
/// Any previously issued token for the user stops working.
///
/// POST /users/auth
#[post("/users/auth")]
pub async fn login(
    pool: web::Data<DbPool>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let (username, pass) = body.into_inner().validate()?;
    let conn = pool.connection();

    let user = db::users::find_by_username(conn, &username)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    if !user.is_active || !password::verify_password(&pass, &user.password_hash)? {
        return Err(AppError::Unauthorized("credentials not valid".to_string()));
    }

    let token = token::issue_for_user(conn, user.id).await?;
    info!(user_id = user.id, "Login succeeded, token replaced");

    Ok(HttpResponse::Ok().json(MessageResponse::new(format!("Token {}", token))))
}
