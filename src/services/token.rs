//! Bearer token generation, hashing, and verification.
//!
//! Tokens are opaque random strings; only the SHA-256 hash reaches the
//! database. The raw token is returned to the client exactly once, at login.

use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::AuthenticatedUser;

/// Prefix of every issued token.
const TOKEN_PREFIX: &str = "gshelf_";
/// Characters of the raw token stored for log correlation.
const PREFIX_LENGTH: usize = 8;

/// Hash a token using SHA-256.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Generate a random bearer token string.
pub fn generate_token() -> String {
    let random_bytes: [u8; 32] = rand::random();
    format!("{}{}", TOKEN_PREFIX, hex::encode(random_bytes))
}

/// Issue a fresh token for the user, replacing any existing one.
/// Returns the raw token.
pub async fn issue_for_user(db: &DatabaseConnection, user_id: i32) -> AppResult<String> {
    let token = generate_token();
    let token_hash = hash_token(&token);
    let token_prefix: String = token.chars().take(PREFIX_LENGTH).collect();

    db::tokens::replace_for_user(db, user_id, &token_hash, &token_prefix).await?;

    Ok(token)
}

/// Resolve a raw token to its user.
/// Unknown tokens and deactivated users are both rejected.
pub async fn verify_token(db: &DatabaseConnection, token: &str) -> AppResult<AuthenticatedUser> {
    let token_hash = hash_token(token);

    let user = db::tokens::find_user_by_hash(db, &token_hash)
        .await?
        .ok_or_else(|| AppError::Unauthorized("authentication failed".to_string()))?;

    if !user.is_active {
        return Err(AppError::Unauthorized("authentication failed".to_string()));
    }

    Ok(user.into())
}
