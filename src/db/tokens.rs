//! Database operations for auth tokens.

use chrono::Utc;
use sea_orm::*;

use crate::error::AppResult;

/// Replace any existing token row for the user with a fresh one.
/// Delete and insert run in a single transaction so the one-token-per-user
/// invariant holds even across concurrent logins.
pub async fn replace_for_user(
    db: &DatabaseConnection,
    user_id: i32,
    token_hash: &str,
    token_prefix: &str,
) -> AppResult<()> {
    let txn = db.begin().await?;

    crate::entity::auth_token::Entity::delete_many()
        .filter(crate::entity::auth_token::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;

    let model = crate::entity::auth_token::ActiveModel {
        user_id: Set(user_id),
        token_hash: Set(token_hash.to_string()),
        token_prefix: Set(token_prefix.to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    crate::entity::auth_token::Entity::insert(model)
        .exec(&txn)
        .await?;

    txn.commit().await?;
    Ok(())
}

/// Resolve a token hash to its owning user.
pub async fn find_user_by_hash(
    db: &DatabaseConnection,
    token_hash: &str,
) -> AppResult<Option<crate::entity::user::Model>> {
    let result = crate::entity::auth_token::Entity::find()
        .filter(crate::entity::auth_token::Column::TokenHash.eq(token_hash))
        .find_also_related(crate::entity::user::Entity)
        .one(db)
        .await?;

    Ok(result.and_then(|(_, user)| user))
}
