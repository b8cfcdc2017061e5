//! Database operations for users.

use chrono::Utc;
use sea_orm::*;

use crate::error::AppResult;
use crate::models::NewUser;

/// Find a user by username.
pub async fn find_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> AppResult<Option<crate::entity::user::Model>> {
    let result = crate::entity::user::Entity::find()
        .filter(crate::entity::user::Column::Username.eq(username))
        .one(db)
        .await?;

    Ok(result)
}

/// Check whether a username is already registered.
pub async fn username_taken(db: &DatabaseConnection, username: &str) -> AppResult<bool> {
    let count = crate::entity::user::Entity::find()
        .filter(crate::entity::user::Column::Username.eq(username))
        .count(db)
        .await?;

    Ok(count > 0)
}

/// Check whether an email address is already registered.
pub async fn email_taken(db: &DatabaseConnection, email: &str) -> AppResult<bool> {
    let count = crate::entity::user::Entity::find()
        .filter(crate::entity::user::Column::Email.eq(email))
        .count(db)
        .await?;

    Ok(count > 0)
}

/// Insert a new active user with the given password hash.
pub async fn insert(
    db: &DatabaseConnection,
    new: &NewUser,
    password_hash: String,
) -> AppResult<crate::entity::user::Model> {
    let model = crate::entity::user::ActiveModel {
        username: Set(new.username.clone()),
        email: Set(new.email.clone()),
        password_hash: Set(password_hash),
        first_name: Set(new.first_name.clone()),
        last_name: Set(new.last_name.clone()),
        is_active: Set(true),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    Ok(model.insert(db).await?)
}
