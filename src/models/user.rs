//! User wire models and the authenticated-caller type.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::require_field;

const MAX_NAME_LEN: usize = 64;
const MAX_EMAIL_LEN: usize = 255;

/// Request body for POST /users/auth/register.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Validated registration fields; password still in the clear, hashed by the
/// service layer before it reaches the database.
#[derive(Debug)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegisterRequest {
    pub fn validate(self) -> AppResult<NewUser> {
        let username = require_field(self.username, "username")?;
        let password = require_field(self.password, "password")?;
        let email = require_field(self.email, "email")?;
        let first_name = require_field(self.first_name, "first_name")?;
        let last_name = require_field(self.last_name, "last_name")?;

        if username.len() > MAX_NAME_LEN
            || first_name.len() > MAX_NAME_LEN
            || last_name.len() > MAX_NAME_LEN
            || email.len() > MAX_EMAIL_LEN
        {
            return Err(AppError::InvalidInput("wrong input data".to_string()));
        }

        Ok(NewUser {
            username,
            password,
            email,
            first_name,
            last_name,
        })
    }
}

/// Request body for POST /users/auth (login).
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn validate(self) -> AppResult<(String, String)> {
        let username = require_field(self.username, "username")?;
        let password = require_field(self.password, "password")?;
        Ok((username, password))
    }
}

/// Public user reference embedded in favorite responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub username: String,
}

/// Caller resolved from a bearer token by the auth extractor.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub username: String,
}

impl From<crate::entity::user::Model> for AuthenticatedUser {
    fn from(m: crate::entity::user::Model) -> Self {
        AuthenticatedUser {
            id: m.id,
            username: m.username,
        }
    }
}
