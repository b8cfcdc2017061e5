//! Actix-web extractor for bearer token authentication.
//!
//! # Security
//! - The raw header value is wrapped in `SecretString` immediately
//! - Tokens are never logged; memory is zeroized when the request completes
//! - Lookup is by SHA-256 hash, so the raw token never reaches a query

use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, web};
use futures_util::future::LocalBoxFuture;
use secrecy::{ExposeSecret, SecretString};

use crate::config::AUTH_HEADER;
use crate::db::DbPool;
use crate::error::ErrorResponse;
use crate::models::AuthenticatedUser;
use crate::services::token;

/// Authentication error for extractors.
#[derive(Debug)]
pub struct AuthError {
    message: String,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::UNAUTHORIZED).json(ErrorResponse {
            error: "UNAUTHORIZED".to_string(),
            message: self.message.clone(),
        })
    }
}

/// Extractor that requires a valid bearer token.
///
/// Use this in handlers that require authentication:
/// ```ignore
/// async fn protected_handler(auth: TokenAuth) -> impl Responder {
///     // auth.user is the authenticated user
/// }
/// ```
pub struct TokenAuth {
    pub user: AuthenticatedUser,
}

impl FromRequest for TokenAuth {
    type Error = AuthError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Get DbPool from app data
        let pool = req.app_data::<web::Data<DbPool>>().cloned();

        // Extract the header - immediately wrapped in SecretString
        let header: Option<SecretString> = req
            .headers()
            .get(AUTH_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|s| SecretString::from(s.to_string()));

        Box::pin(async move {
            let pool = pool.ok_or_else(|| AuthError {
                message: "Internal configuration error".to_string(),
            })?;

            let header = header.ok_or_else(|| AuthError {
                message: "Missing credentials. Provide an 'Authorization: Token <key>' header."
                    .to_string(),
            })?;

            let raw_token = super::token_from_header(header.expose_secret()).ok_or_else(|| {
                AuthError {
                    message: "Invalid Authorization header. Expected 'Token <key>'.".to_string(),
                }
            })?;

            match token::verify_token(pool.connection(), raw_token).await {
                Ok(user) => Ok(TokenAuth { user }),
                Err(e) => Err(AuthError {
                    message: e.to_string(),
                }),
            }
            // Note: header is dropped here, memory zeroized
        })
    }
}
