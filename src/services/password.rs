//! Password hashing and verification.
//!
//! PBKDF2-HMAC-SHA256, encoded as `pbkdf2:sha256:<iterations>$<salt>$<hash>`
//! with url-safe unpadded base64 for salt and hash.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::{AppError, AppResult};

type HmacSha256 = Hmac<Sha256>;

const ITERATIONS: u32 = 260_000;
const SALT_LENGTH: usize = 16;
const KEY_LENGTH: usize = 32;

/// Hash a password for storage with a fresh random salt.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt: [u8; SALT_LENGTH] = rand::random();

    let mut key = [0u8; KEY_LENGTH];
    pbkdf2::<HmacSha256>(password.as_bytes(), &salt, ITERATIONS, &mut key)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

    Ok(format!(
        "pbkdf2:sha256:{}${}${}",
        ITERATIONS,
        URL_SAFE_NO_PAD.encode(salt),
        URL_SAFE_NO_PAD.encode(key)
    ))
}

/// Verify a password against a stored hash.
///
/// A malformed stored hash is an internal error, not a failed verification;
/// it means the users table holds something this server never wrote.
pub fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let (iterations, salt, expected) = parse_hash(stored_hash)?;

    let mut computed = vec![0u8; expected.len()];
    pbkdf2::<HmacSha256>(password.as_bytes(), &salt, iterations, &mut computed)
        .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;

    Ok(computed.ct_eq(&expected).into())
}

/// Parse `pbkdf2:sha256:<iterations>$<salt>$<hash>` into its components.
fn parse_hash(stored_hash: &str) -> AppResult<(u32, Vec<u8>, Vec<u8>)> {
    let malformed = || AppError::Internal("Malformed password hash in database".to_string());

    let parts: Vec<&str> = stored_hash.split('$').collect();
    if parts.len() != 3 {
        return Err(malformed());
    }

    let header: Vec<&str> = parts[0].split(':').collect();
    if header.len() != 3 || header[0] != "pbkdf2" || header[1] != "sha256" {
        return Err(malformed());
    }

    let iterations = header[2].parse::<u32>().map_err(|_| malformed())?;
    let salt = URL_SAFE_NO_PAD.decode(parts[1]).map_err(|_| malformed())?;
    let hash = URL_SAFE_NO_PAD.decode(parts[2]).map_err(|_| malformed())?;

    Ok((iterations, salt, hash))
}
