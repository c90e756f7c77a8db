//! # Admin Guard
//!
//! Admin routes accept a single shared bearer token. Only its Argon2 hash is
//! configured (`ADMIN_API_TOKEN`, PHC string format); each request's token is
//! verified against that hash. Without a configured hash the admin API
//! refuses every request.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use eyre::Result;
use storefront_core::errors::{StoreError, StoreResult};
use tracing::warn;

use crate::{middleware::error_handling::AppError, ApiState};

/// Hashes an admin token with Argon2 and a fresh random salt.
///
/// The returned PHC string is what goes into `ADMIN_API_TOKEN`.
pub fn hash_token(token: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let token_hash = Argon2::default()
        .hash_password(token.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing admin token: {}", e))?
        .to_string();

    Ok(token_hash)
}

/// Checks `token` against a stored PHC hash.
///
/// A hash that does not parse is a server fault, not a failed login.
pub fn verify_token(token_hash: &str, token: &str) -> StoreResult<bool> {
    let parsed_hash = PasswordHash::new(token_hash)
        .map_err(|e| StoreError::Internal(format!("Invalid admin token hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(token.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

pub async fn require_admin(
    State(state): State<Arc<ApiState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token_hash) = state.admin_token_hash.as_deref() else {
        return Err(AppError(StoreError::Authorization(
            "Admin API is disabled".to_string(),
        )));
    };

    let provided = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token);

    let verdict = match provided {
        None => Err(StoreError::Authentication(
            "Missing bearer token".to_string(),
        )),
        Some(token) => {
            if verify_token(token_hash, token)? {
                Ok(())
            } else {
                warn!(path = %request.uri().path(), "rejected admin request with wrong token");
                Err(StoreError::Authentication("Invalid admin token".to_string()))
            }
        }
    };
    verdict?;

    Ok(next.run(request).await)
}
