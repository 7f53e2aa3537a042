use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, decode_header, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::auth::claims::Claims;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Classified token verification failures.
///
/// Every class is terminal and collapses to the same generic 401 at the
/// HTTP boundary; the class is kept for internal logging only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature is invalid")]
    BadSignature,
    #[error("token algorithm does not match the expected algorithm")]
    WrongAlgorithm,
    #[error("token is expired")]
    Expired,
}

/// Mint a signed access token for the given username and role set.
///
/// Claims are stamped with `iat = now`, `exp = now + TTL`, and the
/// configured issuer, then signed with the configured secret.
pub fn issue_token(
    username: &str,
    roles: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let exp = iat + security.token_ttl.as_secs() as i64;

    let claims = Claims {
        sub: username.to_string(),
        roles: roles.to_string(),
        iat,
        exp,
        iss: security.issuer.clone(),
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
}

/// Verify a token and return its claims.
///
/// The self-declared algorithm in the token header is checked against
/// the configured one before any signature work, so an attacker-supplied
/// algorithm can never weaken the check. Expiry is validated with zero
/// leeway.
pub fn verify_token(token: &str, security: &SecurityConfig) -> Result<Claims, TokenError> {
    let header = decode_header(token).map_err(|_| TokenError::Malformed)?;
    if header.alg != security.algorithm {
        return Err(TokenError::WrongAlgorithm);
    }

    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;
    validation.set_issuer(&[&security.issuer]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::BadSignature,
        jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => TokenError::WrongAlgorithm,
        _ => TokenError::Malformed,
    })
}
