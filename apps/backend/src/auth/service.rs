use std::time::SystemTime;

use thiserror::Error;

use crate::auth::credentials::CredentialStore;
use crate::auth::jwt::issue_token;
use crate::auth::password::verify_password;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Classified authentication failures.
///
/// `UserNotFound` and `InvalidPassword` stay distinguishable for audit
/// logging; the HTTP boundary collapses both into the same generic 401
/// so callers cannot enumerate usernames.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("user not found")]
    UserNotFound,
    #[error("invalid password")]
    InvalidPassword,
    #[error(transparent)]
    Internal(#[from] AppError),
}

/// Exchange a username/password pair for a signed access token.
///
/// Looks up the credential, verifies the password against the stored
/// hash, and mints a token carrying the credential's username and roles.
/// No side effects beyond the token issuance itself; the plaintext
/// password is never logged or stored.
pub fn authenticate(
    store: &CredentialStore,
    security: &SecurityConfig,
    username: &str,
    password: &str,
) -> Result<String, AuthError> {
    let credential = store.lookup(username).ok_or(AuthError::UserNotFound)?;

    if !verify_password(&credential.password_hash, password) {
        return Err(AuthError::InvalidPassword);
    }

    let token = issue_token(
        &credential.username,
        &credential.roles,
        SystemTime::now(),
        security,
    )?;
    Ok(token)
}
