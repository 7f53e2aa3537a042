//! Token minting helpers for tests

use std::time::{Duration, SystemTime};

use todo_backend::auth::jwt::issue_token;
use todo_backend::state::security_config::SecurityConfig;

/// Mint a valid token for the given username and roles.
pub fn mint_test_token(username: &str, roles: &str, sec: &SecurityConfig) -> String {
    issue_token(username, roles, SystemTime::now(), sec).expect("should mint token successfully")
}

/// Mint a bearer Authorization header value for the given username and roles.
pub fn bearer_header(username: &str, roles: &str, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(username, roles, sec))
}

/// Mint an already-expired token for expiry scenarios.
pub fn mint_expired_token(username: &str, roles: &str, sec: &SecurityConfig) -> String {
    let past_time = SystemTime::now() - (sec.token_ttl + Duration::from_secs(60));
    issue_token(username, roles, past_time, sec).expect("should mint expired token successfully")
}
