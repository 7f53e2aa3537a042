use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Default token lifetime: 15 minutes.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

/// Issuer claim stamped into every token this service mints.
pub const TOKEN_ISSUER: &str = "todo-backend";

/// Configuration for token security settings.
///
/// Built once at process start and shared read-only afterwards; no
/// subsystem reads ambient global state for any of these values.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// Signing algorithm (fixed to HS256, never chosen from token input)
    pub algorithm: Algorithm,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    /// Issuer claim value
    pub issuer: String,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given secret and defaults
    /// for everything else.
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: DEFAULT_TOKEN_TTL,
            issuer: TOKEN_ISSUER.to_string(),
        }
    }

    /// Override the token lifetime.
    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
