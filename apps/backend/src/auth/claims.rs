//! Claims carried in backend-issued access tokens.

use serde::{Deserialize, Serialize};

/// Identity and role claims embedded in every token.
///
/// Invariant: `exp > iat`; both are set at issuance and never rewritten.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Username the token was issued for
    pub sub: String,
    /// Comma-joined role set, possibly empty (wire form: "admin,editor")
    #[serde(default)]
    pub roles: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    /// Issuing service
    pub iss: String,
}

impl Claims {
    /// Iterate the individual roles of the comma-joined set.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.split(',').filter(|role| !role.is_empty())
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles().any(|r| r == role)
    }
}
