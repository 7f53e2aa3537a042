//! Read-mostly credential lookup.

use std::collections::HashMap;

use crate::auth::password::hash_password;
use crate::error::AppError;

/// A username/password credential with its role set.
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: String,
    /// bcrypt hash of the password, never the plaintext
    pub password_hash: String,
    /// Comma-joined role set, possibly empty
    pub roles: String,
}

/// Username -> credential map, built once at process start and read-only
/// afterwards. Concurrent lookups need no locking because nothing
/// mutates the map after construction.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: HashMap<String, Credential>,
}

impl CredentialStore {
    pub fn new(credentials: impl IntoIterator<Item = Credential>) -> Self {
        Self {
            users: credentials
                .into_iter()
                .map(|c| (c.username.clone(), c))
                .collect(),
        }
    }

    /// Look up a credential by username. Pure read, no side effects.
    pub fn lookup(&self, username: &str) -> Option<&Credential> {
        self.users.get(username)
    }

    /// Development fixture users, hashed at boot.
    pub fn seeded() -> Result<Self, AppError> {
        Ok(Self::new([
            Credential {
                username: "alice".to_string(),
                password_hash: hash_password("password1")?,
                roles: "admin,editor".to_string(),
            },
            Credential {
                username: "bob".to_string(),
                password_hash: hash_password("password2")?,
                roles: String::new(),
            },
        ]))
    }
}
