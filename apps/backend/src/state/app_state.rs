use sea_orm::DatabaseConnection;

use crate::auth::credentials::CredentialStore;

use super::security_config::SecurityConfig;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Security configuration including token settings
    pub security: SecurityConfig,
    /// Read-only credential fixtures seeded at process start
    pub credentials: CredentialStore,
}

impl AppState {
    /// Create a new AppState with the given database connection,
    /// security config, and credential store
    pub fn new(
        db: DatabaseConnection,
        security: SecurityConfig,
        credentials: CredentialStore,
    ) -> Self {
        Self {
            db: Some(db),
            security,
            credentials,
        }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn without_db(security: SecurityConfig, credentials: CredentialStore) -> Self {
        Self {
            db: None,
            security,
            credentials,
        }
    }
}
