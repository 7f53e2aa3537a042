#![allow(dead_code)]

pub mod auth;
pub mod logging;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use todo_backend::auth::credentials::{Credential, CredentialStore};
use todo_backend::middleware::request_trace::RequestTrace;
use todo_backend::middleware::structured_logger::StructuredLogger;
use todo_backend::routes;
use todo_backend::state::app_state::AppState;
use todo_backend::state::security_config::SecurityConfig;

#[ctor::ctor]
fn init_test_logging() {
    logging::init();
}

pub const TEST_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

/// Credential fixtures hashed at a low bcrypt cost to keep tests fast;
/// the hash format embeds the cost, so verification is unchanged.
pub fn test_credentials() -> CredentialStore {
    CredentialStore::new([
        Credential {
            username: "alice".to_string(),
            password_hash: bcrypt::hash("password1", 4).expect("hash fixture password"),
            roles: "admin,editor".to_string(),
        },
        Credential {
            username: "bob".to_string(),
            password_hash: bcrypt::hash("password2", 4).expect("hash fixture password"),
            roles: String::new(),
        },
    ])
}

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

/// Build an AppState backed by a fresh in-memory SQLite database with
/// the schema applied.
pub async fn build_test_state(security: SecurityConfig) -> AppState {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    // A single pooled connection keeps every query on the same in-memory DB
    options.max_connections(1);

    let db = Database::connect(options)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");

    AppState::new(db, security, test_credentials())
}

/// Build the test service with the production route table and logging
/// middleware (CORS is exercised separately).
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    let data = web::Data::new(state);
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data)
            .configure(routes::configure),
    )
    .await
}
