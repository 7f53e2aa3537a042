use std::time::Duration;

use actix_web::{web, App, HttpServer};
use todo_backend::auth::credentials::CredentialStore;
use todo_backend::config::db::db_url;
use todo_backend::infra::db::init_db;
use todo_backend::middleware::cors::cors_middleware;
use todo_backend::middleware::request_trace::RequestTrace;
use todo_backend::middleware::structured_logger::StructuredLogger;
use todo_backend::routes;
use todo_backend::state::app_state::AppState;
use todo_backend::state::security_config::SecurityConfig;

mod telemetry;

// Development-only fallback; a real deployment must set SECRET_KEY.
const DEV_SECRET_KEY: &str = "this-should-be-a-long-secret";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "9000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ PORT must be a valid port number");
            std::process::exit(1);
        });

    let secret = match std::env::var("SECRET_KEY") {
        Ok(secret) if !secret.is_empty() => secret,
        _ => {
            tracing::warn!(
                "SECRET_KEY not set, using the insecure development default; \
                 do not run this in production"
            );
            DEV_SECRET_KEY.to_string()
        }
    };

    let token_ttl = std::env::var("TOKEN_TTL_SECS")
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .map(Duration::from_secs);

    let mut security_config = SecurityConfig::new(secret.as_bytes());
    if let Some(ttl) = token_ttl {
        security_config = security_config.with_token_ttl(ttl);
    }

    let credentials = match CredentialStore::seeded() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ Failed to seed credential store: {e}");
            std::process::exit(1);
        }
    };

    println!("🚀 Starting TodoList API server on http://{}:{}", host, port);

    let db = match init_db(&db_url()).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ Failed to initialize database: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Database connected");

    let app_state = AppState::new(db, security_config, credentials);

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
