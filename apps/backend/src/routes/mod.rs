use actix_web::web;

use crate::middleware::token_auth::TokenAuth;

pub mod auth;
pub mod health;
pub mod todos;

/// Register the full route table.
///
/// The /todos scope sits behind TokenAuth as a whole; the auth scope
/// wraps only its protected resources.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .service(web::scope("/auth").configure(auth::configure_routes))
        .service(
            web::scope("/todos")
                .wrap(TokenAuth)
                .configure(todos::configure_routes),
        );
}
