use std::time::SystemTime;

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::auth::jwt::issue_token;
use crate::auth::service::{authenticate, AuthError};
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::validated_json::ValidatedJson;
use crate::middleware::token_auth::TokenAuth;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AuthorizeRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Exchange credentials for an access token.
///
/// Credential failures collapse to one generic 401: a wrong password and
/// an unknown username are indistinguishable to the caller.
async fn authorize(
    body: ValidatedJson<AuthorizeRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let AuthorizeRequest { username, password } = body.into_inner();

    // bcrypt verification is CPU-bound; keep it off the async workers
    let state = app_state.clone();
    let login = username.clone();
    let result = web::block(move || authenticate(&state.credentials, &state.security, &login, &password))
        .await
        .map_err(|e| AppError::internal(format!("authentication task failed: {e}")))?;

    match result {
        Ok(token) => Ok(HttpResponse::Ok().json(TokenResponse { token })),
        Err(err @ (AuthError::UserNotFound | AuthError::InvalidPassword)) => {
            // Audit trail keeps the variant; the response does not.
            warn!(username = %username, error = %err, "authentication failed");
            Err(AppError::unauthorized())
        }
        Err(AuthError::Internal(e)) => Err(e),
    }
}

/// Echo the verified claims of the calling request.
async fn userinfo(user: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(user))
}

/// Issue a fresh token carrying the caller's verified identity.
///
/// Only extends a still-valid session: an expired token never reaches
/// this handler.
async fn refresh(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let token = issue_token(
        &user.username,
        &user.roles,
        SystemTime::now(),
        &app_state.security,
    )?;
    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/authorize").route(web::post().to(authorize)))
        .service(
            web::resource("/userinfo")
                .wrap(TokenAuth)
                .route(web::get().to(userinfo)),
        )
        .service(
            web::resource("/refresh")
                .wrap(TokenAuth)
                .route(web::post().to(refresh)),
        );
}
