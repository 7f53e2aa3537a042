//! Bearer-token authentication middleware.
//!
//! Extracts the bearer token from the Authorization header, verifies it,
//! and stores the verified claims in request extensions for downstream
//! handlers. Any failure (missing header, malformed header, or a token
//! that does not verify) short-circuits with the same generic 401 and
//! the wrapped service is never invoked.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;

use crate::auth::jwt::verify_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub struct TokenAuth;

impl<S, B> Transform<S, ServiceRequest> for TokenAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenAuthMiddleware { service }))
    }
}

pub struct TokenAuthMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TokenAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Extract the Authorization header and AppState before moving req
        let auth_header = req.headers().get(header::AUTHORIZATION).cloned();
        let app_state = req.app_data::<web::Data<AppState>>().cloned();

        // A missing or malformed header is treated identically to an
        // invalid token.
        let token = match extract_bearer_from_header(auth_header.as_ref()) {
            Some(token) => token,
            None => {
                warn!(path = %req.path(), "missing or malformed bearer token");
                return Box::pin(async { Err(AppError::unauthorized().into()) });
            }
        };

        let app_state = match app_state {
            Some(state) => state,
            None => {
                return Box::pin(async {
                    Err(AppError::internal("AppState not available".to_string()).into())
                });
            }
        };

        match verify_token(&token, &app_state.security) {
            Ok(claims) => {
                // Store claims in request extensions BEFORE calling the
                // wrapped service; they live exactly as long as this request.
                req.extensions_mut().insert(claims);

                let fut = self.service.call(req);
                Box::pin(fut)
            }
            Err(e) => {
                // The failure class is logged here and nowhere else; the
                // client sees the same generic 401 for every class.
                warn!(path = %req.path(), error = %e, "token verification failed");
                Box::pin(async { Err(AppError::unauthorized().into()) })
            }
        }
    }
}

fn extract_bearer_from_header(
    header_value: Option<&actix_web::http::header::HeaderValue>,
) -> Option<String> {
    let auth_str = header_value?.to_str().ok()?;

    let parts: Vec<&str> = auth_str.split_whitespace().collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return None;
    }

    let token = parts[1];
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}
