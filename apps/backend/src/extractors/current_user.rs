use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::auth::claims::Claims;
use crate::error::AppError;

/// Verified identity of the calling request, extracted from the claims
/// stored in request extensions by the TokenAuth middleware.
///
/// This is the only way handlers read the caller's identity: a typed
/// extractor that fails with 401 when no verified claims are present.
#[derive(Debug, Serialize, Clone)]
pub struct CurrentUser {
    pub username: String,
    /// Comma-joined role set, possibly empty
    pub roles: String,
}

impl CurrentUser {
    /// Iterate the individual roles of the comma-joined set.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.split(',').filter(|role| !role.is_empty())
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .extensions()
            .get::<Claims>()
            .map(|claims| CurrentUser {
                username: claims.sub.clone(),
                roles: claims.roles.clone(),
            })
            .ok_or_else(AppError::unauthorized);

        ready(user)
    }
}
