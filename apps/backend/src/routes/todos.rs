use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;

use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::todos;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct TodoPayload {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

fn require_db(app_state: &AppState) -> Result<&sea_orm::DatabaseConnection, AppError> {
    app_state
        .db
        .as_ref()
        .ok_or_else(|| AppError::internal("Database connection not available".to_string()))
}

async fn list(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let todos = todos::list_todos(db).await?;
    Ok(HttpResponse::Ok().json(todos))
}

async fn get(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let todo = todos::get_todo(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(todo))
}

async fn create(
    body: ValidatedJson<TodoPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let payload = body.into_inner();
    let todo = todos::create_todo(db, payload.title, payload.completed).await?;
    Ok(HttpResponse::Created().json(todo))
}

async fn update(
    path: web::Path<i32>,
    body: ValidatedJson<TodoPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let payload = body.into_inner();
    let todo = todos::update_todo(db, path.into_inner(), payload.title, payload.completed).await?;
    Ok(HttpResponse::Ok().json(todo))
}

async fn delete(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    todos::delete_todo(db, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list))
            .route(web::post().to(create)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get))
            .route(web::put().to(update))
            .route(web::delete().to(delete)),
    );
}
