use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::entities::todos::{self, Model as Todo};
use crate::error::AppError;

/// List all todos.
pub async fn list_todos(conn: &impl ConnectionTrait) -> Result<Vec<Todo>, AppError> {
    let todos = todos::Entity::find().all(conn).await?;
    debug!(total = todos.len(), "listed todos");
    Ok(todos)
}

/// Fetch a single todo by id.
pub async fn get_todo(conn: &impl ConnectionTrait, id: i32) -> Result<Todo, AppError> {
    todos::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::not_found("TODO_NOT_FOUND", format!("No todo with id {id}")))
}

/// Insert a new todo.
pub async fn create_todo(
    conn: &impl ConnectionTrait,
    title: String,
    completed: bool,
) -> Result<Todo, AppError> {
    let now = OffsetDateTime::now_utc();
    let todo = todos::ActiveModel {
        id: NotSet, // let the database auto-generate
        title: Set(title),
        completed: Set(completed),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await?;

    info!(id = todo.id, completed = todo.completed, "created todo");
    Ok(todo)
}

/// Overwrite an existing todo's title and completed flag.
pub async fn update_todo(
    conn: &impl ConnectionTrait,
    id: i32,
    title: String,
    completed: bool,
) -> Result<Todo, AppError> {
    let existing = get_todo(conn, id).await?;

    let mut todo: todos::ActiveModel = existing.into();
    todo.title = Set(title);
    todo.completed = Set(completed);
    todo.updated_at = Set(OffsetDateTime::now_utc());

    let todo = todo.update(conn).await?;
    info!(id = todo.id, completed = todo.completed, "updated todo");
    Ok(todo)
}

/// Delete a todo by id.
pub async fn delete_todo(conn: &impl ConnectionTrait, id: i32) -> Result<(), AppError> {
    let existing = get_todo(conn, id).await?;

    let todo: todos::ActiveModel = existing.into();
    todo.delete(conn).await?;

    info!(id, "deleted todo");
    Ok(())
}
