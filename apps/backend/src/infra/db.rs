use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::info;

use crate::entities::todos;
use crate::error::AppError;
use crate::services::todos::create_todo;

/// Connect to the database at the given URL.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    Database::connect(url)
        .await
        .map_err(|e| AppError::db(format!("failed to connect to database: {e}")))
}

/// Connect, apply pending migrations, and load starter data.
pub async fn init_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let db = connect_db(url).await?;

    Migrator::up(&db, None)
        .await
        .map_err(|e| AppError::db(format!("failed to run migrations: {e}")))?;

    seed_todos(&db).await?;
    Ok(db)
}

/// Load starter rows when the todos table is empty.
pub async fn seed_todos(conn: &impl ConnectionTrait) -> Result<(), AppError> {
    let count = todos::Entity::find().count(conn).await?;
    if count > 0 {
        return Ok(());
    }

    info!("todos table empty, loading initial data");
    create_todo(conn, "Test todo 1".to_string(), false).await?;
    create_todo(conn, "Test todo 2".to_string(), false).await?;
    Ok(())
}
