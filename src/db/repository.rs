use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{NewTodoRequest, Todo, UpdateTodoRequest};

pub async fn fetch_todos(db: &SqlitePool) -> Result<Vec<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        "SELECT id, title, description, completed, created_at FROM todos ORDER BY id",
    )
    .fetch_all(db)
    .await
}

pub async fn find_todo_by_id(db: &SqlitePool, id: i64) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        "SELECT id, title, description, completed, created_at FROM todos WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn todo_exists(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM todos WHERE id = ?)")
        .bind(id)
        .fetch_one(db)
        .await
}

/// Inserts a new record. The id comes from the table's AUTOINCREMENT
/// key, so ids are unique and never reused after a delete.
pub async fn insert_todo(db: &SqlitePool, req: NewTodoRequest) -> Result<Todo, sqlx::Error> {
    let now = Utc::now().to_rfc3339();

    let result = sqlx::query(
        "INSERT INTO todos (title, description, completed, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&req.title)
    .bind(&req.description)
    .bind(req.completed)
    .bind(&now)
    .execute(db)
    .await?;

    Ok(Todo {
        id: result.last_insert_rowid(),
        title: req.title,
        description: req.description,
        completed: req.completed,
        created_at: now,
    })
}

/// Overwrites title, description and completed on an existing record.
/// id and created_at are untouched. The WHERE clause decides existence
/// in the same statement, so there is no check-then-act window.
pub async fn replace_todo(
    db: &SqlitePool,
    id: i64,
    req: UpdateTodoRequest,
) -> Result<Option<Todo>, sqlx::Error> {
    let rows = sqlx::query("UPDATE todos SET title = ?, description = ?, completed = ? WHERE id = ?")
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.completed)
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    if rows == 0 {
        return Ok(None);
    }

    find_todo_by_id(db, id).await
}

/// Sets completed = true, leaving the other fields untouched. Applying
/// it to an already-completed record is a no-op that still succeeds.
pub async fn complete_todo(db: &SqlitePool, id: i64) -> Result<Option<Todo>, sqlx::Error> {
    let rows = sqlx::query("UPDATE todos SET completed = 1 WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    if rows == 0 {
        return Ok(None);
    }

    find_todo_by_id(db, id).await
}

pub async fn delete_todo(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM todos WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(rows > 0)
}
