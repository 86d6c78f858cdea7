use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::db::TodoStore;
use crate::error::ApiError;
use crate::models::{CreateTodoRequest, Todo};

pub type Store = Arc<dyn TodoStore>;

pub async fn list_todos(State(db): State<Store>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = db.list().await.map_err(|e| {
        tracing::error!(error = %e, "list query failed");
        ApiError::Store("Failed to query todos")
    })?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(db): State<Store>,
    Json(input): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    if input.body.is_empty() {
        return Err(ApiError::BadRequest("Todo body is required"));
    }

    let todo = db.insert(&input.body).await.map_err(|e| {
        tracing::error!(error = %e, "insert failed");
        ApiError::Store("Failed to create todo")
    })?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Flips the completion status. Read-then-write on purpose: two concurrent
/// toggles of the same id can lose an update.
pub async fn toggle_todo(
    State(db): State<Store>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    if id.is_empty() {
        return Err(ApiError::BadRequest("Todo id is required"));
    }

    let current = db.fetch(&id).await.map_err(|e| {
        tracing::error!(error = %e, todo_id = %id, "status lookup failed");
        ApiError::Store("Failed to query todos")
    })?;

    let new_status = !current.status;
    db.set_status(&id, new_status).await.map_err(|e| {
        tracing::error!(error = %e, todo_id = %id, "status update failed");
        ApiError::Store("Failed to update todo")
    })?;

    let todo = Todo {
        status: new_status,
        ..current
    };
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn delete_todo(
    State(db): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if id.is_empty() {
        return Err(ApiError::BadRequest("Todo id is required"));
    }

    db.exists(&id).await.map_err(|e| {
        tracing::error!(error = %e, todo_id = %id, "delete lookup failed");
        ApiError::NotFound
    })?;

    db.delete(&id).await.map_err(|e| {
        tracing::error!(error = %e, todo_id = %id, "delete failed");
        ApiError::Store("Failed to delete todo")
    })?;

    Ok(Json(serde_json::json!({ "msg": "successfully deleted todo" })))
}
