//! Todo HTTP Handlers
//!
//! 请求体以原始字节交给服务层解析，解析失败与数据库错误同样返回 500。

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::domain::TodoItem;
use crate::infrastructure::http::dto::{Empty, TodoBody};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建 Todo
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Empty>), ApiError> {
    state
        .todo_service
        .create_new_todo(&body)
        .await
        .map_err(|e| ApiError::new("Failed to create new entry", e))?;

    Ok((StatusCode::CREATED, Json(Empty {})))
}

/// 获取单个 Todo
pub async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TodoBody>, ApiError> {
    let item = state
        .todo_service
        .find(&id)
        .await
        .map_err(|e| ApiError::new(format!("Failed to find object with id: {}", id), e))?;

    Ok(Json(TodoBody::from(item)))
}

/// 获取 Todo 列表
pub async fn list_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TodoItem>>, ApiError> {
    let items = state
        .todo_service
        .find_all()
        .await
        .map_err(|e| ApiError::new("Failed to fetch the list of todos", e))?;

    Ok(Json(items))
}

/// 更新 Todo
pub async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<TodoBody>, ApiError> {
    let item = state
        .todo_service
        .update(&id, &body)
        .await
        .map_err(|e| ApiError::new(format!("Failed to update todo with id: {}", id), e))?;

    Ok(Json(TodoBody::from(item)))
}

/// 删除 Todo
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Empty>, ApiError> {
    state
        .todo_service
        .delete(&id)
        .await
        .map_err(|e| ApiError::new(format!("Failed to delete todo with id: {}", id), e))?;

    Ok(Json(Empty {}))
}
