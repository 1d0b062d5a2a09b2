//! HTTP Routes
//!
//! API Endpoints:
//! - /api/v1/todos       POST    创建 Todo（201）
//! - /api/v1/todos       GET     列出所有 Todo
//! - /api/v1/todos/{id}  GET     获取 Todo（不存在时返回 `{}`）
//! - /api/v1/todos/{id}  PUT     更新 Todo，返回更新后的值
//! - /api/v1/todos/{id}  DELETE  删除 Todo

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// API 版本前缀
pub const API_CONTEXT: &str = "/api/v1";

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest(API_CONTEXT, todo_routes())
}

/// Todo 路由
fn todo_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/todos",
            post(handlers::create_todo).get(handlers::list_todos),
        )
        .route(
            "/todos/:id",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
}
