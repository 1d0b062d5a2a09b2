//! Application State

use std::sync::Arc;

use crate::application::TodoService;

/// 应用状态
///
/// 服务在进程启动时构造一次，随 HTTP 服务器一起释放。
pub struct AppState {
    pub todo_service: Arc<TodoService>,
}

impl AppState {
    pub fn new(todo_service: Arc<TodoService>) -> Self {
        Self { todo_service }
    }
}
