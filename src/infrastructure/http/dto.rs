//! Data Transfer Objects

use serde::Serialize;

use crate::domain::TodoItem;

/// 空对象响应 `{}`
#[derive(Debug, Serialize)]
pub struct Empty {}

/// 单条 Todo 响应，不存在时序列化为 `{}` 而不是 404
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TodoBody {
    Found(TodoItem),
    Missing(Empty),
}

impl From<Option<TodoItem>> for TodoBody {
    fn from(item: Option<TodoItem>) -> Self {
        match item {
            Some(item) => TodoBody::Found(item),
            None => TodoBody::Missing(Empty {}),
        }
    }
}
