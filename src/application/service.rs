//! Todo Service - 持久化与业务规则
//!
//! 构造时同步建表，建表失败则服务不可用。
//! 所有操作返回携带操作名与 id 的 `ApplicationError`，
//! 失败日志由 HTTP 层（`ApiError`）统一记录并转换为 500。

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::TodoRepositoryPort;
use crate::domain::{TodoDraft, TodoId, TodoItem};

/// Todo Service
pub struct TodoService {
    repo: Arc<dyn TodoRepositoryPort>,
}

impl TodoService {
    /// 创建服务并确保表结构存在
    pub async fn new(repo: Arc<dyn TodoRepositoryPort>) -> Result<Self, ApplicationError> {
        if let Err(e) = repo.create_schema().await {
            tracing::error!(error = %e, "Failed to create schema at startup");
            return Err(ApplicationError::SchemaCreation(e));
        }

        Ok(Self { repo })
    }

    /// 获取全部 Todo
    pub async fn find_all(&self) -> Result<Vec<TodoItem>, ApplicationError> {
        const OP: &str = "TodoService.find_all";

        self.repo
            .find_all()
            .await
            .map_err(|e| ApplicationError::repository(OP, e))
    }

    /// 根据 ID 查找，不存在时返回 `None`
    pub async fn find(&self, id: &str) -> Result<Option<TodoItem>, ApplicationError> {
        const OP: &str = "TodoService.find";

        let todo_id = parse_id(OP, id)?;
        self.repo
            .find_by_id(todo_id)
            .await
            .map_err(|e| ApplicationError::repository(OP, e))
    }

    /// 创建新 Todo，请求体中的 id 被忽略
    pub async fn create_new_todo(&self, body: &[u8]) -> Result<(), ApplicationError> {
        const OP: &str = "TodoService.create_new_todo";

        let draft = parse_body(OP, body)?;
        self.repo
            .insert(&draft)
            .await
            .map_err(|e| ApplicationError::repository(OP, e))?;

        tracing::debug!(title = %draft.title, "Todo created");
        Ok(())
    }

    /// 覆盖指定 Todo 的全部字段，并返回写入后重新读取的值
    ///
    /// 目标行由路径 `id` 决定，请求体中的 id 不参与定位。
    pub async fn update(
        &self,
        id: &str,
        body: &[u8],
    ) -> Result<Option<TodoItem>, ApplicationError> {
        const OP: &str = "TodoService.update";

        let draft = parse_body(OP, body)?;
        let todo_id = parse_id(OP, id)?;

        let changed = self
            .repo
            .update(todo_id, &draft)
            .await
            .map_err(|e| ApplicationError::repository(OP, e))?;
        ensure_single_row(OP, todo_id, changed)?;

        tracing::debug!(id = todo_id, "Todo updated");
        self.find(id).await
    }

    /// 删除指定 Todo
    pub async fn delete(&self, id: &str) -> Result<(), ApplicationError> {
        const OP: &str = "TodoService.delete";

        let todo_id = parse_id(OP, id)?;
        let changed = self
            .repo
            .delete(todo_id)
            .await
            .map_err(|e| ApplicationError::repository(OP, e))?;
        ensure_single_row(OP, todo_id, changed)?;

        tracing::debug!(id = todo_id, "Todo deleted");
        Ok(())
    }
}

fn parse_id(operation: &'static str, id: &str) -> Result<TodoId, ApplicationError> {
    id.parse::<TodoId>().map_err(|source| ApplicationError::InvalidId {
        operation,
        id: id.to_string(),
        source,
    })
}

fn parse_body(operation: &'static str, body: &[u8]) -> Result<TodoDraft, ApplicationError> {
    TodoDraft::from_json(body).map_err(|e| ApplicationError::malformed_body(operation, e))
}

fn ensure_single_row(
    operation: &'static str,
    id: TodoId,
    changed: u64,
) -> Result<(), ApplicationError> {
    if changed != 1 {
        return Err(ApplicationError::NoRowsAffected { operation, id });
    }
    Ok(())
}
