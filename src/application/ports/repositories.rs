//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{TodoDraft, TodoId, TodoItem};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Todo Repository Port
///
/// `update` / `delete` 返回同一连接上 `changes()` 报告的受影响行数，
/// 由调用方判断是否命中。
#[async_trait]
pub trait TodoRepositoryPort: Send + Sync {
    /// 建表（已存在时为空操作）
    async fn create_schema(&self) -> Result<(), RepositoryError>;

    /// 插入新条目，主键由存储分配
    async fn insert(&self, draft: &TodoDraft) -> Result<(), RepositoryError>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: TodoId) -> Result<Option<TodoItem>, RepositoryError>;

    /// 获取全部条目（存储自然顺序）
    async fn find_all(&self) -> Result<Vec<TodoItem>, RepositoryError>;

    /// 覆盖 title / done / created_on，返回受影响行数
    async fn update(&self, id: TodoId, draft: &TodoDraft) -> Result<u64, RepositoryError>;

    /// 删除条目，返回受影响行数
    async fn delete(&self, id: TodoId) -> Result<u64, RepositoryError>;
}
