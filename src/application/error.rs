//! 应用层错误定义
//!
//! Todo Service 唯一的错误类型，所有变体都携带原始原因

use std::num::ParseIntError;

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::TodoId;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 启动时建表失败
    #[error("Failed to create schema at startup: {0}")]
    SchemaCreation(#[source] RepositoryError),

    /// 数据库操作失败
    #[error("{operation}: failed to query database: {source}")]
    Repository {
        operation: &'static str,
        #[source]
        source: RepositoryError,
    },

    /// 路径中的 ID 不是整数
    #[error("{operation}: invalid id {id:?}: {source}")]
    InvalidId {
        operation: &'static str,
        id: String,
        #[source]
        source: ParseIntError,
    },

    /// 请求体无法解析
    #[error("{operation}: malformed request body: {source}")]
    MalformedBody {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// update / delete 没有命中任何行
    #[error("{operation}: operation did not change rows. Incorrect id(?): {id}")]
    NoRowsAffected { operation: &'static str, id: TodoId },
}

impl ApplicationError {
    pub fn repository(operation: &'static str, source: RepositoryError) -> Self {
        Self::Repository { operation, source }
    }

    pub fn malformed_body(operation: &'static str, source: serde_json::Error) -> Self {
        Self::MalformedBody { operation, source }
    }
}
