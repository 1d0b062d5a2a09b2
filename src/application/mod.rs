//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 持久化端口定义
//! - service: TodoService
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod service;

pub use error::ApplicationError;
pub use ports::{RepositoryError, TodoRepositoryPort};
pub use service::TodoService;
