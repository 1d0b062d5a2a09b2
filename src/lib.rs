//! Todo App - Todo 条目的 HTTP/JSON CRUD 服务
//!
//! 领域层 (domain/):
//! - TodoItem / TodoDraft
//!
//! 应用层 (application/):
//! - Ports: TodoRepositoryPort
//! - TodoService: 建表、五个数据操作、受影响行数校验
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: /api/v1/todos RESTful API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
