//! Application Ports - 出站端口定义

mod repositories;

pub use repositories::{RepositoryError, TodoRepositoryPort};
