//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod todo_repo;

pub use database::*;
pub use todo_repo::*;
