//! Domain Layer - 领域层
//!
//! 只有一个上下文: Todo

pub mod todo;

pub use todo::{TodoDraft, TodoId, TodoItem};
