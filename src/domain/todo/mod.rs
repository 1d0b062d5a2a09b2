//! Todo Context

mod entities;

pub use entities::{TodoDraft, TodoId, TodoItem};
