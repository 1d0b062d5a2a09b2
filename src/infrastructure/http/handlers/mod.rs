//! HTTP Handlers

mod todo;

pub use todo::*;
