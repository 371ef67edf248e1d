//! SQLite persistence layer.

pub mod history;
pub mod pool;
