//! Taskdeck Core - Domain entities for the to-do tracker
//!
//! This crate provides the plain data entities persisted by taskdeck-store:
//! - Category: a named grouping that owns zero or more tasks
//! - Task: a single to-do entry belonging to one category
//!
//! Entities carry no store dependency; all I/O lives in the repository layer.

pub mod model;

// Re-export commonly used types
pub use model::{Category, Task};
