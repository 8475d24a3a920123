//! Repository layer
//!
//! One repository per entity type, each a set of associated functions over an
//! injected `&Connection`. Row-to-entity mapping is an explicit per-entity
//! function; no reflection, no hidden I/O on the entities themselves.

mod category_repo;
mod task_repo;

pub use category_repo::CategoryRepo;
pub use task_repo::TaskRepo;

use crate::errors::Result;
use rusqlite::Connection;

/// Delete every task and category
///
/// Maintenance operation used to reset a database (and by tests between
/// scenarios). Tasks go first so the foreign key to categories is never
/// violated mid-clear.
pub fn clear_all(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM tasks", [])?;
    conn.execute("DELETE FROM categories", [])?;
    Ok(())
}
