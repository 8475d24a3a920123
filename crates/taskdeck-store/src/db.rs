//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use crate::errors::Result;
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Ok(Connection::open(path)?)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Ok(Connection::open_in_memory()?)
}

/// Configure a connection with the settings the repositories rely on
pub fn configure(conn: &Connection) -> Result<()> {
    // Enforce the tasks -> categories foreign key
    conn.execute("PRAGMA foreign_keys = ON", [])?;

    // WAL journal mode; this PRAGMA reports the resulting mode as a row
    let _mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;

    Ok(())
}
