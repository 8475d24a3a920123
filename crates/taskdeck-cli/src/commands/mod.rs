pub mod category;
pub mod task;

use rusqlite::Connection;
use std::path::Path;

/// Open the database, configure it, and bring the schema up to date
pub fn open_database(path: &Path) -> Result<Connection, Box<dyn std::error::Error>> {
    let mut conn = taskdeck_store::db::open(path)?;
    taskdeck_store::db::configure(&conn)?;
    taskdeck_store::migrations::apply_migrations(&mut conn)?;
    Ok(conn)
}
