//! Category repository
//!
//! Persists categories and answers the category -> tasks relationship query

use crate::errors::Result;
use crate::repo::task_repo;
use rusqlite::{Connection, OptionalExtension, Row};
use taskdeck_core::model::{Category, Task};

/// SQLite repository for Category rows
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert this category and assign the store-generated id
    ///
    /// Every call inserts a fresh row: saving an already-saved category
    /// inserts a duplicate and re-assigns `id`. There are no upsert
    /// semantics.
    pub fn save(conn: &Connection, category: &mut Category) -> Result<()> {
        conn.execute(
            "INSERT INTO categories (name) VALUES (?1)",
            rusqlite::params![category.name],
        )?;
        category.id = conn.last_insert_rowid();

        tracing::debug!(id = category.id, name = %category.name, "category saved");

        Ok(())
    }

    /// Get a Category by id, or None if no row matches
    pub fn find(conn: &Connection, id: i64) -> Result<Option<Category>> {
        let result = conn
            .query_row(
                "SELECT id, name FROM categories WHERE id = ?1",
                [id],
                map_category,
            )
            .optional()?;

        Ok(result)
    }

    /// List all categories, oldest first
    pub fn all(conn: &Connection) -> Result<Vec<Category>> {
        let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY id")?;

        let categories = stmt
            .query_map([], map_category)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    /// List the tasks belonging to this category, oldest first
    ///
    /// Always re-queries the store. Safe on an unsaved category: id 0
    /// matches no rows, so the result is empty.
    pub fn tasks(conn: &Connection, category: &Category) -> Result<Vec<Task>> {
        let mut stmt = conn.prepare(
            "SELECT id, description, category_id, completed, created_at
             FROM tasks
             WHERE category_id = ?1
             ORDER BY id",
        )?;

        let tasks = stmt
            .query_map([category.id], task_repo::map_task)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(tasks)
    }
}

/// Map a categories row to a Category
fn map_category(row: &Row<'_>) -> rusqlite::Result<Category> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;

    let mut category = Category::new(name);
    category.id = id;

    Ok(category)
}
