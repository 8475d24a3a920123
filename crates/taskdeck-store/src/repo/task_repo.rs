//! Task repository

use crate::errors::Result;
use rusqlite::{Connection, OptionalExtension, Row};
use taskdeck_core::model::Task;

/// SQLite repository for Task rows
pub struct TaskRepo;

impl TaskRepo {
    /// Insert this task and assign the store-generated id
    ///
    /// A foreign key to a non-existent category surfaces as a store error;
    /// it is not pre-validated here. Saving an already-saved task inserts a
    /// duplicate row and re-assigns `id`, same as CategoryRepo.
    pub fn save(conn: &Connection, task: &mut Task) -> Result<()> {
        conn.execute(
            "INSERT INTO tasks (description, category_id, completed, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                task.description,
                task.category_id,
                if task.completed { 1 } else { 0 },
                task.created_at.timestamp_millis(),
            ],
        )?;
        task.id = conn.last_insert_rowid();

        tracing::debug!(id = task.id, category_id = task.category_id, "task saved");

        Ok(())
    }

    /// Get a Task by id, or None if no row matches
    pub fn find(conn: &Connection, id: i64) -> Result<Option<Task>> {
        let result = conn
            .query_row(
                "SELECT id, description, category_id, completed, created_at
                 FROM tasks
                 WHERE id = ?1",
                [id],
                map_task,
            )
            .optional()?;

        Ok(result)
    }

    /// List all tasks, oldest first
    pub fn all(conn: &Connection) -> Result<Vec<Task>> {
        let mut stmt = conn.prepare(
            "SELECT id, description, category_id, completed, created_at
             FROM tasks
             ORDER BY id",
        )?;

        let tasks = stmt
            .query_map([], map_task)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(tasks)
    }
}

/// Map a tasks row to a Task
pub(crate) fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let id: i64 = row.get(0)?;
    let description: String = row.get(1)?;
    let category_id: i64 = row.get(2)?;
    let completed: i32 = row.get(3)?;
    let created_at_ms: i64 = row.get(4)?;

    let mut task = Task::new(description, category_id);
    task.id = id;
    task.completed = completed != 0;
    task.created_at =
        chrono::DateTime::from_timestamp_millis(created_at_ms).unwrap_or_else(chrono::Utc::now);

    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations;
    use crate::repo::CategoryRepo;
    use taskdeck_core::model::Category;

    fn setup_test_db() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        crate::db::configure(&conn).unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        conn
    }

    fn saved_category(conn: &Connection, name: &str) -> Category {
        let mut category = Category::new(name.to_string());
        CategoryRepo::save(conn, &mut category).unwrap();
        category
    }

    #[test]
    fn test_save_assigns_id() {
        let conn = setup_test_db();
        let category = saved_category(&conn, "Home");
        let mut task = Task::new("Mow the lawn".to_string(), category.id);

        TaskRepo::save(&conn, &mut task).unwrap();

        assert!(task.id > 0);
        assert!(task.is_saved());
    }

    #[test]
    fn test_save_and_find_round_trip() {
        let conn = setup_test_db();
        let category = saved_category(&conn, "Home");
        let mut task = Task::new("Mow the lawn".to_string(), category.id);
        TaskRepo::save(&conn, &mut task).unwrap();

        let found = TaskRepo::find(&conn, task.id)
            .unwrap()
            .expect("task should exist");

        assert_eq!(found.description, "Mow the lawn");
        assert_eq!(found.id, task.id);
        assert_eq!(found.category_id, category.id);
        assert!(!found.completed);
    }

    #[test]
    fn test_find_missing_is_none() {
        let conn = setup_test_db();

        let found = TaskRepo::find(&conn, 9999).unwrap();

        assert!(found.is_none());
    }

    #[test]
    fn test_save_preserves_completed_flag() {
        let conn = setup_test_db();
        let category = saved_category(&conn, "Home");
        let mut task = Task::new("Do the dishes".to_string(), category.id);
        task.completed = true;
        TaskRepo::save(&conn, &mut task).unwrap();

        let found = TaskRepo::find(&conn, task.id).unwrap().unwrap();

        assert!(found.completed);
    }

    #[test]
    fn test_save_rejects_missing_category() {
        let conn = setup_test_db();
        let mut task = Task::new("Mow the lawn".to_string(), 9999);

        let result = TaskRepo::save(&conn, &mut task);

        assert!(result.is_err());
        assert!(!task.is_saved());
    }
}
