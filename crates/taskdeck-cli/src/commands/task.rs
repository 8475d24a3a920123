//! Task commands
//!
//! Usage: taskdeck task <add|list|show> [...]

use clap::{Args, Subcommand};
use std::path::Path;
use taskdeck_core::model::Task;
use taskdeck_store::repo::TaskRepo;

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommand,
}

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Create a task in a category
    Add(AddArgs),
    /// List all tasks
    List,
    /// Show a single task
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// What needs doing
    pub description: String,

    /// Id of the owning category
    #[arg(long)]
    pub category: i64,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Id of the task to show
    pub id: i64,
}

/// Execute task command
pub fn execute(args: TaskArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let conn = super::open_database(db)?;

    match args.command {
        TaskCommand::Add(add_args) => {
            let mut task = Task::new(add_args.description, add_args.category);
            TaskRepo::save(&conn, &mut task)?;
            println!("Created task {} ({})", task.id, task.description);
        }
        TaskCommand::List => {
            for task in TaskRepo::all(&conn)? {
                let marker = if task.completed { "x" } else { " " };
                println!("[{}] {}\t{}\t(category {})", marker, task.id, task.description, task.category_id);
            }
        }
        TaskCommand::Show(show_args) => {
            let task = TaskRepo::find(&conn, show_args.id)?
                .ok_or_else(|| format!("no task with id {}", show_args.id))?;
            let marker = if task.completed { "x" } else { " " };
            println!(
                "[{}] {}\t{}\t(category {}, created {})",
                marker,
                task.id,
                task.description,
                task.category_id,
                task.created_at.to_rfc3339()
            );
        }
    }

    Ok(())
}
