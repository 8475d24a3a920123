//! Category commands
//!
//! Usage: taskdeck category <add|list|show> [...]

use clap::{Args, Subcommand};
use std::path::Path;
use taskdeck_core::model::Category;
use taskdeck_store::repo::CategoryRepo;

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    pub command: CategoryCommand,
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// Create a category
    Add(AddArgs),
    /// List all categories
    List,
    /// Show a category and its tasks
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Name of the new category
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Id of the category to show
    pub id: i64,
}

/// Execute category command
pub fn execute(args: CategoryArgs, db: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let conn = super::open_database(db)?;

    match args.command {
        CategoryCommand::Add(add_args) => {
            let mut category = Category::new(add_args.name);
            CategoryRepo::save(&conn, &mut category)?;
            println!("Created category {} ({})", category.id, category.name);
        }
        CategoryCommand::List => {
            for category in CategoryRepo::all(&conn)? {
                println!("{}\t{}", category.id, category.name);
            }
        }
        CategoryCommand::Show(show_args) => {
            let category = CategoryRepo::find(&conn, show_args.id)?
                .ok_or_else(|| format!("no category with id {}", show_args.id))?;
            println!("{}\t{}", category.id, category.name);
            for task in CategoryRepo::tasks(&conn, &category)? {
                let marker = if task.completed { "x" } else { " " };
                println!("  [{}] {}\t{}", marker, task.id, task.description);
            }
        }
    }

    Ok(())
}
