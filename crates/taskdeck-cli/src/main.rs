//! Taskdeck CLI
//!
//! Command-line interface for the to-do tracker

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "taskdeck")]
#[command(about = "Taskdeck - Categorized to-do tracking", long_about = None)]
struct Cli {
    /// Path to the SQLite database
    #[arg(long, global = true, default_value = "taskdeck.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Category operations
    Category(commands::category::CategoryArgs),
    /// Task operations
    Task(commands::task::TaskArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Category(args) => commands::category::execute(args, &cli.db),
        Commands::Task(args) => commands::task::execute(args, &cli.db),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
