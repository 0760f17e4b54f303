mod cli;
mod config;
mod display;
mod error;
mod models;
mod store;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

#[derive(Parser)]
#[command(name = "tp")]
#[command(about = "Personal task planner backed by a JSON file", long_about = None)]
struct Cli {
    /// Path to the store file (defaults to ~/.task-planner)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task description (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Remove the most recently created task
    Pop,
    /// Remove a task by its display index (as shown by ls)
    Rm {
        /// Display index of the task to remove
        index: usize,
    },
    /// List tasks, newest first
    Ls,
}

/// Resolve configuration, applying the --file override
fn resolve_config(file: Option<PathBuf>) -> Result<Config> {
    let mut config = config::resolve()?;
    if let Some(path) = file {
        config.store_file = path;
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    let result = resolve_config(cli.file).and_then(|config| match cli.command {
        Commands::Add { words } => cli::add::run(&config, words),
        Commands::Pop => cli::rm::pop(&config),
        Commands::Rm { index } => cli::rm::run(&config, index),
        Commands::Ls => cli::ls::run(&config),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
