use crossterm::style::Stylize;

use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::store::{AddOutcome, TaskStore};

/// Add a new task, then list the store
pub fn run(config: &Config, words: Vec<String>) -> Result<()> {
    let description = words.join(" ");

    let store = TaskStore::new(config);
    match store.add(&description)? {
        AddOutcome::Added(tasks) => display::print_tasks(&tasks, &config.display),
        AddOutcome::AtCapacity(max) => {
            let warning = format!("You already have {} tasks. Clear them first !", max);
            if display::should_use_colors() {
                eprintln!("{}", warning.red());
            } else {
                eprintln!("{}", warning);
            }
        }
    }

    Ok(())
}
