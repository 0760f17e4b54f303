use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::store::TaskStore;

/// List all tasks, newest first
pub fn run(config: &Config) -> Result<()> {
    let store = TaskStore::new(config);
    let tasks = store.load()?;
    display::print_tasks(&tasks, &config.display);
    Ok(())
}
