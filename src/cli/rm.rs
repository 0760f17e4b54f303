use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::store::TaskStore;

/// Remove the task at the given display index, then list the store
pub fn run(config: &Config, index: usize) -> Result<()> {
    let store = TaskStore::new(config);
    let tasks = store.remove_at(index)?;
    display::print_tasks(&tasks, &config.display);
    Ok(())
}

/// Remove the most recently created task, then list the store
pub fn pop(config: &Config) -> Result<()> {
    let store = TaskStore::new(config);
    let tasks = store.pop()?;
    display::print_tasks(&tasks, &config.display);
    Ok(())
}
