//! Task store module
//!
//! Whole-file JSON persistence for the task list: load, save, add,
//! remove-by-display-index, pop. Each operation performs at most one load and
//! one save. Writes overwrite the full file and are not atomic; concurrent
//! invocations against the same file are last-writer-wins.

use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Result, TaskError};
use crate::models::{sort_newest_first, Task};

/// Result of an add attempt
#[derive(Debug)]
pub enum AddOutcome {
    /// Task appended and saved; carries the refreshed sorted list
    Added(Vec<Task>),
    /// Store already holds more than the configured maximum; nothing changed
    AtCapacity(usize),
}

/// File-backed task store
pub struct TaskStore {
    path: PathBuf,
    max_tasks: usize,
}

impl TaskStore {
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.store_file.clone(),
            max_tasks: config.limits.max_tasks,
        }
    }

    /// Load all tasks, sorted newest first.
    ///
    /// A missing file is created empty and yields an empty list. Empty file
    /// content also yields an empty list, without a parse attempt.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            fs::File::create(&self.path)?;
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.is_empty() {
            return Ok(Vec::new());
        }

        let mut tasks: Vec<Task> = serde_json::from_str(&content)?;
        sort_newest_first(&mut tasks);
        Ok(tasks)
    }

    /// Serialize the full list as JSON, overwriting the store file
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string(tasks)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Append a new task with a fresh UUID and the current timestamp.
    ///
    /// Refuses the add without mutating anything once the store holds more
    /// than `max_tasks` entries.
    pub fn add(&self, description: &str) -> Result<AddOutcome> {
        let mut tasks = self.load()?;

        if tasks.len() > self.max_tasks {
            return Ok(AddOutcome::AtCapacity(self.max_tasks));
        }

        tasks.push(Task::new(description));
        self.save(&tasks)?;

        sort_newest_first(&mut tasks);
        Ok(AddOutcome::Added(tasks))
    }

    /// Remove the task at the given display index (newest-first order) and
    /// return the refreshed sorted list
    pub fn remove_at(&self, index: usize) -> Result<Vec<Task>> {
        let mut tasks = self.load()?;

        if index >= tasks.len() {
            return Err(TaskError::IndexOutOfBounds {
                index,
                len: tasks.len(),
            });
        }

        tasks.remove(index);
        self.save(&tasks)?;
        Ok(tasks)
    }

    /// Remove the most recently created task
    pub fn pop(&self) -> Result<Vec<Task>> {
        self.remove_at(0)
    }
}
