use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Seconds constant used for both defaults: 2 days, and the capacity ceiling
/// inherited from existing stores.
const TWO_DAYS_SECS: u64 = 3600 * 24 * 2;

/// Task planner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON store file
    pub store_file: PathBuf,

    /// Store limits
    #[serde(default)]
    pub limits: Limits,

    /// Display settings
    #[serde(default)]
    pub display: Display,
}

/// Limits for the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    /// Soft ceiling on the number of stored tasks; an add past this count is
    /// refused with a warning instead of appending
    pub max_tasks: usize,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Display {
    /// Threshold after which a task's age is shown in red
    pub stale_after: u64,
}

impl Config {
    /// Default config rooted at the given home directory
    pub fn with_home(home: &std::path::Path) -> Self {
        Self {
            store_file: home.join(".task-planner"),
            limits: Limits::default(),
            display: Display::default(),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_tasks: TWO_DAYS_SECS as usize,
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self {
            stale_after: TWO_DAYS_SECS,
        }
    }
}
