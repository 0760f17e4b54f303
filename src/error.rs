use thiserror::Error;

/// Task planner error types
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No task at index {index} (store has {len} tasks)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for task planner operations
pub type Result<T> = std::result::Result<T, TaskError>;
