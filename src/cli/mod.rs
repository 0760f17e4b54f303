//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - add: Append a new task
//! - pop: Remove the most recently created task
//! - rm: Remove a task by display index
//! - ls: List tasks, newest first

pub mod add;
pub mod ls;
pub mod rm;
