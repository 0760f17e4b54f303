//! Data models module
//!
//! Defines the Task domain model and its sorting helpers.

pub mod task;

pub use task::{sort_newest_first, Task};
