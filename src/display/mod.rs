//! Terminal display module
//!
//! Renders the task list with age coloring and automatic TTY detection.

mod formatter;
mod terminal;

pub use formatter::print_tasks;
pub use terminal::should_use_colors;
