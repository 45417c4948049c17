//! UI widgets for reusable components.

pub mod progress_bar;

pub use progress_bar::GoalProgressBar;
