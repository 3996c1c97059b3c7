//! Pure status projections for the task list.
//!
//! These functions derive display strings and affordance state from a
//! task slice without touching any display surface, so they are
//! testable in isolation and the status bar stays a thin renderer.

use crate::task::Task;

/// Number of tasks not yet completed.
#[must_use]
pub fn pending_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}

/// Human-readable task counter for the status bar.
///
/// "No tasks" when the list is empty, "All tasks completed!" when
/// nothing is pending, otherwise "`<pending>` of `<total>` tasks
/// remaining".
#[must_use]
pub fn summary_line(tasks: &[Task]) -> String {
    let total = tasks.len();
    let pending = pending_count(tasks);
    if total == 0 {
        "No tasks".to_string()
    } else if pending == 0 {
        "All tasks completed!".to_string()
    } else {
        format!("{pending} of {total} tasks remaining")
    }
}

/// Whether the bulk clear-completed affordance should be enabled.
#[must_use]
pub fn can_clear_completed(tasks: &[Task]) -> bool {
    tasks.iter().any(|t| t.completed)
}
