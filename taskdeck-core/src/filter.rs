//! View filter for the task list.

use crate::task::Task;

/// The active subset criterion controlling which tasks are displayed.
///
/// Not persisted; a fresh session always starts on [`Filter::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Show every task.
    #[default]
    All,
    /// Show tasks that are not yet completed.
    Pending,
    /// Show completed tasks.
    Completed,
}

impl Filter {
    /// All filters, in display order for the filter tabs.
    pub const ALL: [Self; 3] = [Self::All, Self::Pending, Self::Completed];

    /// Returns true if the task belongs to this filter's subset.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
        }
    }

    /// Human-readable label for the filter tab.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
