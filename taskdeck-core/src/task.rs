//! Task data model.
//!
//! Defines the [`Task`] entity, its [`TaskId`] identifier, and the
//! [`IdGenerator`] that hands out fresh ids. Ids come from an explicit
//! monotonic counter rather than a wall clock, so two tasks created in
//! the same millisecond can never collide. The generator is seeded above
//! the highest persisted id at load time.

use serde::{Deserialize, Serialize};

/// Maximum allowed task text length in characters.
pub const MAX_TASK_TEXT_LENGTH: usize = 256;

/// Unique identifier for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a `TaskId` from a raw integer.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user-entered list item with completion status.
///
/// The serialized form uses camelCase field names so the durable slot
/// reads as `{"id": 1, "text": "...", "completed": false,
/// "createdAt": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier, monotonic within the collection.
    pub id: TaskId,
    /// Task text. Non-empty after trimming; enforced at creation and
    /// edit time, never at rest.
    pub text: String,
    /// Whether the task has been completed.
    pub completed: bool,
    /// RFC 3339 timestamp set once at creation, never mutated.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Task {
    /// Creates a new pending task with the current time as `created_at`.
    #[must_use]
    pub fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Monotonic counter for fresh task ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Creates a generator starting at id 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Creates a generator seeded one above the highest id in `tasks`.
    #[must_use]
    pub fn seeded_above(tasks: &[Task]) -> Self {
        let max = tasks.iter().map(|t| t.id.as_raw()).max().unwrap_or(0);
        Self {
            next: max.saturating_add(1),
        }
    }

    /// Returns a fresh id and advances the counter.
    pub const fn next_id(&mut self) -> TaskId {
        let id = TaskId::from_raw(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
