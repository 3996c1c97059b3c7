//! The task store: owns the collection and the active filter.
//!
//! Every mutating operation validates its input, applies the change,
//! and writes the full collection through to the storage backend
//! before returning. The store is the only writer of persisted state;
//! callers inject the backend at construction, so nothing here touches
//! ambient globals.

use crate::filter::Filter;
use crate::storage::{StorageError, TaskStorage};
use crate::task::{IdGenerator, MAX_TASK_TEXT_LENGTH, Task, TaskId};

/// Errors that can occur during store mutations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Task text cannot be empty after trimming.
    #[error("task text cannot be empty")]
    TextEmpty,

    /// Task text exceeds the configured maximum length.
    #[error("task text too long (max {0} characters)")]
    TextTooLong(usize),

    /// Write-through to the storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Owns the task collection, the active filter, and the id generator.
///
/// Insertion order is preserved and is the display order. Ids are
/// unique at all times: they come from a monotonic counter seeded
/// above the highest persisted id.
pub struct TaskStore<S> {
    tasks: Vec<Task>,
    filter: Filter,
    ids: IdGenerator,
    storage: S,
    max_text_len: usize,
}

impl<S: TaskStorage> TaskStore<S> {
    /// Loads the persisted collection from `storage` and builds a store
    /// around it. The filter always starts on [`Filter::All`].
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails to read the slot.
    pub fn load(storage: S) -> Result<Self, StorageError> {
        let tasks = storage.load()?;
        let ids = IdGenerator::seeded_above(&tasks);
        tracing::debug!(count = tasks.len(), "loaded task collection");
        Ok(Self {
            tasks,
            filter: Filter::All,
            ids,
            storage,
            max_text_len: MAX_TASK_TEXT_LENGTH,
        })
    }

    /// Overrides the maximum task text length.
    #[must_use]
    pub const fn with_max_text_len(mut self, max: usize) -> Self {
        self.max_text_len = max;
        self
    }

    /// Adds a new pending task to the end of the collection.
    ///
    /// The text is trimmed before storing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TextEmpty`] for whitespace-only text,
    /// [`StoreError::TextTooLong`] for over-length text, or a storage
    /// error if the write-through fails.
    pub fn add(&mut self, text: &str) -> Result<TaskId, StoreError> {
        let text = self.validate(text)?;
        let task = Task::new(self.ids.next_id(), text.to_string());
        let id = task.id;
        self.tasks.push(task);
        self.storage.save(&self.tasks)?;
        tracing::debug!(%id, "added task");
        Ok(id)
    }

    /// Removes the task with the given id.
    ///
    /// Returns false without saving if no task matches.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write-through fails.
    pub fn delete(&mut self, id: TaskId) -> Result<bool, StorageError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.storage.save(&self.tasks)?;
        tracing::debug!(%id, "deleted task");
        Ok(true)
    }

    /// Flips the `completed` flag of the task with the given id.
    ///
    /// Returns false without saving if no task matches.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write-through fails.
    pub fn toggle_completed(&mut self, id: TaskId) -> Result<bool, StorageError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.completed = !task.completed;
        self.storage.save(&self.tasks)?;
        Ok(true)
    }

    /// Replaces the text of the task with the given id.
    ///
    /// The committed value is trimmed, consistent with [`add`](Self::add).
    /// Returns false without saving if no task matches.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TextEmpty`] or [`StoreError::TextTooLong`]
    /// with no mutation if the new text is invalid, or a storage error
    /// if the write-through fails.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> Result<bool, StoreError> {
        let new_text = self.validate(new_text)?;
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.text = new_text.to_string();
        self.storage.save(&self.tasks)?;
        tracing::debug!(%id, "edited task");
        Ok(true)
    }

    /// Removes every completed task, returning how many were removed.
    ///
    /// Saves only when at least one task was removed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write-through fails.
    pub fn clear_completed(&mut self) -> Result<usize, StorageError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.storage.save(&self.tasks)?;
            tracing::debug!(removed, "cleared completed tasks");
        }
        Ok(removed)
    }

    /// Updates the active filter. Pure state change, nothing persisted.
    pub const fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// The active filter.
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// The full collection in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks matching the active filter, in collection order.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect()
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Trims `text` and checks the emptiness and length invariants.
    fn validate<'a>(&self, text: &'a str) -> Result<&'a str, StoreError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(StoreError::TextEmpty);
        }
        if trimmed.chars().count() > self.max_text_len {
            return Err(StoreError::TextTooLong(self.max_text_len));
        }
        Ok(trimmed)
    }
}
