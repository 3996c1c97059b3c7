//! Persistence adapter for the task collection.
//!
//! The durable slot is a single JSON file holding the full collection;
//! every save overwrites it wholesale. [`TaskStorage`] is the seam that
//! lets the store run against [`JsonStorage`] in production and
//! [`MemoryStorage`] in tests.

use std::path::{Path, PathBuf};

use crate::task::Task;

/// Errors that can occur reading or writing the durable slot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to read or write the data file.
    #[error("failed to access data file {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to serialize the task collection.
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Storage backend for the task collection.
///
/// `load` returns the persisted collection (empty if the slot is
/// absent); `save` overwrites the slot with the full collection.
pub trait TaskStorage {
    /// Reads the durable slot.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on I/O failure other than a missing slot.
    fn load(&self) -> Result<Vec<Task>, StorageError>;

    /// Serializes `tasks` and overwrites the durable slot.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on serialization or I/O failure.
    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// File-backed storage: one JSON array per data file.
///
/// A malformed file is treated as recoverable: `load` logs a warning
/// and returns an empty collection, and the next save overwrites the
/// corrupt payload. A missing file is simply an empty collection.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Creates a storage backend rooted at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStorage for JsonStorage {
    fn load(&self) -> Result<Vec<Task>, StorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        match serde_json::from_str(&contents) {
            Ok(tasks) => Ok(tasks),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "data file is malformed, starting with an empty task list"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(tasks)?;
        std::fs::write(&self.path, json).map_err(|e| StorageError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// In-memory storage for isolated unit tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    tasks: Vec<Task>,
}

impl MemoryStorage {
    /// Creates an empty in-memory slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-populated with `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// The tasks currently held in the slot.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

impl TaskStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Task>, StorageError> {
        Ok(self.tasks.clone())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        self.tasks = tasks.to_vec();
        Ok(())
    }
}
