//! `TaskDeck` — task list model, store, and persistence.
//!
//! This crate holds everything that does not touch a terminal: the
//! [`Task`] data model, the [`TaskStore`] that owns the collection and
//! the active [`Filter`], the [`TaskStorage`] persistence seam with its
//! JSON-file and in-memory backends, and the pure summary projections
//! used by the status bar.

pub mod filter;
pub mod storage;
pub mod store;
pub mod summary;
pub mod task;

pub use filter::Filter;
pub use storage::{JsonStorage, MemoryStorage, StorageError, TaskStorage};
pub use store::{StoreError, TaskStore};
pub use task::{IdGenerator, MAX_TASK_TEXT_LENGTH, Task, TaskId};
