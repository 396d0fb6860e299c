//! Repository port for task storage, lookup, and identifier assignment.

use crate::task::domain::{Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
///
/// Implementations own the authoritative task collection and the identifier
/// counter. Absence is non-exceptional wherever a caller can reasonably
/// continue: [`get`](Self::get) returns `None` and [`delete`](Self::delete)
/// returns `false` for unknown identifiers. Callers wanting strict semantics
/// layer them on top, as the service does.
pub trait TaskRepository: Send + Sync {
    /// Stores a draft task under the next unique identifier and returns the
    /// stored value, identifier included. Advances the counter.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// is unavailable.
    fn add(&self, task: Task) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// is unavailable.
    fn get(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every stored task ordered by ascending identifier.
    ///
    /// The returned sequence is a consistent snapshot at call time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// is unavailable.
    fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Replaces the stored entry whose identifier equals `task.id()` and
    /// returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no entry with that
    /// identifier exists.
    fn update(&self, task: Task) -> TaskRepositoryResult<Task>;

    /// Removes the entry for `id`, reporting whether one existed and was
    /// removed. Absence is not an error at this layer.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// is unavailable.
    fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Returns the identifier the next [`add`](Self::add) would assign,
    /// without mutating state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// is unavailable.
    fn next_id(&self) -> TaskRepositoryResult<TaskId>;

    /// Overrides the identifier counter.
    ///
    /// Intended for restoring persisted state only. Callers must supply a
    /// value no smaller than the highest stored identifier plus one; the
    /// repository does not guard against shrinking the counter.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// is unavailable.
    fn set_next_id(&self, next_id: TaskId) -> TaskRepositoryResult<()>;

    /// Clears the store and seeds it from persisted tasks.
    ///
    /// Intended for the persistence boundary, not ordinary runtime callers.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store
    /// is unavailable.
    fn load(&self, tasks: Vec<Task>) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("Task {0} not found")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
