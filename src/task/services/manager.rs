//! Service layer orchestrating task validation, lookup, and mutation.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;

use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};

/// Service-level errors for task operations.
///
/// This is the taxonomy callers of the core see: validation failures and
/// missing tasks are both recoverable, and the interaction loop renders each
/// as a one-line message before continuing.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The referenced task does not exist.
    #[error("Task {0} not found")]
    NotFound(TaskId),

    /// Repository infrastructure failure.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// The sole entry point for task mutations and the only component applying
/// business rules; repositories perform no validation beyond identifier
/// existence. The clock is injected so creation timestamps are deterministic
/// under test.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns a handle to the underlying repository.
    ///
    /// Intended for the persistence boundary, which needs the counter and
    /// bulk seeding operations the service does not expose.
    #[must_use]
    pub fn repository(&self) -> Arc<R> {
        Arc::clone(&self.repository)
    }

    /// Creates a new task from a raw title and optional description.
    ///
    /// The returned task carries its repository-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title is empty or
    /// exceeds [`TaskTitle::MAX_LENGTH`] characters after trimming, and
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub fn add_task(&self, title: &str, description: Option<String>) -> TaskServiceResult<Task> {
        let validated = TaskTitle::new(title)?;
        let draft = Task::new(validated, description, &*self.clock);
        Ok(self.repository.add(draft)?)
    }

    /// Returns every task ordered by ascending identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub fn list_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list_all()?)
    }

    /// Returns the task stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the identifier is
    /// unknown.
    pub fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .get(id)?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Marks the task as completed.
    ///
    /// Idempotent: completing an already-completed task succeeds and leaves
    /// it completed. All fields other than the completion flag are
    /// preserved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the identifier is
    /// unknown.
    pub fn complete_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        let task = self.get_task(id)?;
        Ok(self.repository.update(task.with_completed(true))?)
    }

    /// Flips the task's completion status.
    ///
    /// Two consecutive toggles restore the original status; all other
    /// fields are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the identifier is
    /// unknown.
    pub fn toggle_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        let task = self.get_task(id)?;
        let completed = task.completed();
        Ok(self.repository.update(task.with_completed(!completed))?)
    }

    /// Deletes the task stored under `id`.
    ///
    /// The repository port treats absence as non-exceptional; this layer
    /// deliberately tightens that contract into an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task was removed.
    pub fn delete_task(&self, id: TaskId) -> TaskServiceResult<bool> {
        if !self.repository.delete(id)? {
            return Err(TaskServiceError::NotFound(id));
        }
        Ok(true)
    }

    /// Replaces the task's title, keeping every other field.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the identifier is
    /// unknown, or [`TaskServiceError::Validation`] when the new title
    /// violates the title rules.
    pub fn update_task(&self, id: TaskId, new_title: &str) -> TaskServiceResult<Task> {
        let task = self.get_task(id)?;
        let validated = TaskTitle::new(new_title)?;
        Ok(self.repository.update(task.with_title(validated))?)
    }
}
