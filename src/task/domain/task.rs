//! Task entity and persisted-state reconstruction.

use super::{TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A single unit of work tracked by the system.
///
/// Tasks are immutable values. Every change produces a new value carrying
/// the same identifier and creation timestamp; the repository replaces the
/// stored entry wholesale rather than mutating it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    completed: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted validated title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a draft task awaiting a repository-assigned identifier.
    ///
    /// The draft carries [`TaskId::PLACEHOLDER`], an unset completion flag,
    /// and a creation timestamp taken from the supplied clock.
    #[must_use]
    pub fn new(title: TaskTitle, description: Option<String>, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::PLACEHOLDER,
            title,
            description,
            completed: false,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            completed: data.completed,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns a copy of this task carrying the given identifier.
    ///
    /// Used by repositories when inserting a draft under a freshly assigned
    /// identifier.
    #[must_use]
    pub fn with_id(self, id: TaskId) -> Self {
        Self { id, ..self }
    }

    /// Returns a copy of this task with the completion flag set as given.
    #[must_use]
    pub fn with_completed(self, completed: bool) -> Self {
        Self { completed, ..self }
    }

    /// Returns a copy of this task carrying the given title.
    #[must_use]
    pub fn with_title(self, title: TaskTitle) -> Self {
        Self { title, ..self }
    }
}
