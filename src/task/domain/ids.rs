//! Identifier and validated scalar types for the task domain.

use super::{ParseTaskIdError, TaskDomainError};
use std::fmt;

/// Unique identifier for a stored task.
///
/// Identifiers are assigned by the repository from a monotonically advancing
/// counter; the unsigned representation makes negative values
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    /// Identifier carried by draft tasks before the repository assigns one.
    pub const PLACEHOLDER: Self = Self(0);

    /// Creates a task identifier from a raw counter value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parses a task identifier from a raw command argument.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskIdError`] carrying the offending text when the
    /// value is not a base-ten integer.
    pub fn parse(value: &str) -> Result<Self, ParseTaskIdError> {
        value
            .trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ParseTaskIdError(value.to_owned()))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated task title, stored in trimmed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Maximum permitted title length in characters, counted after trimming.
    pub const MAX_LENGTH: usize = 200;

    /// Creates a validated title.
    ///
    /// The stored value is always the trimmed form of the input.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty or
    /// whitespace-only, or [`TaskDomainError::TitleTooLong`] when the trimmed
    /// value exceeds [`Self::MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        if normalized.chars().count() > Self::MAX_LENGTH {
            return Err(TaskDomainError::TitleTooLong {
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the title, returning the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
