//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("Title cannot be empty")]
    EmptyTitle,

    /// The trimmed task title exceeds the maximum length.
    #[error("Title too long (max {max} characters)")]
    TitleTooLong {
        /// Maximum permitted title length in characters.
        max: usize,
    },
}

/// Error returned while parsing a task identifier from raw input.
///
/// Carries the unparsable value for diagnostics; the rendered message is the
/// one-line form shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("ID must be a number")]
pub struct ParseTaskIdError(pub String);
