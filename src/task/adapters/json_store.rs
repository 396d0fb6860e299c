//! JSON file persistence for the task collection.
//!
//! Maps the repository's contents to and from a versioned JSON document.
//! The record types here are deliberately separate from the domain types:
//! loading goes through the validated domain constructors, so a hand-edited
//! store file cannot smuggle invariant-violating values into the domain.
//!
//! Load never fails: a missing, malformed, or invalid file degrades to an
//! empty task set with the counter at 1, and the problem is logged as a
//! warning. Save failures are likewise logged and reported as `false`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::domain::{PersistedTaskData, Task, TaskDomainError, TaskId, TaskTitle};

/// Schema version written to new store files.
///
/// Only files whose version carries the same major prefix load without a
/// compatibility warning.
pub const SCHEMA_VERSION: &str = "1.0";

/// Default store location, relative to the working directory.
pub const DEFAULT_FILE_NAME: &str = "tasks.json";

/// Versioned on-disk document.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default = "default_version")]
    version: String,
    #[serde(default = "default_next_id")]
    next_id: u64,
    #[serde(default)]
    tasks: Vec<TaskRecord>,
}

fn default_version() -> String {
    SCHEMA_VERSION.to_owned()
}

const fn default_next_id() -> u64 {
    1
}

/// Serialized form of a single task.
#[derive(Debug, Serialize, Deserialize)]
struct TaskRecord {
    id: u64,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    completed: bool,
    created_at: DateTime<Utc>,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            completed: task.completed(),
            created_at: task.created_at(),
        }
    }
}

impl TaskRecord {
    /// Rebuilds a domain task, re-validating the title invariants.
    fn into_task(self) -> Result<Task, TaskDomainError> {
        let title = TaskTitle::new(self.title)?;
        Ok(Task::from_persisted(PersistedTaskData {
            id: TaskId::new(self.id),
            title,
            description: self.description,
            completed: self.completed,
            created_at: self.created_at,
        }))
    }
}

/// Why a store file could not be used.
#[derive(Debug, Error)]
enum StoreError {
    /// The file is not a well-formed store document.
    #[error("malformed store file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A task record violates a domain invariant.
    #[error("invalid task record: {0}")]
    InvalidRecord(#[from] TaskDomainError),
}

/// Tasks and identifier counter recovered from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedState {
    /// Tasks recovered from the store file, in file order.
    pub tasks: Vec<Task>,
    /// Counter value safe against identifier collisions with loaded tasks.
    pub next_id: TaskId,
}

impl LoadedState {
    fn empty() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::new(1),
        }
    }
}

/// JSON file store for the task collection.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the default relative location.
    #[must_use]
    pub fn at_default_path() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads tasks and the identifier counter from disk.
    ///
    /// A missing file yields an empty state. A file that cannot be read or
    /// parsed, or whose records violate domain invariants, is logged as a
    /// warning and degrades to the same empty state with the counter at 1.
    #[must_use]
    pub fn load(&self) -> LoadedState {
        if !self.path.exists() {
            return LoadedState::empty();
        }
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!("could not read {}: {err}", self.path.display());
                return LoadedState::empty();
            }
        };
        match parse_store(&contents) {
            Ok(state) => state,
            Err(err) => {
                warn!("could not load tasks from {}: {err}", self.path.display());
                LoadedState::empty()
            }
        }
    }

    /// Writes the full task list and counter, overwriting the file.
    ///
    /// Returns whether the write succeeded; failures are logged as warnings
    /// and never propagate to the caller.
    pub fn save(&self, tasks: &[Task], next_id: TaskId) -> bool {
        let file = StoreFile {
            version: SCHEMA_VERSION.to_owned(),
            next_id: next_id.value(),
            tasks: tasks.iter().map(TaskRecord::from).collect(),
        };
        let rendered = match serde_json::to_string_pretty(&file) {
            Ok(rendered) => rendered,
            Err(err) => {
                warn!("could not serialize tasks: {err}");
                return false;
            }
        };
        if let Err(err) = fs::write(&self.path, rendered) {
            warn!("could not save tasks to {}: {err}", self.path.display());
            return false;
        }
        true
    }
}

/// Parses a store document and computes a collision-safe counter.
fn parse_store(contents: &str) -> Result<LoadedState, StoreError> {
    let file: StoreFile = serde_json::from_str(contents)?;
    if !file.version.starts_with("1.") {
        warn!(
            "unknown schema version {}, attempting to load anyway",
            file.version
        );
    }
    let tasks = file
        .tasks
        .into_iter()
        .map(TaskRecord::into_task)
        .collect::<Result<Vec<_>, _>>()?;
    let highest = tasks.iter().map(|task| task.id().value()).max();
    let next_id = highest.map_or(file.next_id, |max_id| file.next_id.max(max_id + 1));
    Ok(LoadedState {
        tasks,
        next_id: TaskId::new(next_id),
    })
}
