//! In-memory task repository adapter.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Each instance owns its own map and identifier counter; separate instances
/// never interfere with each other. The counter starts at 1 and only moves
/// forward, so identifiers freed by deletion are never reused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    next_id: u64,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            tasks: HashMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository with the counter at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn add(&self, task: Task) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let assigned = TaskId::new(state.next_id);
        let stored = task.with_id(assigned);
        state.tasks.insert(assigned, stored.clone());
        state.next_id += 1;
        Ok(stored)
    }

    fn get(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        // Map iteration order is arbitrary; the port promises ascending ids.
        tasks.sort_by_key(Task::id);
        Ok(tasks)
    }

    fn update(&self, task: Task) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.remove(&id).is_some())
    }

    fn next_id(&self) -> TaskRepositoryResult<TaskId> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(TaskId::new(state.next_id))
    }

    fn set_next_id(&self, next_id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.next_id = next_id.value();
        Ok(())
    }

    fn load(&self, tasks: Vec<Task>) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.tasks.clear();
        for task in tasks {
            state.tasks.insert(task.id(), task);
        }
        Ok(())
    }
}
