//! Application services for task orchestration.

mod manager;

pub use manager::{TaskService, TaskServiceError, TaskServiceResult};
