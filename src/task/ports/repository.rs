//! Repository port for task persistence and lookup.

use crate::task::domain::{CategoryId, ListId, NewTask, Task, TaskId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Collections come back in insertion order; the view engines rely on
/// that order being stable across calls.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task.
    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks belonging to the given list.
    async fn get_by_list(&self, list_id: ListId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks referencing the given category.
    async fn get_by_category(&self, category_id: CategoryId) -> TaskRepositoryResult<Vec<Task>>;

    /// Stores a new task, assigning its identifier.
    ///
    /// The caller supplies the creation instant so adapters stay
    /// clock-free.
    async fn create(&self, draft: NewTask, created_at: DateTime<Utc>)
    -> TaskRepositoryResult<Task>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
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
