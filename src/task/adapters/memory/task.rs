//! In-memory task repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{CategoryId, ListId, NewTask, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks are held in insertion order and scanned linearly; identifiers
/// are assigned sequentially as one past the current maximum, so ids of
/// deleted tasks may be reused by later inserts, matching the mock
/// backend this adapter stands in for.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(tasks: &[Task]) -> TaskId {
    let max = tasks.iter().map(|task| task.id().value()).max();
    TaskId::new(max.unwrap_or(0) + 1)
}

fn poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.state.read().map_err(poisoned)?;
        Ok(tasks.clone())
    }

    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.state.read().map_err(poisoned)?;
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn get_by_list(&self, list_id: ListId) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.state.read().map_err(poisoned)?;
        Ok(tasks
            .iter()
            .filter(|task| task.list_id() == list_id)
            .cloned()
            .collect())
    }

    async fn get_by_category(&self, category_id: CategoryId) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.state.read().map_err(poisoned)?;
        Ok(tasks
            .iter()
            .filter(|task| task.category_id() == Some(category_id))
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        draft: NewTask,
        created_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task> {
        let mut tasks = self.state.write().map_err(poisoned)?;
        let task = draft.into_task(next_id(&tasks), created_at);
        tasks.push(task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(poisoned)?;
        let slot = tasks
            .iter_mut()
            .find(|stored| stored.id() == task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut tasks = self.state.write().map_err(poisoned)?;
        let position = tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        tasks.remove(position);
        Ok(())
    }
}
