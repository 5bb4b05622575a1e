//! Service layer for task creation, mutation, and queries.

use crate::task::{
    domain::{CategoryId, ListId, NewTask, Priority, Task, TaskChanges, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::views::schedule::{select_today, select_upcoming};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// Unset fields take their documented defaults: medium priority, the
/// default list, no description, no due date, no category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    priority: Option<Priority>,
    category_id: Option<CategoryId>,
    list_id: Option<ListId>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            priority: None,
            category_id: None,
            list_id: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the category reference.
    #[must_use]
    pub const fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets the owning list.
    #[must_use]
    pub const fn with_list(mut self, list_id: ListId) -> Self {
        self.list_id = Some(list_id);
        self
    }

    fn into_draft(self) -> Result<NewTask, TaskDomainError> {
        let mut draft = NewTask::new(self.title)?;
        if let Some(description) = self.description {
            draft = draft.with_description(description);
        }
        if let Some(due_date) = self.due_date {
            draft = draft.with_due_date(due_date);
        }
        if let Some(priority) = self.priority {
            draft = draft.with_priority(priority);
        }
        if let Some(category_id) = self.category_id {
            draft = draft.with_category(category_id);
        }
        if let Some(list_id) = self.list_id {
            draft = draft.with_list(list_id);
        }
        Ok(draft)
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Owns no task state: every operation reads through the repository
/// and returns fresh aggregates, so the presentation layer can refresh
/// its views by re-querying after each mutation.
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

    /// Creates a task, applying defaults for unset fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the title fails validation or
    /// the repository rejects persistence.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let draft = request.into_draft()?;
        let task = self.repository.create(draft, self.clock.utc()).await?;
        Ok(task)
    }

    /// Applies a patch to an existing task and persists the result.
    ///
    /// Completion changes in the patch maintain the completion
    /// timestamp invariant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the id
    /// does not resolve, or a domain error when the patch fails
    /// validation.
    pub async fn update(&self, id: TaskId, changes: TaskChanges) -> TaskServiceResult<Task> {
        let mut task = self.fetch(id).await?;
        task.apply(changes, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Removes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the id
    /// does not resolve.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Flips a task's completion flag and persists the result.
    ///
    /// This is a read-modify-write without a compare-and-set: two
    /// callers toggling the same task concurrently may both observe
    /// the same prior state and cancel each other out. No consumer
    /// requires stronger semantics; if one ever does, the guard
    /// belongs on the repository port.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the id
    /// does not resolve.
    pub async fn toggle_complete(&self, id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self.fetch(id).await?;
        task.toggle_completed(&*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Returns every task, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_all(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.get_all().await?)
    }

    /// Finds a task by identifier; `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_by_id(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.get_by_id(id).await?)
    }

    /// Returns the tasks belonging to the given list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_by_list(&self, list_id: ListId) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.get_by_list(list_id).await?)
    }

    /// Returns the tasks referencing the given category.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_by_category(&self, category_id: CategoryId) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.get_by_category(category_id).await?)
    }

    /// Returns the tasks due on the clock's current local calendar day.
    ///
    /// Derived from [`Self::get_all`] and the schedule engine, so the
    /// result is identical to what a repository-served today-query
    /// would have to return for the same collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn today_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.get_all().await?;
        Ok(select_today(&tasks, &self.clock.local()))
    }

    /// Returns the active tasks due after the clock's current local
    /// calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn upcoming_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.get_all().await?;
        Ok(select_upcoming(&tasks, &self.clock.local()))
    }

    async fn fetch(&self, id: TaskId) -> TaskServiceResult<Task> {
        let found = self.repository.get_by_id(id).await?;
        found.ok_or(TaskServiceError::Repository(TaskRepositoryError::NotFound(
            id,
        )))
    }
}
