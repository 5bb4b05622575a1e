//! Task aggregate root and its construction and patch types.

use super::{CategoryId, ListId, Priority, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validates and normalises a task title.
fn validate_title(title: &str) -> Result<String, TaskDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}

/// Task aggregate root.
///
/// Invariants:
///
/// - The identifier is unique and immutable once assigned.
/// - `completed_at` is `Some` exactly when `completed` is true: it is
///   set on the false-to-true transition and cleared on the reverse.
/// - The category reference may point to a deleted category; consumers
///   treat a dangling reference as "uncategorized" rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    priority: Priority,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
    category_id: Option<CategoryId>,
    list_id: ListId,
    created_at: DateTime<Utc>,
}

/// Validated draft for a task that has not been stored yet.
///
/// The repository assigns the identifier; the service supplies the
/// creation timestamp. Unset fields take their documented defaults:
/// [`Priority::Medium`] and [`ListId::DEFAULT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    priority: Priority,
    category_id: Option<CategoryId>,
    list_id: ListId,
}

impl NewTask {
    /// Creates a draft with the given title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(title: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: validate_title(title.as_ref())?,
            description: None,
            due_date: None,
            priority: Priority::default(),
            category_id: None,
            list_id: ListId::default(),
        })
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
        self.priority = priority;
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
        self.list_id = list_id;
        self
    }

    /// Completes the draft into a stored task.
    ///
    /// Called by repository adapters once an identifier has been
    /// assigned. New tasks start active with no completion timestamp.
    #[must_use]
    pub fn into_task(self, id: TaskId, created_at: DateTime<Utc>) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            completed: false,
            completed_at: None,
            category_id: self.category_id,
            list_id: self.list_id,
            created_at,
        }
    }
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted completion timestamp; `Some` iff `completed`.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted category reference, if any.
    pub category_id: Option<CategoryId>,
    /// Persisted owning list.
    pub list_id: ListId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Canonical patch applied to an existing task.
///
/// Each field is applied when `Some` and left untouched when `None`.
/// Completion changes route through the invariant-preserving mutator
/// so the completion timestamp stays consistent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    title: Option<String>,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    priority: Option<Priority>,
    completed: Option<bool>,
    category_id: Option<CategoryId>,
    list_id: Option<ListId>,
}

impl TaskChanges {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Replaces the category reference.
    #[must_use]
    pub const fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Moves the task to another list.
    #[must_use]
    pub const fn with_list(mut self, list_id: ListId) -> Self {
        self.list_id = Some(list_id);
        self
    }
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            priority: data.priority,
            completed: data.completed,
            completed_at: data.completed_at,
            category_id: data.category_id,
            list_id: data.list_id,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any. Absence means "no deadline".
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns when the task was completed; `Some` iff completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the category reference, if any.
    #[must_use]
    pub const fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    /// Returns the owning list.
    #[must_use]
    pub const fn list_id(&self) -> ListId {
        self.list_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies a patch to this task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the patch carries a
    /// title that is empty after trimming; the task is left unchanged
    /// in that case.
    pub fn apply(
        &mut self,
        changes: TaskChanges,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if let Some(title) = changes.title {
            self.title = validate_title(&title)?;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(category_id) = changes.category_id {
            self.category_id = Some(category_id);
        }
        if let Some(list_id) = changes.list_id {
            self.list_id = list_id;
        }
        if let Some(completed) = changes.completed {
            self.set_completed(completed, clock);
        }
        Ok(())
    }

    /// Sets the completion flag, maintaining the timestamp invariant.
    ///
    /// The completion timestamp is set exactly on the false-to-true
    /// transition and cleared on true-to-false; setting the current
    /// value again leaves the timestamp untouched.
    pub fn set_completed(&mut self, completed: bool, clock: &impl Clock) {
        if self.completed == completed {
            return;
        }
        self.completed = completed;
        self.completed_at = completed.then(|| clock.utc());
    }

    /// Flips the completion flag.
    pub fn toggle_completed(&mut self, clock: &impl Clock) {
        let next = !self.completed;
        self.set_completed(next, clock);
    }
}
