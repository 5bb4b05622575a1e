//! Task list (project) metadata.

use super::{DEFAULT_COLOR, ListId, TaskDomainError};
use serde::{Deserialize, Serialize};

/// Validates and normalises a list name.
fn validate_name(name: &str) -> Result<String, TaskDomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyListName);
    }
    Ok(trimmed.to_owned())
}

/// A task list (project).
///
/// The task counters are denormalized state maintained by the
/// repository backend. They may be stale; the view engines never derive
/// from them and instead count the task collection directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    id: ListId,
    name: String,
    color: String,
    task_count: u32,
    completed_count: u32,
}

/// Validated draft for a list that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewList {
    name: String,
    color: Option<String>,
}

impl NewList {
    /// Creates a draft with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyListName`] when the name is
    /// empty after trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            name: validate_name(name.as_ref())?,
            color: None,
        })
    }

    /// Sets the display colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Completes the draft once the repository has assigned an id.
    ///
    /// New lists start with zeroed task counters and fall back to
    /// [`DEFAULT_COLOR`] when no colour was given.
    #[must_use]
    pub fn into_list(self, id: ListId) -> TaskList {
        TaskList {
            id,
            name: self.name,
            color: self.color.unwrap_or_else(|| DEFAULT_COLOR.to_owned()),
            task_count: 0,
            completed_count: 0,
        }
    }
}

impl TaskList {
    /// Reconstructs a list from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: ListId,
        name: String,
        color: String,
        task_count: u32,
        completed_count: u32,
    ) -> Self {
        Self {
            id,
            name,
            color,
            task_count,
            completed_count,
        }
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> ListId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display colour token.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the denormalized number of tasks in the list.
    #[must_use]
    pub const fn task_count(&self) -> u32 {
        self.task_count
    }

    /// Returns the denormalized number of completed tasks in the list.
    #[must_use]
    pub const fn completed_count(&self) -> u32 {
        self.completed_count
    }

    /// Renames the list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyListName`] when the new name is
    /// empty after trimming.
    pub fn rename(&mut self, name: impl AsRef<str>) -> Result<(), TaskDomainError> {
        self.name = validate_name(name.as_ref())?;
        Ok(())
    }

    /// Replaces the display colour.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Overwrites the denormalized task counters.
    pub const fn set_counts(&mut self, task_count: u32, completed_count: u32) {
        self.task_count = task_count;
        self.completed_count = completed_count;
    }
}
