//! Category metadata for grouping tasks by topic.

use super::{CategoryId, DEFAULT_COLOR, TaskDomainError};
use serde::{Deserialize, Serialize};

/// Validates and normalises a category name.
fn validate_name(name: &str) -> Result<String, TaskDomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyCategoryName);
    }
    Ok(trimmed.to_owned())
}

/// A task category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    color: String,
}

/// Validated draft for a category that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    name: String,
    color: Option<String>,
}

impl NewCategory {
    /// Creates a draft with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCategoryName`] when the name is
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
    /// Falls back to [`DEFAULT_COLOR`] when no colour was given.
    #[must_use]
    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            color: self.color.unwrap_or_else(|| DEFAULT_COLOR.to_owned()),
        }
    }
}

impl Category {
    /// Reconstructs a category from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: CategoryId, name: String, color: String) -> Self {
        Self { id, name, color }
    }

    /// Returns the category identifier.
    #[must_use]
    pub const fn id(&self) -> CategoryId {
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

    /// Renames the category.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCategoryName`] when the new name
    /// is empty after trimming.
    pub fn rename(&mut self, name: impl AsRef<str>) -> Result<(), TaskDomainError> {
        self.name = validate_name(name.as_ref())?;
        Ok(())
    }

    /// Replaces the display colour.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }
}
