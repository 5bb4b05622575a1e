//! The view filter engine: status, priority, category, and free-text
//! predicates ANDed over a task collection.
//!
//! Filter values parsed from presentation parameters degrade to the
//! most permissive match (`All`) when unknown or malformed. That
//! fallback is deliberate: a stale or mistyped dropdown value widens
//! the view instead of erroring or hiding everything.

use crate::task::domain::{CategoryId, Priority, Task};

/// Completion-status predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Keep every task.
    #[default]
    All,
    /// Keep tasks that are not completed.
    Active,
    /// Keep completed tasks.
    Completed,
}

impl StatusFilter {
    /// Parses a presentation parameter, falling back to [`Self::All`]
    /// for unknown values.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }

    const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed(),
            Self::Completed => task.completed(),
        }
    }
}

/// Priority predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Keep every task.
    #[default]
    All,
    /// Keep tasks with exactly this priority.
    Only(Priority),
}

impl PriorityFilter {
    /// Parses a presentation parameter, falling back to [`Self::All`]
    /// for unknown values.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        Priority::try_from(value).map_or(Self::All, Self::Only)
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(priority) => task.priority() == priority,
        }
    }
}

/// Category predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Keep every task.
    #[default]
    All,
    /// Keep tasks referencing exactly this category. Tasks without a
    /// category never match.
    Only(CategoryId),
}

impl CategoryFilter {
    /// Parses a presentation parameter, falling back to [`Self::All`]
    /// when the value is not a numeric category id.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        value
            .trim()
            .parse::<u64>()
            .map_or(Self::All, |id| Self::Only(CategoryId::new(id)))
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(category_id) => task.category_id() == Some(category_id),
        }
    }
}

/// Combined filter specification for a task list view.
///
/// The default spec is the identity filter: it keeps every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Completion-status predicate.
    pub status: StatusFilter,
    /// Priority predicate.
    pub priority: PriorityFilter,
    /// Category predicate.
    pub category: CategoryFilter,
    /// Case-insensitive substring matched against the title only; the
    /// empty string matches everything.
    pub search: String,
}

impl FilterSpec {
    /// Builds a spec from raw presentation parameters, applying the
    /// lenient fallbacks of the individual `from_param` parsers.
    #[must_use]
    pub fn from_params(status: &str, priority: &str, category: &str, search: &str) -> Self {
        Self {
            status: StatusFilter::from_param(status),
            priority: PriorityFilter::from_param(priority),
            category: CategoryFilter::from_param(category),
            search: search.to_owned(),
        }
    }
}

/// Returns the tasks matching every predicate of `spec`, preserving
/// the relative order of the input.
#[must_use]
pub fn filter_tasks(tasks: &[Task], spec: &FilterSpec) -> Vec<Task> {
    let needle = spec.search.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            spec.status.matches(task)
                && spec.priority.matches(task)
                && spec.category.matches(task)
                && (needle.is_empty() || task.title().to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
