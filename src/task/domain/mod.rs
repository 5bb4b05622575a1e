//! Domain model for task management.
//!
//! The task domain models tasks with optional deadlines, priorities,
//! and category/list membership, together with the category and list
//! metadata they reference, while keeping all infrastructure concerns
//! outside of the domain boundary.

mod category;
mod error;
mod ids;
mod list;
mod priority;
mod task;

pub use category::{Category, NewCategory};
pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::{CategoryId, ListId, TaskId};
pub use list::{NewList, TaskList};
pub use priority::Priority;
pub use task::{NewTask, PersistedTaskData, Task, TaskChanges};

/// Default display colour applied when a category or list is created
/// without one.
pub const DEFAULT_COLOR: &str = "#7c3aed";
