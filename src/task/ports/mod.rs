//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task
//! services and the presentation layer. Storage may be in-memory or a
//! remote service; callers only see these traits.

pub mod catalog;
pub mod repository;

pub use catalog::{
    CatalogRepositoryError, CatalogRepositoryResult, CategoryRepository, ListRepository,
};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
