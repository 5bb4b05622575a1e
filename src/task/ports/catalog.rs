//! Repository ports for category and list metadata.

use crate::task::domain::{Category, CategoryId, ListId, NewCategory, NewList, TaskList};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for catalog repository operations.
pub type CatalogRepositoryResult<T> = Result<T, CatalogRepositoryError>;

/// Category persistence contract.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Returns every stored category.
    async fn get_all(&self) -> CatalogRepositoryResult<Vec<Category>>;

    /// Finds a category by identifier.
    ///
    /// Returns `None` when the category does not exist.
    async fn get_by_id(&self, id: CategoryId) -> CatalogRepositoryResult<Option<Category>>;

    /// Stores a new category, assigning its identifier.
    async fn create(&self, draft: NewCategory) -> CatalogRepositoryResult<Category>;

    /// Persists changes to an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogRepositoryError::CategoryNotFound`] when the
    /// category does not exist.
    async fn update(&self, category: &Category) -> CatalogRepositoryResult<()>;

    /// Removes a category permanently.
    ///
    /// Tasks referencing the removed category keep their dangling
    /// reference and render as uncategorized.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogRepositoryError::CategoryNotFound`] when the
    /// category does not exist.
    async fn delete(&self, id: CategoryId) -> CatalogRepositoryResult<()>;
}

/// Task list (project) persistence contract.
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Returns every stored list.
    async fn get_all(&self) -> CatalogRepositoryResult<Vec<TaskList>>;

    /// Finds a list by identifier.
    ///
    /// Returns `None` when the list does not exist.
    async fn get_by_id(&self, id: ListId) -> CatalogRepositoryResult<Option<TaskList>>;

    /// Stores a new list, assigning its identifier.
    async fn create(&self, draft: NewList) -> CatalogRepositoryResult<TaskList>;

    /// Persists changes to an existing list, including its
    /// denormalized task counters.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogRepositoryError::ListNotFound`] when the list
    /// does not exist.
    async fn update(&self, list: &TaskList) -> CatalogRepositoryResult<()>;

    /// Removes a list permanently.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogRepositoryError::ListNotFound`] when the list
    /// does not exist.
    async fn delete(&self, id: ListId) -> CatalogRepositoryResult<()>;
}

/// Errors returned by catalog repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CatalogRepositoryError {
    /// The category was not found.
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// The list was not found.
    #[error("list not found: {0}")]
    ListNotFound(ListId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CatalogRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
