//! In-memory category and list repositories.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Category, CategoryId, ListId, NewCategory, NewList, TaskList},
    ports::{CatalogRepositoryError, CatalogRepositoryResult, CategoryRepository, ListRepository},
};

fn poisoned(err: impl std::fmt::Display) -> CatalogRepositoryError {
    CatalogRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Thread-safe in-memory category repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    state: Arc<RwLock<Vec<Category>>>,
}

impl InMemoryCategoryRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_all(&self) -> CatalogRepositoryResult<Vec<Category>> {
        let categories = self.state.read().map_err(poisoned)?;
        Ok(categories.clone())
    }

    async fn get_by_id(&self, id: CategoryId) -> CatalogRepositoryResult<Option<Category>> {
        let categories = self.state.read().map_err(poisoned)?;
        Ok(categories.iter().find(|c| c.id() == id).cloned())
    }

    async fn create(&self, draft: NewCategory) -> CatalogRepositoryResult<Category> {
        let mut categories = self.state.write().map_err(poisoned)?;
        let max = categories.iter().map(|c| c.id().value()).max();
        let category = draft.into_category(CategoryId::new(max.unwrap_or(0) + 1));
        categories.push(category.clone());
        Ok(category)
    }

    async fn update(&self, category: &Category) -> CatalogRepositoryResult<()> {
        let mut categories = self.state.write().map_err(poisoned)?;
        let slot = categories
            .iter_mut()
            .find(|stored| stored.id() == category.id())
            .ok_or(CatalogRepositoryError::CategoryNotFound(category.id()))?;
        *slot = category.clone();
        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> CatalogRepositoryResult<()> {
        let mut categories = self.state.write().map_err(poisoned)?;
        let position = categories
            .iter()
            .position(|c| c.id() == id)
            .ok_or(CatalogRepositoryError::CategoryNotFound(id))?;
        categories.remove(position);
        Ok(())
    }
}

/// Thread-safe in-memory task list repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryListRepository {
    state: Arc<RwLock<Vec<TaskList>>>,
}

impl InMemoryListRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListRepository for InMemoryListRepository {
    async fn get_all(&self) -> CatalogRepositoryResult<Vec<TaskList>> {
        let lists = self.state.read().map_err(poisoned)?;
        Ok(lists.clone())
    }

    async fn get_by_id(&self, id: ListId) -> CatalogRepositoryResult<Option<TaskList>> {
        let lists = self.state.read().map_err(poisoned)?;
        Ok(lists.iter().find(|l| l.id() == id).cloned())
    }

    async fn create(&self, draft: NewList) -> CatalogRepositoryResult<TaskList> {
        let mut lists = self.state.write().map_err(poisoned)?;
        let max = lists.iter().map(|l| l.id().value()).max();
        let list = draft.into_list(ListId::new(max.unwrap_or(0) + 1));
        lists.push(list.clone());
        Ok(list)
    }

    async fn update(&self, list: &TaskList) -> CatalogRepositoryResult<()> {
        let mut lists = self.state.write().map_err(poisoned)?;
        let slot = lists
            .iter_mut()
            .find(|stored| stored.id() == list.id())
            .ok_or(CatalogRepositoryError::ListNotFound(list.id()))?;
        *slot = list.clone();
        Ok(())
    }

    async fn delete(&self, id: ListId) -> CatalogRepositoryResult<()> {
        let mut lists = self.state.write().map_err(poisoned)?;
        let position = lists
            .iter()
            .position(|l| l.id() == id)
            .ok_or(CatalogRepositoryError::ListNotFound(id))?;
        lists.remove(position);
        Ok(())
    }
}
