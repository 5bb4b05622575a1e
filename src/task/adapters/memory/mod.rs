//! In-memory repositories backing tests and the mock-service mode.
//!
//! Each repository owns its store explicitly: constructing a new
//! instance yields an independent empty collection, while cloning a
//! repository shares the underlying store across service boundaries.

mod catalog;
mod task;

pub use catalog::{InMemoryCategoryRepository, InMemoryListRepository};
pub use task::InMemoryTaskRepository;
