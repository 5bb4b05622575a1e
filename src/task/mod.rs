//! Task management for Taskflow.
//!
//! This module implements the task-management bounded context: the
//! task, category, and list domain model, the repository contracts the
//! presentation layer consumes, in-memory repository implementations,
//! and the orchestration service for create/update/delete and the
//! completion toggle. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
