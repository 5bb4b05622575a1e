//! Taskflow: the domain core of a personal task-management application.
//!
//! Users organise tasks into lists (projects) and categories and view
//! them through "All", "Today", "Upcoming", and "Categories" facets.
//! This crate provides the task domain, the repository contracts and
//! their in-memory implementations, and the pure view-derivation
//! engines; rendering and transport belong to external callers.
//!
//! # Architecture
//!
//! Taskflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task, category, and list domain with CRUD orchestration
//! - [`views`]: Pure engines deriving filtered, date-bucketed, and
//!   aggregated views from a task collection

pub mod task;
pub mod views;
