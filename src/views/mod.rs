//! Pure view-derivation engines.
//!
//! The engines transform a flat task collection into the filtered,
//! date-bucketed, and aggregated views the presentation layer renders.
//! They hold no state between calls, perform no I/O, and never mutate
//! their inputs, so the presentation layer can re-invoke them freely
//! after every mutation (toggle, delete, create) without any
//! synchronization.
//!
//! - [`filter`]: multi-predicate filtering and free-text search
//! - [`schedule`]: due-date bucketing against the caller's local day
//! - [`progress`]: per-category and per-project completion statistics

pub mod filter;
pub mod progress;
pub mod schedule;

pub use filter::{CategoryFilter, FilterSpec, PriorityFilter, StatusFilter, filter_tasks};
pub use progress::{ProgressStats, aggregate_by_category, aggregate_project};
pub use schedule::{
    DayGroup, DueLabel, DueUrgency, due_label, due_urgency, group_by_day, select_today,
    select_upcoming,
};

#[cfg(test)]
mod tests;
