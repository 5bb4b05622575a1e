//! The aggregation engine: completion statistics per category and per
//! project.
//!
//! Aggregation counts tasks; it never reads the denormalized counters
//! lists carry, and it is independent of input order.

use crate::task::domain::{Category, CategoryId, Task};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Completion statistics over a task set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStats {
    /// Number of tasks counted.
    pub total: usize,
    /// Number of those tasks that are completed.
    pub completed: usize,
    /// Percentage complete, rounded half-up to the nearest unit; zero
    /// when the task set is empty.
    pub percent: u8,
}

impl ProgressStats {
    /// Builds statistics from raw counts.
    #[must_use]
    pub fn from_counts(total: usize, completed: usize) -> Self {
        Self {
            total,
            completed,
            percent: percent_complete(completed, total),
        }
    }
}

/// Rounds `100 * completed / total` half-up to the nearest unit.
#[expect(
    clippy::integer_division,
    reason = "half-up rounding in integer arithmetic keeps the percentage deterministic; \
              float arithmetic is denied crate-wide"
)]
fn percent_complete(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (completed * 200 + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}

/// Computes completion statistics for each supplied category.
///
/// A task counts toward a category when its reference equals that
/// category's id; tasks that are uncategorized or reference a deleted
/// category contribute to no entry. Every supplied category gets an
/// entry, zeroed when no tasks reference it.
#[must_use]
pub fn aggregate_by_category(
    tasks: &[Task],
    categories: &[Category],
) -> HashMap<CategoryId, ProgressStats> {
    categories
        .iter()
        .map(|category| {
            let members = tasks
                .iter()
                .filter(|task| task.category_id() == Some(category.id()));
            let (total, completed) = members.fold((0, 0), |(total, completed), task| {
                (total + 1, completed + usize::from(task.completed()))
            });
            (category.id(), ProgressStats::from_counts(total, completed))
        })
        .collect()
}

/// Computes completion statistics over a task set already scoped to
/// one list (project).
///
/// An empty task set yields all-zero statistics.
#[must_use]
pub fn aggregate_project(tasks: &[Task]) -> ProgressStats {
    let completed = tasks.iter().filter(|task| task.completed()).count();
    ProgressStats::from_counts(tasks.len(), completed)
}
