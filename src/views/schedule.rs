//! The temporal bucketing engine: classifies tasks by due date against
//! the caller's local calendar day.
//!
//! Every function takes an explicit reference instant (or time zone)
//! so bucketing is a pure computation; callers pass their local "now".
//! Tasks without a due date are excluded from date-based views — they
//! are never treated as due immediately or bucketed implicitly.

use crate::task::domain::Task;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Truncates a due date to its calendar day in the given time zone.
fn local_day<Tz: TimeZone>(due: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    due.with_timezone(tz).date_naive()
}

/// Returns the tasks due within the local calendar day of `now`, i.e.
/// within `[start_of_day, start_of_day + 24h)`.
///
/// Completed tasks are included; the presentation decides whether to
/// show them. Tasks without a due date are excluded.
#[must_use]
pub fn select_today<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Vec<Task> {
    let today = now.date_naive();
    tasks
        .iter()
        .filter(|task| {
            task.due_date()
                .is_some_and(|due| local_day(due, &now.timezone()) == today)
        })
        .cloned()
        .collect()
}

/// Returns the active tasks due strictly after the end of the local
/// calendar day of `now`.
///
/// Completed tasks and tasks without a due date are excluded.
#[must_use]
pub fn select_upcoming<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Vec<Task> {
    let today = now.date_naive();
    tasks
        .iter()
        .filter(|task| {
            !task.completed()
                && task
                    .due_date()
                    .is_some_and(|due| local_day(due, &now.timezone()) > today)
        })
        .cloned()
        .collect()
}

/// One calendar day's worth of tasks in the upcoming view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayGroup {
    /// The local calendar day the group's tasks are due.
    pub date: NaiveDate,
    /// The tasks due that day, in input order.
    pub tasks: Vec<Task>,
}

/// Buckets tasks by the local calendar day of their due date.
///
/// Tasks without a due date are dropped. Groups come back sorted
/// ascending by date; within a group, tasks keep the order they had in
/// the input (insertion order, never re-sorted). Applying the function
/// twice to the same input yields groups with identical membership.
#[must_use]
pub fn group_by_day<Tz: TimeZone>(tasks: &[Task], tz: &Tz) -> Vec<DayGroup> {
    let mut buckets: BTreeMap<NaiveDate, Vec<Task>> = BTreeMap::new();
    for task in tasks {
        if let Some(due) = task.due_date() {
            buckets
                .entry(local_day(due, tz))
                .or_default()
                .push(task.clone());
        }
    }
    buckets
        .into_iter()
        .map(|(date, day_tasks)| DayGroup {
            date,
            tasks: day_tasks,
        })
        .collect()
}

/// How the presentation labels a due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueLabel {
    /// Due on the local calendar day of the reference instant.
    Today,
    /// Due the day after.
    Tomorrow,
    /// Due on some other day, rendered as a literal month and day.
    OnDate(NaiveDate),
    /// No due date.
    Unscheduled,
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => f.write_str("Today"),
            Self::Tomorrow => f.write_str("Tomorrow"),
            Self::OnDate(date) => write!(f, "{}", date.format("%b %-d")),
            Self::Unscheduled => f.write_str("No date"),
        }
    }
}

/// How the presentation colour-codes a due date's urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueUrgency {
    /// Due on a day strictly in the past.
    Overdue,
    /// Due today.
    DueToday,
    /// Due on a later day.
    Future,
    /// No due date.
    Unscheduled,
}

/// Classifies a due date for UI labelling relative to `now`.
#[must_use]
pub fn due_label<Tz: TimeZone>(due: Option<DateTime<Utc>>, now: &DateTime<Tz>) -> DueLabel {
    let Some(due_date) = due else {
        return DueLabel::Unscheduled;
    };
    let day = local_day(due_date, &now.timezone());
    let today = now.date_naive();
    if day == today {
        DueLabel::Today
    } else if Some(day) == today.succ_opt() {
        DueLabel::Tomorrow
    } else {
        DueLabel::OnDate(day)
    }
}

/// Classifies a due date for urgency colour-coding relative to `now`.
#[must_use]
pub fn due_urgency<Tz: TimeZone>(due: Option<DateTime<Utc>>, now: &DateTime<Tz>) -> DueUrgency {
    let Some(due_date) = due else {
        return DueUrgency::Unscheduled;
    };
    let day = local_day(due_date, &now.timezone());
    let today = now.date_naive();
    if day < today {
        DueUrgency::Overdue
    } else if day == today {
        DueUrgency::DueToday
    } else {
        DueUrgency::Future
    }
}
