//! Unit tests for the view-derivation engines.


use crate::task::domain::{
    CategoryId, ListId, PersistedTaskData, Priority, Task, TaskId,
};
use chrono::{DateTime, TimeZone, Utc};

/// Fixed creation instant shared by all fixtures.
fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Builds a stored task with overridable fields.
fn task_fixture(id: u64) -> PersistedTaskData {
    PersistedTaskData {
        id: TaskId::new(id),
        title: format!("Task {id}"),
        description: None,
        due_date: None,
        priority: Priority::Medium,
        completed: false,
        completed_at: None,
        category_id: None,
        list_id: ListId::DEFAULT,
        created_at: created_at(),
    }
}

fn task(id: u64) -> Task {
    Task::from_persisted(task_fixture(id))
}

fn completed_task(id: u64) -> Task {
    Task::from_persisted(PersistedTaskData {
        completed: true,
        completed_at: Some(created_at()),
        ..task_fixture(id)
    })
}

fn due_task(id: u64, due: DateTime<Utc>) -> Task {
    Task::from_persisted(PersistedTaskData {
        due_date: Some(due),
        ..task_fixture(id)
    })
}

fn categorized_task(id: u64, category: u64, completed: bool) -> Task {
    Task::from_persisted(PersistedTaskData {
        category_id: Some(CategoryId::new(category)),
        completed,
        completed_at: completed.then(created_at),
        ..task_fixture(id)
    })
}

fn ids(tasks: &[Task]) -> Vec<TaskId> {
    tasks.iter().map(Task::id).collect()
}
