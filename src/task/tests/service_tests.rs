//! Service orchestration tests for task CRUD and the completion toggle.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{CategoryId, ListId, NewTask, Priority, Task, TaskChanges, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    services::{CreateTaskRequest, TaskService, TaskServiceError},
};
use crate::views::schedule::select_today;
use async_trait::async_trait;
use chrono::{DateTime, Days, Utc};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

type TestService = TaskService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskService::new(Arc::new(InMemoryTaskRepository::new()), Arc::new(DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_persists_and_is_retrievable(service: TestService) {
    let created = service
        .create(
            CreateTaskRequest::new("Plan sprint review")
                .with_description("Slides and demo order")
                .with_priority(Priority::High)
                .with_category(CategoryId::new(4)),
        )
        .await
        .expect("task creation should succeed");

    let fetched = service
        .get_by_id(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_applies_defaults_and_sequential_ids(service: TestService) {
    let first = service
        .create(CreateTaskRequest::new("First"))
        .await
        .expect("first creation should succeed");
    let second = service
        .create(CreateTaskRequest::new("Second"))
        .await
        .expect("second creation should succeed");

    assert_eq!(first.id(), TaskId::new(1));
    assert_eq!(second.id(), TaskId::new(2));
    assert_eq!(first.priority(), Priority::Medium);
    assert_eq!(first.list_id(), ListId::DEFAULT);
    assert!(!first.completed());
    assert!(first.completed_at().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_an_empty_title(service: TestService) {
    let result = service.create(CreateTaskRequest::new("   ")).await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Domain(TaskDomainError::EmptyTitle))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_patches_and_persists(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Tidy desk"))
        .await
        .expect("creation should succeed");

    let updated = service
        .update(
            created.id(),
            TaskChanges::new()
                .with_title("Tidy home office")
                .with_list(ListId::new(2)),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.title(), "Tidy home office");
    assert_eq!(updated.list_id(), ListId::new(2));

    let fetched = service
        .get_by_id(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(updated));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_a_missing_task_reports_not_found(service: TestService) {
    let result = service
        .update(TaskId::new(99), TaskChanges::new().with_completed(true))
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Repository(TaskRepositoryError::NotFound(
            id
        ))) if id == TaskId::new(99)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn toggle_sets_and_clears_the_completion_timestamp(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Water the plants"))
        .await
        .expect("creation should succeed");

    let completed = service
        .toggle_complete(created.id())
        .await
        .expect("toggle should succeed");
    assert!(completed.completed());
    assert!(completed.completed_at().is_some());

    let active = service
        .toggle_complete(created.id())
        .await
        .expect("second toggle should succeed");
    assert!(!active.completed());
    assert!(active.completed_at().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_task_and_reports_missing_ids(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Old chore"))
        .await
        .expect("creation should succeed");

    service
        .delete(created.id())
        .await
        .expect("delete should succeed");
    let fetched = service
        .get_by_id(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, None);

    let missing = service.delete(created.id()).await;
    assert!(matches!(
        missing,
        Err(TaskServiceError::Repository(TaskRepositoryError::NotFound(
            _
        )))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn today_and_upcoming_match_the_derived_engine_results(service: TestService) {
    let clock = DefaultClock;
    let now = clock.utc();
    let in_three_days = now
        .checked_add_days(Days::new(3))
        .expect("date stays in range");

    service
        .create(CreateTaskRequest::new("Due today").with_due_date(now))
        .await
        .expect("creation should succeed");
    service
        .create(CreateTaskRequest::new("Due later").with_due_date(in_three_days))
        .await
        .expect("creation should succeed");
    service
        .create(CreateTaskRequest::new("No deadline"))
        .await
        .expect("creation should succeed");

    let today = service
        .today_tasks()
        .await
        .expect("today query should succeed");
    let upcoming = service
        .upcoming_tasks()
        .await
        .expect("upcoming query should succeed");

    assert_eq!(
        today.iter().map(Task::title).collect::<Vec<_>>(),
        vec!["Due today"]
    );
    assert_eq!(
        upcoming.iter().map(Task::title).collect::<Vec<_>>(),
        vec!["Due later"]
    );

    // The derived form must agree with running the engine over get_all.
    let all = service.get_all().await.expect("get_all should succeed");
    assert_eq!(today, select_today(&all, &clock.local()));
}

mockall::mock! {
    Repo {}

    #[async_trait]
    impl TaskRepository for Repo {
        async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>>;
        async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
        async fn get_by_list(&self, list_id: ListId) -> TaskRepositoryResult<Vec<Task>>;
        async fn get_by_category(&self, category_id: CategoryId) -> TaskRepositoryResult<Vec<Task>>;
        async fn create(
            &self,
            draft: NewTask,
            created_at: DateTime<Utc>,
        ) -> TaskRepositoryResult<Task>;
        async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;
        async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repository_failures_surface_as_service_errors() {
    let mut repo = MockRepo::new();
    repo.expect_get_all().returning(|| {
        Err(TaskRepositoryError::persistence(std::io::Error::other(
            "backend offline",
        )))
    });
    let service = TaskService::new(Arc::new(repo), Arc::new(DefaultClock));

    let result = service.get_all().await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Repository(
            TaskRepositoryError::Persistence(_)
        ))
    ));
}
