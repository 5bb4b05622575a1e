//! End-to-end tests for the view pipeline: fetch task and category
//! collections from the repositories, then derive the "Today",
//! "Upcoming", and "Categories" views with the pure engines, the way
//! the presentation layer does after every mutation.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskflow::task::{
    adapters::memory::{InMemoryCategoryRepository, InMemoryTaskRepository},
    domain::{NewCategory, Priority, Task},
    ports::CategoryRepository,
    services::{CreateTaskRequest, TaskService},
};
use taskflow::views::{
    FilterSpec, ProgressStats, StatusFilter, aggregate_by_category, aggregate_project,
    filter_tasks, group_by_day, select_today, select_upcoming,
};

type TestService = TaskService<InMemoryTaskRepository, DefaultClock>;

struct TestContext {
    service: TestService,
    categories: InMemoryCategoryRepository,
}

#[fixture]
fn context() -> TestContext {
    TestContext {
        service: TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        ),
        categories: InMemoryCategoryRepository::new(),
    }
}

/// Fixed local reference instant: noon on 2024-06-10 in UTC+02:00.
fn reference_now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(2 * 3600)
        .expect("valid offset")
        .with_ymd_and_hms(2024, 6, 10, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("valid timestamp")
}

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::title).collect()
}

/// Seeds a small board and derives every view from one fetch, checking
/// the facets agree with each other.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn derives_all_facets_from_one_collection(context: TestContext) {
    let errands = context
        .categories
        .create(NewCategory::new("Errands").expect("draft"))
        .await
        .expect("create category");
    let work = context
        .categories
        .create(NewCategory::new("Work").expect("draft"))
        .await
        .expect("create category");

    let morning = context
        .service
        .create(
            CreateTaskRequest::new("Post parcel")
                .with_due_date(utc(2024, 6, 10, 6, 0))
                .with_category(errands.id()),
        )
        .await
        .expect("create");
    context
        .service
        .create(
            CreateTaskRequest::new("Late review")
                .with_due_date(utc(2024, 6, 10, 21, 0))
                .with_category(work.id())
                .with_priority(Priority::High),
        )
        .await
        .expect("create");
    context
        .service
        .create(
            CreateTaskRequest::new("Prepare slides")
                .with_due_date(utc(2024, 6, 12, 9, 0))
                .with_category(work.id()),
        )
        .await
        .expect("create");
    context
        .service
        .create(CreateTaskRequest::new("Someday: learn piano"))
        .await
        .expect("create");

    context
        .service
        .toggle_complete(morning.id())
        .await
        .expect("toggle");

    let now = reference_now();
    let tasks = context.service.get_all().await.expect("get_all");
    let categories = context.categories.get_all().await.expect("categories");

    // Today keeps both of the 2024-06-10 tasks, completed or not.
    assert_eq!(
        titles(&select_today(&tasks, &now)),
        vec!["Post parcel", "Late review"]
    );

    // Upcoming holds only the active future task, grouped by day.
    let upcoming = select_upcoming(&tasks, &now);
    assert_eq!(titles(&upcoming), vec!["Prepare slides"]);
    let groups = group_by_day(&upcoming, &now.timezone());
    assert_eq!(groups.len(), 1);

    // The categories facet aggregates completion per category.
    let stats = aggregate_by_category(&tasks, &categories);
    assert_eq!(
        stats.get(&errands.id()),
        Some(&ProgressStats {
            total: 1,
            completed: 1,
            percent: 100
        })
    );
    assert_eq!(
        stats.get(&work.id()),
        Some(&ProgressStats {
            total: 2,
            completed: 0,
            percent: 0
        })
    );

    // The all-tasks facet filters the same collection.
    let active = filter_tasks(
        &tasks,
        &FilterSpec {
            status: StatusFilter::Active,
            ..FilterSpec::default()
        },
    );
    assert_eq!(
        titles(&active),
        vec!["Late review", "Prepare slides", "Someday: learn piano"]
    );

    // The project header shows overall progress for the whole board.
    assert_eq!(
        aggregate_project(&tasks),
        ProgressStats {
            total: 4,
            completed: 1,
            percent: 25
        }
    );
}

/// Re-running the pipeline after a mutation reflects the new state
/// without the engines carrying anything over.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pipeline_refreshes_after_each_mutation(context: TestContext) {
    let category = context
        .categories
        .create(NewCategory::new("Home").expect("draft"))
        .await
        .expect("create category");

    let chore = context
        .service
        .create(CreateTaskRequest::new("Vacuum").with_category(category.id()))
        .await
        .expect("create");

    let before = aggregate_by_category(
        &context.service.get_all().await.expect("get_all"),
        &context.categories.get_all().await.expect("categories"),
    );
    assert_eq!(
        before.get(&category.id()).map(|s| s.percent),
        Some(0)
    );

    context
        .service
        .toggle_complete(chore.id())
        .await
        .expect("toggle");

    let after = aggregate_by_category(
        &context.service.get_all().await.expect("get_all"),
        &context.categories.get_all().await.expect("categories"),
    );
    assert_eq!(after.get(&category.id()).map(|s| s.percent), Some(100));

    context.service.delete(chore.id()).await.expect("delete");

    let emptied = aggregate_by_category(
        &context.service.get_all().await.expect("get_all"),
        &context.categories.get_all().await.expect("categories"),
    );
    assert_eq!(
        emptied.get(&category.id()),
        Some(&ProgressStats::default())
    );
}

/// A filter spec built from raw, partially invalid presentation
/// parameters still narrows the view instead of erroring.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lenient_filter_parameters_compose_with_search(context: TestContext) {
    context
        .service
        .create(CreateTaskRequest::new("Send invoice").with_priority(Priority::High))
        .await
        .expect("create");
    context
        .service
        .create(CreateTaskRequest::new("Send newsletter"))
        .await
        .expect("create");
    let done = context
        .service
        .create(CreateTaskRequest::new("Send reminders"))
        .await
        .expect("create");
    context
        .service
        .toggle_complete(done.id())
        .await
        .expect("toggle");

    let tasks = context.service.get_all().await.expect("get_all");

    // "someday" is not a valid status and degrades to All; the search
    // and category parameters still apply.
    let spec = FilterSpec::from_params("someday", "all", "all", "SEND");
    assert_eq!(filter_tasks(&tasks, &spec).len(), 3);

    let narrowed = FilterSpec::from_params("active", "high", "not-an-id", "invoice");
    assert_eq!(titles(&filter_tasks(&tasks, &narrowed)), vec!["Send invoice"]);
}
