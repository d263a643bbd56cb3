//! In-memory integration tests for task lifecycle operations.

use super::helpers::{now, repo, task_service, titles};
use chrono::{DateTime, TimeDelta, Utc};
use eisenhower::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Quadrant, Requester, TaskStatus, UserId},
    services::{CreateTaskRequest, TaskLifecycleError, UpdateTaskRequest},
};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_drift_between_quadrants_only_on_classifying_edits(
    repo: Arc<InMemoryTaskRepository>,
    now: DateTime<Utc>,
) -> eyre::Result<()> {
    let owner = Requester::user(UserId::new());
    let created = task_service(&repo, now)
        .create(
            &owner,
            CreateTaskRequest::new("Quarterly tax filing", true)
                .with_deadline(now + TimeDelta::days(10)),
        )
        .await?;
    eyre::ensure!(created.quadrant() == Quadrant::Q2, "fresh task should be Q2");

    // A week later the stored snapshot is unchanged until an edit touches
    // importance or the deadline.
    let week_later = task_service(&repo, now + TimeDelta::days(8));
    let listed = week_later.list_by_quadrant(&owner, Quadrant::Q2).await?;
    eyre::ensure!(titles(&listed) == vec!["Quarterly tax filing"], "still Q2");

    let described = week_later
        .update(
            &owner,
            created.id(),
            UpdateTaskRequest::new().with_description("Gather receipts first"),
        )
        .await?;
    eyre::ensure!(described.quadrant() == Quadrant::Q2, "description edit keeps Q2");

    let moved = week_later
        .update(
            &owner,
            created.id(),
            UpdateTaskRequest::new().with_deadline(now + TimeDelta::days(10)),
        )
        .await?;
    eyre::ensure!(moved.quadrant() == Quadrant::Q1, "deadline edit reclassifies");
    eyre::ensure!(
        moved.days_left(now + TimeDelta::days(8)) == Some(2),
        "two days remain"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_flow_through_update_and_complete(
    repo: Arc<InMemoryTaskRepository>,
    now: DateTime<Utc>,
) -> eyre::Result<()> {
    let service = task_service(&repo, now);
    let owner = Requester::user(UserId::new());
    let first = service
        .create(&owner, CreateTaskRequest::new("Archive mail", false))
        .await?;
    let second = service
        .create(
            &owner,
            CreateTaskRequest::new("Reply to landlord", false)
                .with_deadline(now + TimeDelta::hours(4)),
        )
        .await?;

    service.complete(&owner, first.id()).await?;
    service
        .update(
            &owner,
            second.id(),
            UpdateTaskRequest::new().with_completed(true),
        )
        .await?;
    let completed = service.list_by_status(&owner, TaskStatus::Completed).await?;
    eyre::ensure!(completed.len() == 2, "both tasks completed");
    eyre::ensure!(
        completed.iter().all(|task| task.completed_at() == Some(now)),
        "completion instant comes from the clock"
    );

    let reopened = service
        .update(
            &owner,
            second.id(),
            UpdateTaskRequest::new().with_completed(false),
        )
        .await?;
    eyre::ensure!(reopened.completed_at().is_none(), "reopened task is pending");
    eyre::ensure!(reopened.quadrant() == Quadrant::Q3, "quadrant kept");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_are_ordered_by_creation_time(
    repo: Arc<InMemoryTaskRepository>,
    now: DateTime<Utc>,
) -> eyre::Result<()> {
    let owner = Requester::user(UserId::new());
    for (offset, title) in [(2, "Third"), (0, "First"), (1, "Second")] {
        task_service(&repo, now + TimeDelta::minutes(offset))
            .create(&owner, CreateTaskRequest::new(title, true))
            .await?;
    }

    let listed = task_service(&repo, now).list(&owner).await?;
    eyre::ensure!(
        titles(&listed) == vec!["First", "Second", "Third"],
        "unexpected order: {:?}",
        titles(&listed)
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_and_due_dates_respect_ownership(
    repo: Arc<InMemoryTaskRepository>,
    now: DateTime<Utc>,
) -> eyre::Result<()> {
    let service = task_service(&repo, now);
    let alice = Requester::user(UserId::new());
    let bob = Requester::user(UserId::new());
    let admin = Requester::admin(UserId::new());
    for owner in [&alice, &bob] {
        service
            .create(
                owner,
                CreateTaskRequest::new("Prepare budget", true)
                    .with_deadline(now + TimeDelta::hours(3)),
            )
            .await?;
    }

    eyre::ensure!(service.search(&alice, "BUDGET").await?.len() == 1, "alice");
    eyre::ensure!(service.search(&admin, "budget").await?.len() == 2, "admin");
    eyre::ensure!(service.due_today(&bob).await?.len() == 1, "bob");
    eyre::ensure!(
        service
            .due_on(&admin, (now + TimeDelta::days(1)).date_naive())
            .await?
            .is_empty(),
        "nothing due tomorrow"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_tasks_disappear(
    repo: Arc<InMemoryTaskRepository>,
    now: DateTime<Utc>,
) -> eyre::Result<()> {
    let service = task_service(&repo, now);
    let owner = Requester::user(UserId::new());
    let created = service
        .create(&owner, CreateTaskRequest::new("Temporary", false))
        .await?;

    service.delete(&owner, created.id()).await?;
    let second_delete = service.delete(&owner, created.id()).await;

    eyre::ensure!(
        matches!(second_delete, Err(TaskLifecycleError::NotFound(_))),
        "expected NotFound, got {second_delete:?}"
    );
    eyre::ensure!(service.list(&owner).await?.is_empty(), "no tasks left");
    Ok(())
}
