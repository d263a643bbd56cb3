//! In-memory integration tests for statistics reports.

use super::helpers::{now, repo, statistics_service, task_service};
use chrono::{DateTime, TimeDelta, Utc};
use eisenhower::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Quadrant, Requester, TaskScope, UserId},
    services::CreateTaskRequest,
};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn report_reflects_stored_classification_and_live_deadlines(
    repo: Arc<InMemoryTaskRepository>,
    now: DateTime<Utc>,
) -> eyre::Result<()> {
    let tasks = task_service(&repo, now);
    let owner = Requester::user(UserId::new());
    let essay = tasks
        .create(
            &owner,
            CreateTaskRequest::new("Essay draft", true).with_deadline(now + TimeDelta::days(5)),
        )
        .await?;
    let groceries = tasks
        .create(
            &owner,
            CreateTaskRequest::new("Groceries", false).with_deadline(now + TimeDelta::hours(8)),
        )
        .await?;
    let filed = tasks
        .create(
            &owner,
            CreateTaskRequest::new("File receipts", false).with_deadline(now + TimeDelta::days(1)),
        )
        .await?;
    tasks.complete(&owner, filed.id()).await?;

    let report = statistics_service(&repo, now + TimeDelta::days(2))
        .report_for(&owner)
        .await?;

    let summary = report.summary;
    eyre::ensure!(summary.total_tasks() == 3, "three tasks");
    eyre::ensure!(summary.by_quadrant().get(Quadrant::Q2) == 1, "essay stays Q2");
    eyre::ensure!(summary.by_quadrant().get(Quadrant::Q3) == 2, "two Q3 tasks");
    eyre::ensure!(summary.by_status().completed() == 1, "one completed");
    eyre::ensure!(
        summary.by_quadrant().total() == summary.total_tasks(),
        "quadrant counts sum to total"
    );

    let ids: Vec<_> = report.deadlines.iter().map(|entry| entry.task_id).collect();
    eyre::ensure!(ids == vec![groceries.id(), essay.id()], "soonest first");
    let days: Vec<i64> = report.deadlines.iter().map(|entry| entry.days_left).collect();
    eyre::ensure!(days == vec![-1, 3], "unexpected days left: {days:?}");

    eyre::ensure!(report.timing.completed_on_time() == 1, "filed on time");
    eyre::ensure!(report.timing.overtime_pending() == 1, "groceries overdue");
    eyre::ensure!(report.timing.on_plan_pending() == 1, "essay on plan");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_repository_reports_zeroes(
    repo: Arc<InMemoryTaskRepository>,
    now: DateTime<Utc>,
) -> eyre::Result<()> {
    let report = statistics_service(&repo, now).report(TaskScope::All).await?;
    let json = serde_json::to_value(&report)?;

    eyre::ensure!(json["summary"]["total_tasks"] == 0, "no tasks");
    for label in ["Q1", "Q2", "Q3", "Q4"] {
        eyre::ensure!(
            json["summary"]["by_quadrant"][label] == 0,
            "{label} should be present and zero"
        );
    }
    eyre::ensure!(json["summary"]["by_status"]["completed"] == 0, "completed");
    eyre::ensure!(json["summary"]["by_status"]["pending"] == 0, "pending");
    eyre::ensure!(json["deadlines"] == serde_json::json!([]), "no deadlines");
    Ok(())
}
