//! Shared test helpers for in-memory repository integration tests.

use chrono::{DateTime, TimeZone, Utc};
use eisenhower::clock::FixedClock;
use eisenhower::statistics::services::StatisticsService;
use eisenhower::task::{
    adapters::memory::InMemoryTaskRepository, domain::Task, services::TaskLifecycleService,
};
use rstest::fixture;
use std::sync::Arc;

/// Lifecycle service backed by the in-memory repository.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, FixedClock>;

/// Statistics service backed by the in-memory repository.
pub type TestStatisticsService = StatisticsService<InMemoryTaskRepository, FixedClock>;

/// Reference instant shared by every scenario: Monday 2026-05-04 09:30 UTC.
#[fixture]
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 4, 9, 30, 0)
        .single()
        .unwrap_or_default()
}

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> Arc<InMemoryTaskRepository> {
    Arc::new(InMemoryTaskRepository::new())
}

/// Builds a lifecycle service whose clock is frozen at `at`.
pub fn task_service(repo: &Arc<InMemoryTaskRepository>, at: DateTime<Utc>) -> TestTaskService {
    TaskLifecycleService::new(Arc::clone(repo), Arc::new(FixedClock::new(at)))
}

/// Builds a statistics service whose clock is frozen at `at`.
pub fn statistics_service(
    repo: &Arc<InMemoryTaskRepository>,
    at: DateTime<Utc>,
) -> TestStatisticsService {
    StatisticsService::new(Arc::clone(repo), Arc::new(FixedClock::new(at)))
}

/// Returns the titles of `tasks` in order.
pub fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title().as_str()).collect()
}
