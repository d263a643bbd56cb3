//! Service layer reading task snapshots and aggregating them.

use crate::statistics::domain::{
    DeadlineEntry, TaskStatistics, TaskSummary, aggregate, deadline_report, summarize,
};
use crate::task::{
    domain::{Requester, Task, TaskScope},
    ports::{TaskFilter, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for statistics operations.
#[derive(Debug, Error)]
pub enum StatisticsError {
    /// Reading the task snapshot failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for statistics service operations.
pub type StatisticsResult<T> = Result<T, StatisticsError>;

/// Statistics orchestration service.
///
/// Each call reads one snapshot through [`TaskRepository::list`] and
/// aggregates it against the clock's current instant. Nothing is cached
/// between calls.
#[derive(Clone)]
pub struct StatisticsService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> StatisticsService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new statistics service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Aggregates every task in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`StatisticsError::Repository`] when the snapshot read fails.
    pub async fn report(&self, scope: TaskScope) -> StatisticsResult<TaskStatistics> {
        let tasks = self.snapshot(scope).await?;
        let statistics = aggregate(&tasks, self.clock.utc());
        debug!(
            total = statistics.summary.total_tasks(),
            deadlines = statistics.deadlines.len(),
            "aggregated task statistics"
        );
        Ok(statistics)
    }

    /// Aggregates every task visible to `requester`.
    ///
    /// # Errors
    ///
    /// Returns [`StatisticsError::Repository`] when the snapshot read fails.
    pub async fn report_for(&self, requester: &Requester) -> StatisticsResult<TaskStatistics> {
        self.report(requester.scope()).await
    }

    /// Counts tasks in `scope` by quadrant and status.
    ///
    /// # Errors
    ///
    /// Returns [`StatisticsError::Repository`] when the snapshot read fails.
    pub async fn summary(&self, scope: TaskScope) -> StatisticsResult<TaskSummary> {
        let tasks = self.snapshot(scope).await?;
        Ok(summarize(&tasks))
    }

    /// Lists pending tasks in `scope` with the days left until their
    /// deadline.
    ///
    /// # Errors
    ///
    /// Returns [`StatisticsError::Repository`] when the snapshot read fails.
    pub async fn deadlines(&self, scope: TaskScope) -> StatisticsResult<Vec<DeadlineEntry>> {
        let tasks = self.snapshot(scope).await?;
        Ok(deadline_report(&tasks, self.clock.utc()))
    }

    async fn snapshot(&self, scope: TaskScope) -> StatisticsResult<Vec<Task>> {
        let tasks = self.repository.list(&TaskFilter::scoped(scope)).await?;
        debug!(count = tasks.len(), ?scope, "read task snapshot");
        Ok(tasks)
    }
}
