//! Shared world state for task classification BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use eisenhower::clock::FixedClock;
use eisenhower::statistics::{domain::TaskStatistics, services::StatisticsService};
use eisenhower::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Requester, Task, UserId},
    services::TaskLifecycleService,
};
use rstest::fixture;

/// Scenario world for classification behaviour tests.
pub struct ClassificationWorld {
    pub repository: Arc<InMemoryTaskRepository>,
    pub now: DateTime<Utc>,
    pub owner: Requester,
    pub tasks: HashMap<String, Task>,
    pub statistics: Option<TaskStatistics>,
}

impl ClassificationWorld {
    /// Creates a world with an empty repository and the clock at the epoch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: Arc::new(InMemoryTaskRepository::new()),
            now: DateTime::<Utc>::default(),
            owner: Requester::user(UserId::new()),
            tasks: HashMap::new(),
            statistics: None,
        }
    }

    /// Lifecycle service reading the world's current instant.
    pub fn task_service(&self) -> TaskLifecycleService<InMemoryTaskRepository, FixedClock> {
        TaskLifecycleService::new(
            Arc::clone(&self.repository),
            Arc::new(FixedClock::new(self.now)),
        )
    }

    /// Statistics service reading the world's current instant.
    pub fn statistics_service(&self) -> StatisticsService<InMemoryTaskRepository, FixedClock> {
        StatisticsService::new(
            Arc::clone(&self.repository),
            Arc::new(FixedClock::new(self.now)),
        )
    }

    /// Looks up a task created earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no task with `title` was created.
    pub fn task(&self, title: &str) -> eyre::Result<&Task> {
        self.tasks
            .get(title)
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in scenario world"))
    }
}

impl Default for ClassificationWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ClassificationWorld {
    ClassificationWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
