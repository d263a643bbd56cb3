//! Service layer for task creation, editing, completion and lookup.

use crate::task::{
    domain::{
        NewTask, Quadrant, Requester, SearchQuery, Task, TaskChanges, TaskDescription,
        TaskDomainError, TaskId, TaskStatus, TaskTitle, TaskValidationConfig,
    },
    ports::{TaskFilter, TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    is_important: bool,
    deadline_at: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(title: impl Into<String>, is_important: bool) -> Self {
        Self {
            title: title.into(),
            description: None,
            is_important,
            deadline_at: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline_at: DateTime<Utc>) -> Self {
        self.deadline_at = Some(deadline_at);
        self
    }
}

/// Request payload for editing a task.
///
/// Only fields that were set are applied. Setting importance or the deadline
/// (including clearing it) reclassifies the task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<Option<String>>,
    is_important: Option<bool>,
    deadline_at: Option<Option<DateTime<Utc>>>,
    completed: Option<bool>,
}

impl UpdateTaskRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Replaces the importance flag.
    #[must_use]
    pub const fn with_importance(mut self, is_important: bool) -> Self {
        self.is_important = Some(is_important);
        self
    }

    /// Replaces the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline_at: DateTime<Utc>) -> Self {
        self.deadline_at = Some(Some(deadline_at));
        self
    }

    /// Removes the deadline.
    #[must_use]
    pub const fn clear_deadline(mut self) -> Self {
        self.deadline_at = Some(None);
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    fn into_changes(self, config: &TaskValidationConfig) -> Result<TaskChanges, TaskDomainError> {
        let title = self
            .title
            .map(|title| TaskTitle::new(title, config))
            .transpose()?;
        let description = match self.description {
            Some(Some(text)) => Some(TaskDescription::new(text, config)?),
            Some(None) => Some(None),
            None => None,
        };
        Ok(TaskChanges {
            title,
            description,
            is_important: self.is_important,
            deadline_at: self.deadline_at,
            completed: self.completed,
        })
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task exists with the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The task belongs to another user.
    #[error("access to task {0} is forbidden")]
    Forbidden(TaskId),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: TaskValidationConfig,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service with default validation limits.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, TaskValidationConfig::default())
    }

    /// Creates a new task lifecycle service with explicit validation limits.
    #[must_use]
    pub const fn with_config(
        repository: Arc<R>,
        clock: Arc<C>,
        config: TaskValidationConfig,
    ) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Returns the validation limits in force.
    #[must_use]
    pub const fn config(&self) -> &TaskValidationConfig {
        &self.config
    }

    /// Creates and classifies a task owned by the requester.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when field validation fails or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        requester: &Requester,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            is_important,
            deadline_at,
        } = request;

        let new_task = NewTask {
            title: TaskTitle::new(title, &self.config)?,
            description: description
                .map(|text| TaskDescription::new(text, &self.config))
                .transpose()?
                .flatten(),
            is_important,
            deadline_at,
        };
        let task = Task::new(new_task, Some(requester.user_id()), &*self.clock);
        self.repository.store(&task).await?;
        info!(
            task_id = %task.id(),
            owner = %requester.user_id(),
            quadrant = %task.quadrant(),
            is_urgent = task.is_urgent(),
            "task created"
        );
        Ok(task)
    }

    /// Applies an edit to a task visible to the requester.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] or
    /// [`TaskLifecycleError::Forbidden`] when the task cannot be reached,
    /// [`TaskLifecycleError::Domain`] when a new field value is invalid, and
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn update(
        &self,
        requester: &Requester,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let changes = request.into_changes(&self.config)?;
        let mut task = self.load_accessible(requester, id).await?;
        let previous = task.quadrant();
        let reclassified = task.apply(changes, &*self.clock);
        self.repository.update(&task).await?;
        info!(
            task_id = %id,
            reclassified,
            from = %previous,
            to = %task.quadrant(),
            "task updated"
        );
        Ok(task)
    }

    /// Marks a task complete, keeping its classification.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] or
    /// [`TaskLifecycleError::Forbidden`] when the task cannot be reached and
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn complete(&self, requester: &Requester, id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.load_accessible(requester, id).await?;
        task.complete(&*self.clock);
        self.repository.update(&task).await?;
        info!(task_id = %id, completed_at = ?task.completed_at(), "task completed");
        Ok(task)
    }

    /// Deletes a task and returns its last state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] or
    /// [`TaskLifecycleError::Forbidden`] when the task cannot be reached and
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn delete(&self, requester: &Requester, id: TaskId) -> TaskLifecycleResult<Task> {
        let task = self.load_accessible(requester, id).await?;
        self.repository.delete(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(task)
    }

    /// Retrieves a task visible to the requester.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// [`TaskLifecycleError::Forbidden`] when it belongs to another user, and
    /// [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn find_by_id(&self, requester: &Requester, id: TaskId) -> TaskLifecycleResult<Task> {
        self.load_accessible(requester, id).await
    }

    /// Lists every task visible to the requester.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn list(&self, requester: &Requester) -> TaskLifecycleResult<Vec<Task>> {
        self.list_matching(TaskFilter::scoped(requester.scope()))
            .await
    }

    /// Lists visible tasks stored in one quadrant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn list_by_quadrant(
        &self,
        requester: &Requester,
        quadrant: Quadrant,
    ) -> TaskLifecycleResult<Vec<Task>> {
        self.list_matching(TaskFilter::scoped(requester.scope()).with_quadrant(quadrant))
            .await
    }

    /// Lists visible tasks with the given completion status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn list_by_status(
        &self,
        requester: &Requester,
        status: TaskStatus,
    ) -> TaskLifecycleResult<Vec<Task>> {
        self.list_matching(TaskFilter::scoped(requester.scope()).with_status(status))
            .await
    }

    /// Lists visible tasks whose title or description contains `keyword`,
    /// ignoring case.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the keyword is too short
    /// and [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn search(
        &self,
        requester: &Requester,
        keyword: &str,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let query = SearchQuery::new(keyword, &self.config)?;
        self.list_matching(TaskFilter::scoped(requester.scope()).with_search(query))
            .await
    }

    /// Lists visible tasks whose deadline falls on `date` (UTC).
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn due_on(
        &self,
        requester: &Requester,
        date: NaiveDate,
    ) -> TaskLifecycleResult<Vec<Task>> {
        self.list_matching(TaskFilter::scoped(requester.scope()).due_on(date))
            .await
    }

    /// Lists visible tasks whose deadline falls on the clock's current UTC
    /// date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn due_today(&self, requester: &Requester) -> TaskLifecycleResult<Vec<Task>> {
        let today = self.clock.utc().date_naive();
        self.due_on(requester, today).await
    }

    async fn list_matching(&self, filter: TaskFilter) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.repository.list(&filter).await?;
        debug!(count = tasks.len(), ?filter, "listed tasks");
        Ok(tasks)
    }

    async fn load_accessible(&self, requester: &Requester, id: TaskId) -> TaskLifecycleResult<Task> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))?;
        if !requester.can_access(&task) {
            debug!(task_id = %id, user = %requester.user_id(), "task access denied");
            return Err(TaskLifecycleError::Forbidden(id));
        }
        Ok(task)
    }
}
