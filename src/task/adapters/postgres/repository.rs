//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        ParseQuadrantError, PersistedTaskData, Quadrant, Task, TaskDescription, TaskDomainError,
        TaskId, TaskScope, TaskTitle, UserId,
    },
    ports::{TaskFilter, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Errors raised while converting a stored row back into a [`Task`].
#[derive(Debug, Error)]
pub enum TaskRowError {
    /// The quadrant column holds an unknown label.
    #[error(transparent)]
    Quadrant(#[from] ParseQuadrantError),

    /// The stored classification is internally inconsistent.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The completion flag and completion timestamp disagree.
    #[error("task {0} has inconsistent completed and completed_at columns")]
    CompletionMismatch(TaskId),
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let row = to_row(task);

        self.run_blocking(move |connection| {
            let updated_count =
                diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                    .set(&row)
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

            if deleted_count == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let criteria = filter.clone();
        self.run_blocking(move |connection| {
            let rows = filtered_query(&criteria)
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

/// Translates a [`TaskFilter`] into a boxed `SELECT` on `tasks`.
fn filtered_query(filter: &TaskFilter) -> tasks::BoxedQuery<'static, Pg> {
    let mut query = tasks::table.into_boxed();

    if let TaskScope::Owner(user_id) = filter.scope() {
        query = query.filter(tasks::owner_id.eq(user_id.into_inner()));
    }
    if let Some(quadrant) = filter.quadrant() {
        query = query.filter(tasks::quadrant.eq(quadrant.as_str()));
    }
    if let Some(status) = filter.status() {
        query = query.filter(tasks::completed.eq(status.is_completed()));
    }
    if let Some(search) = filter.search() {
        let pattern = format!("%{}%", escape_like(search.keyword()));
        query = query.filter(
            tasks::title
                .ilike(pattern.clone())
                .or(tasks::description.ilike(pattern)),
        );
    }
    if let Some(window) = filter.deadline_window() {
        query = query.filter(tasks::deadline_at.ge(window.start()));
        if let Some(end) = window.end() {
            query = query.filter(tasks::deadline_at.lt(end));
        }
    }
    query
}

/// Escapes `LIKE` wildcards so the keyword matches literally.
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for ch in keyword.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn to_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        owner_id: task.owner().map(UserId::into_inner),
        title: task.title().as_str().to_owned(),
        description: task.description().map(|text| text.as_str().to_owned()),
        is_important: task.is_important(),
        is_urgent: task.is_urgent(),
        quadrant: task.quadrant().as_str().to_owned(),
        completed: task.completed(),
        created_at: task.created_at(),
        completed_at: task.completed_at(),
        deadline_at: task.deadline_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    decode_row(row).map_err(TaskRepositoryError::persistence)
}

fn decode_row(row: TaskRow) -> Result<Task, TaskRowError> {
    let TaskRow {
        id,
        owner_id,
        title,
        description,
        is_important,
        is_urgent,
        quadrant,
        completed,
        created_at,
        completed_at,
        deadline_at,
    } = row;

    let task_id = TaskId::from_uuid(id);
    if completed != completed_at.is_some() {
        return Err(TaskRowError::CompletionMismatch(task_id));
    }

    let data = PersistedTaskData {
        id: task_id,
        owner: owner_id.map(UserId::from_uuid),
        title: TaskTitle::from_persisted(title),
        description: description.map(TaskDescription::from_persisted),
        is_important,
        is_urgent,
        quadrant: Quadrant::try_from(quadrant.as_str())?,
        deadline_at,
        created_at,
        completed_at,
    };
    Ok(Task::from_persisted(data)?)
}
