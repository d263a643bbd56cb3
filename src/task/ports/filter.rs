//! Query filter shared by repository adapters.

use crate::task::domain::{Quadrant, SearchQuery, Task, TaskScope, TaskStatus};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Calendar day (UTC) a deadline must fall on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeadlineWindow {
    date: NaiveDate,
}

impl DeadlineWindow {
    /// Creates a window covering the whole of `date` in UTC.
    #[must_use]
    pub const fn on_date(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Returns the calendar day covered by the window.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the inclusive start instant of the window.
    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.date.and_time(NaiveTime::MIN).and_utc()
    }

    /// Returns the exclusive end instant, or `None` for the last
    /// representable day.
    #[must_use]
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.date
            .succ_opt()
            .map(|next| next.and_time(NaiveTime::MIN).and_utc())
    }

    /// Returns whether `instant` falls inside the window.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant.date_naive() == self.date
    }
}

/// Criteria for [`TaskRepository::list`](super::TaskRepository::list).
///
/// Every criterion is optional; the default filter matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    scope: TaskScope,
    quadrant: Option<Quadrant>,
    status: Option<TaskStatus>,
    search: Option<SearchQuery>,
    deadline_window: Option<DeadlineWindow>,
}

impl TaskFilter {
    /// Creates a filter matching every task.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Creates a filter restricted to `scope`.
    #[must_use]
    pub fn scoped(scope: TaskScope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    /// Restricts the filter to one quadrant.
    #[must_use]
    pub const fn with_quadrant(mut self, quadrant: Quadrant) -> Self {
        self.quadrant = Some(quadrant);
        self
    }

    /// Restricts the filter to one completion status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts the filter to tasks whose title or description contains the
    /// keyword.
    #[must_use]
    pub fn with_search(mut self, search: SearchQuery) -> Self {
        self.search = Some(search);
        self
    }

    /// Restricts the filter to tasks whose deadline falls on `date` (UTC).
    #[must_use]
    pub const fn due_on(mut self, date: NaiveDate) -> Self {
        self.deadline_window = Some(DeadlineWindow::on_date(date));
        self
    }

    /// Returns the owner scope.
    #[must_use]
    pub const fn scope(&self) -> TaskScope {
        self.scope
    }

    /// Returns the quadrant criterion, if any.
    #[must_use]
    pub const fn quadrant(&self) -> Option<Quadrant> {
        self.quadrant
    }

    /// Returns the status criterion, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the search criterion, if any.
    #[must_use]
    pub const fn search(&self) -> Option<&SearchQuery> {
        self.search.as_ref()
    }

    /// Returns the deadline window criterion, if any.
    #[must_use]
    pub const fn deadline_window(&self) -> Option<DeadlineWindow> {
        self.deadline_window
    }

    /// Returns whether `task` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.scope.includes(task)
            && self.quadrant.is_none_or(|quadrant| task.quadrant() == quadrant)
            && self.status.is_none_or(|status| task.status() == status)
            && self.search.as_ref().is_none_or(|search| {
                search.matches(task.title().as_str())
                    || task
                        .description()
                        .is_some_and(|description| search.matches(description.as_str()))
            })
            && self.deadline_window.is_none_or(|window| {
                task.deadline_at()
                    .is_some_and(|deadline| window.contains(deadline))
            })
    }
}
