//! Time-to-deadline report for pending tasks.

use crate::task::domain::{Quadrant, Task, TaskDescription, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One pending task with a deadline, and the days left until it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineEntry {
    /// Task identifier.
    pub task_id: TaskId,
    /// Task title.
    pub title: TaskTitle,
    /// Task description, if any.
    pub description: Option<TaskDescription>,
    /// Task creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Task deadline.
    pub deadline_at: DateTime<Utc>,
    /// Stored quadrant.
    pub quadrant: Quadrant,
    /// Days left at report time; negative once overdue.
    pub days_left: i64,
}

/// Builds the deadline report for `tasks` as of `now`.
///
/// Completed tasks and tasks without a deadline are skipped. `days_left` is
/// recomputed against `now` rather than read from the stored urgency
/// snapshot. Entries are ordered soonest first; ties fall back to deadline,
/// creation time and identifier so the order never depends on input order.
#[must_use]
pub fn deadline_report(tasks: &[Task], now: DateTime<Utc>) -> Vec<DeadlineEntry> {
    let mut entries: Vec<DeadlineEntry> = tasks
        .iter()
        .filter(|task| !task.completed())
        .filter_map(|task| {
            let deadline_at = task.deadline_at()?;
            Some(DeadlineEntry {
                task_id: task.id(),
                title: task.title().clone(),
                description: task.description().cloned(),
                created_at: task.created_at(),
                deadline_at,
                quadrant: task.quadrant(),
                days_left: task.days_left(now)?,
            })
        })
        .collect();
    entries.sort_by_key(|entry| {
        (
            entry.days_left,
            entry.deadline_at,
            entry.created_at,
            entry.task_id,
        )
    });
    entries
}
