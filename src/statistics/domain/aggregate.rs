//! Combined statistics over one snapshot of the task collection.

use super::{DeadlineEntry, TaskSummary, TimingStats, deadline_report, summarize, timing_breakdown};
use crate::task::domain::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary counts, deadline report and timing breakdown for one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatistics {
    /// Counts by quadrant and status.
    pub summary: TaskSummary,
    /// Pending tasks with deadlines, soonest first.
    pub deadlines: Vec<DeadlineEntry>,
    /// Timeliness breakdown.
    pub timing: TimingStats,
}

/// Aggregates `tasks` as of `now`.
///
/// Quadrant and status come from each task as stored; only `days_left` and
/// overtime are evaluated against `now`. The input is never modified and an
/// empty slice yields all-zero counts.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use eisenhower::statistics::domain::aggregate;
/// use eisenhower::task::domain::Quadrant;
///
/// let statistics = aggregate(&[], Utc::now());
/// assert_eq!(statistics.summary.total_tasks(), 0);
/// assert_eq!(statistics.summary.by_quadrant().get(Quadrant::Q1), 0);
/// assert!(statistics.deadlines.is_empty());
/// ```
#[must_use]
pub fn aggregate(tasks: &[Task], now: DateTime<Utc>) -> TaskStatistics {
    TaskStatistics {
        summary: summarize(tasks),
        deadlines: deadline_report(tasks, now),
        timing: timing_breakdown(tasks, now),
    }
}
