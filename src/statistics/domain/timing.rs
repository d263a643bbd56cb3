//! Completion timeliness breakdown.

use crate::task::domain::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tasks split by whether they were, or still can be, finished in time.
///
/// Tasks without a deadline can never be late: completed ones count as on
/// time and pending ones as on plan. Every task lands in exactly one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimingStats {
    completed_on_time: usize,
    completed_late: usize,
    on_plan_pending: usize,
    overtime_pending: usize,
}

impl TimingStats {
    /// Completed no later than the deadline.
    #[must_use]
    pub const fn completed_on_time(&self) -> usize {
        self.completed_on_time
    }

    /// Completed after the deadline had passed.
    #[must_use]
    pub const fn completed_late(&self) -> usize {
        self.completed_late
    }

    /// Pending with the deadline still ahead.
    #[must_use]
    pub const fn on_plan_pending(&self) -> usize {
        self.on_plan_pending
    }

    /// Pending with the deadline already passed.
    #[must_use]
    pub const fn overtime_pending(&self) -> usize {
        self.overtime_pending
    }

    /// Returns the sum over all buckets.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.completed_on_time + self.completed_late + self.on_plan_pending + self.overtime_pending
    }
}

/// Splits `tasks` by timeliness as of `now`.
#[must_use]
pub fn timing_breakdown(tasks: &[Task], now: DateTime<Utc>) -> TimingStats {
    tasks.iter().fold(TimingStats::default(), |mut stats, task| {
        match (task.completed_at(), task.deadline_at()) {
            (Some(completed_at), Some(deadline)) if completed_at > deadline => {
                stats.completed_late += 1;
            }
            (Some(_), _) => stats.completed_on_time += 1,
            (None, Some(deadline)) if deadline < now => stats.overtime_pending += 1,
            (None, _) => stats.on_plan_pending += 1,
        }
        stats
    })
}
