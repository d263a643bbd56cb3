//! Task counts by quadrant and completion status.

use crate::task::domain::{Quadrant, Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Number of tasks stored in each quadrant.
///
/// All four quadrants are always present, including those with no tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuadrantCounts {
    #[serde(rename = "Q1")]
    q1: usize,
    #[serde(rename = "Q2")]
    q2: usize,
    #[serde(rename = "Q3")]
    q3: usize,
    #[serde(rename = "Q4")]
    q4: usize,
}

impl QuadrantCounts {
    /// Returns the count for `quadrant`.
    #[must_use]
    pub const fn get(&self, quadrant: Quadrant) -> usize {
        match quadrant {
            Quadrant::Q1 => self.q1,
            Quadrant::Q2 => self.q2,
            Quadrant::Q3 => self.q3,
            Quadrant::Q4 => self.q4,
        }
    }

    /// Returns the sum over all quadrants.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.q1 + self.q2 + self.q3 + self.q4
    }

    const fn record(&mut self, quadrant: Quadrant) {
        match quadrant {
            Quadrant::Q1 => self.q1 += 1,
            Quadrant::Q2 => self.q2 += 1,
            Quadrant::Q3 => self.q3 += 1,
            Quadrant::Q4 => self.q4 += 1,
        }
    }
}

/// Number of completed and pending tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusCounts {
    completed: usize,
    pending: usize,
}

impl StatusCounts {
    /// Returns the count for `status`.
    #[must_use]
    pub const fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Completed => self.completed,
            TaskStatus::Pending => self.pending,
        }
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Returns the number of pending tasks.
    #[must_use]
    pub const fn pending(&self) -> usize {
        self.pending
    }

    /// Returns the sum over both statuses.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.completed + self.pending
    }

    const fn record(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::Completed => self.completed += 1,
            TaskStatus::Pending => self.pending += 1,
        }
    }
}

/// Overall task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskSummary {
    total_tasks: usize,
    by_quadrant: QuadrantCounts,
    by_status: StatusCounts,
}

impl TaskSummary {
    /// Returns the number of tasks summarised.
    #[must_use]
    pub const fn total_tasks(&self) -> usize {
        self.total_tasks
    }

    /// Returns the per-quadrant counts.
    #[must_use]
    pub const fn by_quadrant(&self) -> QuadrantCounts {
        self.by_quadrant
    }

    /// Returns the per-status counts.
    #[must_use]
    pub const fn by_status(&self) -> StatusCounts {
        self.by_status
    }
}

/// Counts tasks by their stored quadrant and status.
#[must_use]
pub fn summarize(tasks: &[Task]) -> TaskSummary {
    tasks
        .iter()
        .fold(TaskSummary::default(), |mut summary, task| {
            summary.total_tasks += 1;
            summary.by_quadrant.record(task.quadrant());
            summary.by_status.record(task.status());
            summary
        })
}
