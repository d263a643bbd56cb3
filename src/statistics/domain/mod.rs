//! Statistics over a snapshot of the task collection.
//!
//! Every function here is a pure, read-only projection. Inputs are trusted:
//! quadrant and status are taken from the stored task records, never
//! recomputed.

mod aggregate;
mod deadline;
mod summary;
mod timing;

pub use aggregate::{TaskStatistics, aggregate};
pub use deadline::{DeadlineEntry, deadline_report};
pub use summary::{QuadrantCounts, StatusCounts, TaskSummary, summarize};
pub use timing::{TimingStats, timing_breakdown};
