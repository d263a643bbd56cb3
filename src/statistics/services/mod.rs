//! Application services for task statistics.

mod reporting;

pub use reporting::{StatisticsError, StatisticsResult, StatisticsService};
