//! Task statistics for Eisenhower.
//!
//! Summarises a snapshot of the task collection by quadrant and completion
//! status, reports the days left before each pending deadline, and splits
//! tasks by timeliness. The pure aggregation lives in [`domain`]; the
//! [`services`] layer reads the snapshot through the task repository port.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
