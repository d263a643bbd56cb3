//! Error types for task domain validation and parsing.

use super::{Quadrant, TaskId};
use thiserror::Error;

/// Errors returned while constructing or updating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is shorter than the configured minimum after trimming.
    #[error("task title must be at least {min} characters, got {actual}")]
    TitleTooShort {
        /// Configured minimum length in characters.
        min: usize,
        /// Length of the rejected title in characters.
        actual: usize,
    },

    /// The title is longer than the configured maximum after trimming.
    #[error("task title must be at most {max} characters, got {actual}")]
    TitleTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Length of the rejected title in characters.
        actual: usize,
    },

    /// The description exceeds the configured maximum.
    #[error("task description must be at most {max} characters, got {actual}")]
    DescriptionTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Length of the rejected description in characters.
        actual: usize,
    },

    /// The search keyword is shorter than the configured minimum.
    #[error("search query must be at least {min} characters, got {actual}")]
    SearchQueryTooShort {
        /// Configured minimum length in characters.
        min: usize,
        /// Length of the rejected query in characters.
        actual: usize,
    },

    /// A persisted quadrant disagrees with the persisted importance and
    /// urgency flags.
    #[error(
        "task {task_id} stores quadrant {quadrant} but is_important={is_important}, \
         is_urgent={is_urgent}"
    )]
    QuadrantMismatch {
        /// Task carrying the inconsistent record.
        task_id: TaskId,
        /// Stored quadrant label.
        quadrant: Quadrant,
        /// Stored importance flag.
        is_important: bool,
        /// Stored urgency flag.
        is_urgent: bool,
    },
}

/// Error returned while parsing quadrant labels from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown quadrant: {0}, expected one of Q1, Q2, Q3, Q4")]
pub struct ParseQuadrantError(pub String);

/// Error returned while parsing task status labels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}, expected completed or pending")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing user role labels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown user role: {0}")]
pub struct ParseUserRoleError(pub String);
