//! Domain model for task classification and lifecycle.
//!
//! The task domain models task records, their Eisenhower quadrant
//! classification, field validation and requester visibility while keeping
//! all infrastructure concerns outside of the domain boundary.

mod access;
mod classification;
mod error;
mod ids;
mod status;
mod task;
mod text;

pub use access::{Requester, TaskScope, UserRole};
pub use classification::{
    Classification, Quadrant, URGENCY_THRESHOLD_DAYS, classify, days_left, is_urgent_at,
};
pub use error::{ParseQuadrantError, ParseTaskStatusError, ParseUserRoleError, TaskDomainError};
pub use ids::{TaskId, UserId};
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task, TaskChanges};
pub use text::{SearchQuery, TaskDescription, TaskTitle, TaskValidationConfig};
