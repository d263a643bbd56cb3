//! Port contracts for task classification and lifecycle.
//!
//! Ports define infrastructure-agnostic interfaces used by task and
//! statistics services.

pub mod filter;
pub mod repository;

pub use filter::{DeadlineWindow, TaskFilter};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
