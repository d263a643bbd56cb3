//! Task classification and lifecycle management.
//!
//! Tasks are placed in one of the four Eisenhower quadrants from a declared
//! importance flag and a deadline-derived urgency. The classification is
//! computed when a task is created and again whenever an edit touches its
//! importance or deadline; other edits and completion leave it as it was. The
//! module follows hexagonal architecture:
//!
//! - Domain types and the classifier in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod tests;
