//! Eisenhower: task classification and statistics engine.
//!
//! This crate classifies tasks into the four quadrants of the Eisenhower
//! matrix from a declared importance flag and a deadline-derived urgency, and
//! summarises task collections by quadrant, status and time left.
//!
//! # Architecture
//!
//! Eisenhower follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`task`]: Task records, quadrant classification and lifecycle
//! - [`statistics`]: Quadrant, status, deadline and timing summaries
//! - [`clock`]: Clock implementations pinned to a reference instant

pub mod clock;
pub mod statistics;
pub mod task;
