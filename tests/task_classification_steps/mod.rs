//! Step definitions for task classification behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
