//! Unit tests for the statistics bounded context.
