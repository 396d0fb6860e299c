//! Unit tests for the task bounded context.
//!
//! Tests are organised by layer, covering happy paths, error cases, and
//! edge cases for the domain values, the in-memory adapter, and the
//! orchestration service.

mod domain_tests;
mod repository_tests;
