//! Task management for Aalto.
//!
//! This module implements the task domain model, its storage abstraction,
//! and the orchestration service enforcing the invariants around them. It
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
