//! Aalto: interactive command-line task management.
//!
//! This crate provides the core functionality for tracking todo tasks from
//! an interactive prompt: a validated task domain, a storage abstraction
//! with an in-memory adapter, an orchestration service, and JSON file
//! persistence across sessions.
//!
//! # Architecture
//!
//! Aalto follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory storage,
//!   the JSON store file)
//!
//! # Modules
//!
//! - [`task`]: Task domain, storage port and adapters, orchestration service
//! - [`repl`]: Line parsing, presentation, and the interactive loop
//! - [`logging`]: Log facade bootstrap for the binary

pub mod logging;
pub mod repl;
pub mod task;
