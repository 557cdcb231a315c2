//! Task resource management for Taskboard.
//!
//! This module implements the full lifecycle of the `task` resource:
//! server-side identity and creation-timestamp assignment, retrieval by
//! identifier, scoped field updates, and hard deletion. The module follows
//! hexagonal architecture:
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
