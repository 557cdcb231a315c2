//! Taskboard: a minimal task CRUD service over HTTP.
//!
//! This crate exposes create/read/update/delete operations for a single
//! `task` resource, backed by a document-style repository.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, memory)
//!
//! # Modules
//!
//! - [`task`]: Task domain, repository port, adapters, and CRUD services
//! - [`http`]: Axum router and request handlers
//! - [`config`]: Runtime configuration parsed from flags and environment

pub mod config;
pub mod http;
pub mod task;
