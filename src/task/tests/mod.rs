//! Unit tests for the task module.
//!
//! Tests are organised by layer: domain construction and identifier
//! parsing, then service orchestration over the in-memory adapter.
