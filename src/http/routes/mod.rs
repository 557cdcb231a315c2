//! Route handlers for the task API.

pub mod health;
pub mod tasks;
