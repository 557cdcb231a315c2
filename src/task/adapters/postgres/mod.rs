//! `PostgreSQL` adapters for task persistence.

mod models;
mod repository;
mod schema;

pub use models::{NewTaskRow, TaskRow};
pub use repository::{PostgresTaskRepository, TaskPgPool};
