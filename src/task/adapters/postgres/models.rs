//! Diesel row models for task persistence.

use super::schema::tasks;
use crate::task::domain::{PersistedTaskData, Task, TaskId};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Free-form title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Free-form status label.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Free-form title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Free-form status label.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self::from_persisted(PersistedTaskData {
            id: TaskId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            status: row.status,
            created_at: row.created_at,
        })
    }
}

impl From<&Task> for NewTaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            status: task.status().to_owned(),
            created_at: task.created_at(),
        }
    }
}
