//! Task aggregate root and its mutable field set.

use super::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Client-suppliable task fields.
///
/// Used both as the creation payload and as the scoped update payload:
/// an update replaces exactly these three fields and nothing else. All
/// fields default to the empty string, so an absent or undecodable body
/// yields a zero-valued field set rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    /// Free-form task title. No length or format constraint.
    #[serde(default)]
    pub title: String,
    /// Free-form task description.
    #[serde(default)]
    pub description: String,
    /// Free-form status label. Any string is accepted.
    #[serde(default)]
    pub status: String,
}

impl TaskFields {
    /// Creates a field set from owned or borrowed string values.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: status.into(),
        }
    }
}

/// Task aggregate root.
///
/// `id` and `created_at` are assigned exactly once, at creation, by the
/// server; [`Task::apply_fields`] can never touch them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: String,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted status label.
    pub status: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from client-supplied fields.
    ///
    /// The identifier is freshly generated and `created_at` is taken from
    /// the injected clock; any client-supplied identity or timestamp has
    /// already been discarded by the payload type.
    #[must_use]
    pub fn new(fields: TaskFields, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title: fields.title,
            description: fields.description,
            status: fields.status,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted data.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
        }
    }

    /// Replaces the mutable field set, leaving identity and creation
    /// timestamp untouched.
    pub fn apply_fields(&mut self, fields: &TaskFields) {
        self.title = fields.title.clone();
        self.description = fields.description.clone();
        self.status = fields.status.clone();
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status label.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
