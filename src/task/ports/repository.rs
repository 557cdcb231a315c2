//! Repository port for task persistence and lookup.
//!
//! The port replaces ad hoc key-value query filters with an enumerable
//! contract: lookups are keyed by [`TaskId`] and updates carry a typed
//! [`TaskFields`] payload, so the gateway is testable without a store
//! driver.

use crate::task::domain::{Task, TaskFields, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every operation is a single attempt against the store; implementations
/// perform no retries and surface driver failures unchanged in kind.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task, in store-native order.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Stores a new task under its server-assigned identifier.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Replaces exactly the title, description, and status of the task
    /// with the given identifier.
    ///
    /// An identifier matching no document completes successfully without
    /// signalling not-found; callers own that contract.
    async fn update_fields(&self, id: TaskId, fields: &TaskFields) -> TaskRepositoryResult<()>;

    /// Hard-deletes the task with the given identifier.
    ///
    /// Same unmatched-identifier contract as [`Self::update_fields`].
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
