//! Service layer for task creation, retrieval, update, and deletion.

use crate::task::{
    domain::{Task, TaskFields, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use mockable::Clock;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Default bound applied to each storage call.
pub const DEFAULT_STORAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Service-level errors for task CRUD operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Repository operation exceeded the configured bound.
    #[error("storage operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type for task CRUD service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task CRUD orchestration service.
///
/// The repository and clock are injected at construction; handlers never
/// reach for ambient state. Each storage call is a single attempt bounded
/// by the configured timeout.
#[derive(Clone)]
pub struct TaskCrudService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    storage_timeout: Duration,
}

impl<R, C> TaskCrudService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task CRUD service with the default storage timeout.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            storage_timeout: DEFAULT_STORAGE_TIMEOUT,
        }
    }

    /// Overrides the per-call storage timeout.
    #[must_use]
    pub const fn with_storage_timeout(mut self, timeout: Duration) -> Self {
        self.storage_timeout = timeout;
        self
    }

    async fn bounded<T>(
        &self,
        operation: impl Future<Output = TaskRepositoryResult<T>> + Send,
    ) -> TaskServiceResult<T> {
        tokio::time::timeout(self.storage_timeout, operation)
            .await
            .map_err(|_| TaskServiceError::Timeout(self.storage_timeout))?
            .map_err(TaskServiceError::from)
    }

    /// Returns every stored task, in store-native order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the repository fails or times out.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        self.bounded(self.repository.list_all()).await
    }

    /// Creates a task from client-supplied fields.
    ///
    /// Identity and creation timestamp are assigned here, server-side;
    /// the returned task is the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when persistence fails or times out.
    pub async fn create(&self, fields: TaskFields) -> TaskServiceResult<Task> {
        let task = Task::new(fields, &*self.clock);
        self.bounded(self.repository.insert(&task)).await?;
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task carries the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the repository fails or times out.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        self.bounded(self.repository.find_by_id(id)).await
    }

    /// Replaces the title, description, and status of the identified task.
    ///
    /// An identifier matching no task completes as a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the repository fails or times out.
    pub async fn update(&self, id: TaskId, fields: &TaskFields) -> TaskServiceResult<()> {
        self.bounded(self.repository.update_fields(id, fields)).await
    }

    /// Hard-deletes the identified task.
    ///
    /// An identifier matching no task completes as a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the repository fails or times out.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.bounded(self.repository.delete_by_id(id)).await
    }
}
