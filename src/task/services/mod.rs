//! Application services for task CRUD orchestration.

mod crud;

pub use crud::{TaskCrudService, TaskServiceError, TaskServiceResult};
