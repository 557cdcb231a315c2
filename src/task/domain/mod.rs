//! Domain model for the task resource.
//!
//! The task domain models server-assigned identity, creation timestamps,
//! and the mutable field set, keeping all infrastructure concerns outside
//! of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::ParseTaskIdError;
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskFields};
