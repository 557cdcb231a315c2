//! HTTP surface for the task resource.
//!
//! Axum router exposing JSON CRUD endpoints:
//!
//! ```text
//! GET    /tasks
//! POST   /tasks
//! GET    /tasks/{id}
//! PUT    /tasks/{id}
//! DELETE /tasks/{id}
//! GET    /health
//! ```
//!
//! Handlers are stateless and reentrant; the only shared state is the
//! injected CRUD service behind an [`Arc`].

pub mod error;
pub mod routes;

pub use error::ApiError;

use crate::task::{ports::TaskRepository, services::TaskCrudService};
use anyhow::Result;
use axum::{
    Router,
    routing::get,
};
use mockable::Clock;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Shared handler state: the injected CRUD service plus the body-decoding
/// mode.
pub struct ApiState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Task CRUD orchestration service.
    pub service: TaskCrudService<R, C>,
    /// When set, undecodable request bodies are rejected with 400 instead
    /// of collapsing to a zero-valued field set.
    pub strict_body: bool,
}

/// Builds the task API router over the given state.
pub fn build_router<R, C>(state: ApiState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let shared = Arc::new(state);
    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/tasks",
            get(routes::tasks::list_tasks::<R, C>).post(routes::tasks::create_task::<R, C>),
        )
        .route(
            "/tasks/{id}",
            get(routes::tasks::get_task::<R, C>)
                .put(routes::tasks::update_task::<R, C>)
                .delete(routes::tasks::delete_task::<R, C>),
        )
        .with_state(shared)
}

/// Binds the listener and serves the task API until the process exits.
///
/// # Errors
///
/// Returns an error when the address cannot be bound or the server fails.
pub async fn serve<R, C>(addr: SocketAddr, state: ApiState<R, C>) -> Result<()>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("task API listening on http://{addr}");
    axum::serve(listener, router).await?;
    Ok(())
}
