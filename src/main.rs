//! Task service entry point.
//!
//! Startup ordering: load configuration, initialise tracing, connect the
//! store, register routes, listen.

use anyhow::{Context, Result};
use clap::Parser;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::config::ServiceConfig;
use taskboard::http::{ApiState, serve};
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::adapters::postgres::PostgresTaskRepository;
use taskboard::task::ports::TaskRepository;
use taskboard::task::services::TaskCrudService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if config.in_memory {
        tracing::warn!("serving from the in-memory repository; data will not persist");
        run(config, Arc::new(InMemoryTaskRepository::new())).await
    } else {
        let database_url = config
            .database_url
            .clone()
            .context("DATABASE_URL is required unless --in-memory is set")?;
        let pool = Pool::builder()
            .build(ConnectionManager::new(database_url))
            .context("failed to build PostgreSQL connection pool")?;
        run(config, Arc::new(PostgresTaskRepository::new(pool))).await
    }
}

async fn run<R: TaskRepository + 'static>(config: ServiceConfig, repository: Arc<R>) -> Result<()> {
    let service = TaskCrudService::new(repository, Arc::new(DefaultClock))
        .with_storage_timeout(config.storage_timeout());
    let state = ApiState {
        service,
        strict_body: config.strict_body_validation,
    };
    serve(config.bind, state).await
}
