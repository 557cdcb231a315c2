//! Runtime configuration for the task service.

use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

/// Task service configuration, parsed from CLI flags and environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskboard", about = "Task CRUD service over HTTP")]
pub struct ServiceConfig {
    /// Address the HTTP server binds to.
    #[arg(long, env = "TASKBOARD_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// `PostgreSQL` connection URL. Required unless `--in-memory` is set.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Serve from the in-memory repository instead of `PostgreSQL`.
    /// Data does not survive a restart; intended for local smoke runs.
    #[arg(long)]
    pub in_memory: bool,

    /// Per-request bound on each storage call, in seconds.
    #[arg(long, env = "TASKBOARD_STORAGE_TIMEOUT_SECS", default_value_t = 10)]
    pub storage_timeout_secs: u64,

    /// Reject undecodable request bodies with 400 instead of treating
    /// them as a zero-valued task.
    #[arg(long, env = "TASKBOARD_STRICT_BODY_VALIDATION")]
    pub strict_body_validation: bool,
}

impl ServiceConfig {
    /// Returns the storage timeout as a [`Duration`].
    #[must_use]
    pub const fn storage_timeout(&self) -> Duration {
        Duration::from_secs(self.storage_timeout_secs)
    }
}
