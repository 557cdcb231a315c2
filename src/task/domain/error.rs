//! Error types for task domain parsing.

use thiserror::Error;

/// Error returned while parsing task identifiers from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed task identifier: {0}")]
pub struct ParseTaskIdError(pub String);
