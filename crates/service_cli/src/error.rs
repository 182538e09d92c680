//! CLI error types

use obligation_core::types::DateError;
use obligation_schedule::ScheduleError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("{count} obligation record(s) failed validation")]
    InvalidObligations { count: usize },

    #[error("Failed to read obligations: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
