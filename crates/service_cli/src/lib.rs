//! Obligations CLI - Command Line Operations for Filing Schedules
//!
//! Library half of the `obligations` binary: configuration, errors and the
//! command implementations, kept here so they can be exercised from tests.
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate owns every caller-side policy the
//! schedule kernel leaves open: reading stored records, choosing the default
//! window from the clock, and rendering output.

pub mod commands;
pub mod config;
mod error;

pub use error::{CliError, Result};

// Re-export kernel crates for integration
pub use obligation_core;
pub use obligation_schedule;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
