//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod schedule;

use std::path::Path;

use obligation_schedule::ObligationRecord;
use tracing::debug;

use crate::{CliError, Result};

/// Reads a JSON array of obligation records from `path`.
pub fn load_records(path: &Path) -> Result<Vec<ObligationRecord>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let records: Vec<ObligationRecord> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), count = records.len(), "loaded obligation records");
    Ok(records)
}
