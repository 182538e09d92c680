//! Check command implementation
//!
//! Validates every stored obligation record: the frequency must be known and
//! the due rule must compile for it.

use std::io::Write;
use std::path::Path;

use obligation_schedule::{ObligationRecord, ScheduleError};
use tracing::{info, warn};

use super::load_records;
use crate::{CliError, Result};

/// Outcome of validating one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordStatus {
    /// Record can be scheduled
    Valid,
    /// Record is valid but its frequency never reaches the generator
    NotScheduled,
    /// Record is rejected
    Invalid(ScheduleError),
}

/// Validates a single record.
pub fn check_record(record: &ObligationRecord) -> RecordStatus {
    let descriptor = match record.to_descriptor() {
        Ok(descriptor) => descriptor,
        Err(err) => return RecordStatus::Invalid(err),
    };
    if let Err(err) = descriptor.due_rule().compile(descriptor.frequency()) {
        return RecordStatus::Invalid(err);
    }
    if !descriptor.frequency().is_recurring() {
        return RecordStatus::NotScheduled;
    }
    RecordStatus::Valid
}

/// Run the check command
///
/// Writes one line per record and fails with `CliError::InvalidObligations`
/// when any record is rejected. Returns the number of schedulable records.
pub fn run<W: Write>(obligations: &Path, out: &mut W) -> Result<usize> {
    let records = load_records(obligations)?;

    let mut valid = 0;
    let mut invalid = 0;
    for record in &records {
        match check_record(record) {
            RecordStatus::Valid => {
                valid += 1;
                writeln!(out, "ok       {}", record.id)?;
            }
            RecordStatus::NotScheduled => {
                writeln!(
                    out,
                    "skipped  {} (frequency {} is not recurring)",
                    record.id, record.frequency
                )?;
            }
            RecordStatus::Invalid(err) => {
                invalid += 1;
                warn!(obligation = %record.id, error = %err, "invalid obligation record");
                writeln!(out, "invalid  {}: {}", record.id, err)?;
            }
        }
    }

    info!(total = records.len(), valid, invalid, "check complete");
    if invalid > 0 {
        return Err(CliError::InvalidObligations { count: invalid });
    }
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(frequency: &str, due_rule: serde_json::Value) -> ObligationRecord {
        ObligationRecord {
            id: "org-5/filing".to_string(),
            frequency: frequency.to_string(),
            due_rule,
        }
    }

    #[test]
    fn test_valid_record() {
        assert_eq!(
            check_record(&record("QUARTERLY", json!("last day of quarter"))),
            RecordStatus::Valid
        );
    }

    #[test]
    fn test_legacy_text_checked_at_compile() {
        // Legacy strings decode fine and are only rejected once compiled.
        assert!(matches!(
            check_record(&record("MONTHLY", json!("end of the month"))),
            RecordStatus::Invalid(ScheduleError::UnsupportedDueRule { .. })
        ));
    }

    #[test]
    fn test_one_time_not_scheduled() {
        assert_eq!(
            check_record(&record("ONE_TIME", json!({"month": 6, "day": 30}))),
            RecordStatus::NotScheduled
        );
    }

    #[test]
    fn test_unknown_frequency_invalid() {
        assert!(matches!(
            check_record(&record("weekly", json!({"month": 6, "day": 30}))),
            RecordStatus::Invalid(ScheduleError::UnsupportedFrequency { .. })
        ));
    }
}
