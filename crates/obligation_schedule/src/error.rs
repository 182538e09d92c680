//! Schedule generation error types.

use obligation_core::types::DateError;
use thiserror::Error;

/// Errors that can occur while interpreting due rules or generating schedules.
///
/// `UnsupportedFrequency` and `UnsupportedDueRule` point at a badly configured
/// obligation record; retrying the same call will fail the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The obligation's frequency is not one the generator can walk.
    #[error("Unsupported frequency: {frequency}")]
    UnsupportedFrequency {
        /// The offending frequency as written in the record.
        frequency: String,
    },

    /// The due rule does not match any recognised shape.
    #[error("Unsupported due rule: {rule}")]
    UnsupportedDueRule {
        /// The offending rule, rendered as JSON (strings keep their quotes).
        rule: String,
    },

    /// Date arithmetic overflow.
    #[error("Date arithmetic overflow: {reason}")]
    DateOverflow {
        /// Reason for the overflow.
        reason: String,
    },
}

impl ScheduleError {
    pub(crate) fn unsupported_rule(rule: impl ToString) -> Self {
        ScheduleError::UnsupportedDueRule {
            rule: rule.to_string(),
        }
    }
}

impl From<DateError> for ScheduleError {
    fn from(err: DateError) -> Self {
        ScheduleError::DateOverflow {
            reason: err.to_string(),
        }
    }
}
