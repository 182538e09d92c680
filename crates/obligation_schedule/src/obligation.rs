//! Obligation descriptors: the generator's view of an organization-obligation link.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::due_rule::DueRule;
use crate::error::ScheduleError;
use crate::frequency::Frequency;

/// A typed, validated obligation ready for schedule generation.
///
/// # Examples
///
/// ```
/// use obligation_schedule::{DueRule, Frequency, ObligationDescriptor};
///
/// let descriptor = ObligationDescriptor::new(
///     "org-42/vat-return",
///     Frequency::Quarterly,
///     DueRule::Legacy("last day of quarter".to_string()),
/// );
/// assert_eq!(descriptor.id(), "org-42/vat-return");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObligationDescriptor {
    id: String,
    frequency: Frequency,
    due_rule: DueRule,
}

impl ObligationDescriptor {
    /// Creates a descriptor from already-typed parts.
    pub fn new(id: impl Into<String>, frequency: Frequency, due_rule: DueRule) -> Self {
        Self {
            id: id.into(),
            frequency,
            due_rule,
        }
    }

    /// Returns the organization-obligation link identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the filing frequency.
    #[inline]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the due rule.
    #[inline]
    pub fn due_rule(&self) -> &DueRule {
        &self.due_rule
    }
}

/// An obligation exactly as the record-keeping system stores it.
///
/// Frequency and due rule are kept loosely typed so that a bad record can be
/// reported with its offending value instead of failing at deserialisation.
///
/// # Examples
///
/// ```
/// use obligation_schedule::{ObligationRecord, ScheduleError};
/// use serde_json::json;
///
/// let record: ObligationRecord = serde_json::from_value(json!({
///     "id": "org-7/payroll",
///     "frequency": "daily",
///     "due_rule": "15th of month"
/// }))
/// .unwrap();
///
/// assert!(matches!(
///     record.to_descriptor(),
///     Err(ScheduleError::UnsupportedFrequency { .. })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObligationRecord {
    /// Organization-obligation link identifier.
    pub id: String,
    /// Frequency name, e.g. `"MONTHLY"`.
    pub frequency: String,
    /// Due rule in its stored JSON shape.
    pub due_rule: Value,
}

impl ObligationRecord {
    /// Validates the record into a typed descriptor.
    ///
    /// # Errors
    ///
    /// - `ScheduleError::UnsupportedFrequency` if the frequency name is unknown
    /// - `ScheduleError::UnsupportedDueRule` if the due rule shape is unknown
    pub fn to_descriptor(&self) -> Result<ObligationDescriptor, ScheduleError> {
        ObligationDescriptor::try_from(self)
    }
}

impl TryFrom<&ObligationRecord> for ObligationDescriptor {
    type Error = ScheduleError;

    fn try_from(record: &ObligationRecord) -> Result<Self, Self::Error> {
        let frequency = record.frequency.parse::<Frequency>()?;
        let due_rule = DueRule::from_value(&record.due_rule)?;
        Ok(ObligationDescriptor::new(record.id.clone(), frequency, due_rule))
    }
}

impl From<&ObligationDescriptor> for ObligationRecord {
    fn from(descriptor: &ObligationDescriptor) -> Self {
        ObligationRecord {
            id: descriptor.id.clone(),
            frequency: descriptor.frequency.name().to_string(),
            due_rule: descriptor.due_rule.to_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::due_rule::RelativeTo;
    use serde_json::json;

    fn record(frequency: &str, due_rule: Value) -> ObligationRecord {
        ObligationRecord {
            id: "org-1/sales-tax".to_string(),
            frequency: frequency.to_string(),
            due_rule,
        }
    }

    #[test]
    fn test_record_to_descriptor() {
        let descriptor = record(
            "MONTHLY",
            json!({"day": 15, "relative_to": "calendar_month_end"}),
        )
        .to_descriptor()
        .unwrap();

        assert_eq!(descriptor.id(), "org-1/sales-tax");
        assert_eq!(descriptor.frequency(), Frequency::Monthly);
        assert_eq!(
            descriptor.due_rule(),
            &DueRule::FixedDayRelative {
                day: 15,
                relative_to: RelativeTo::CalendarMonthEnd
            }
        );
    }

    #[test]
    fn test_frequency_checked_before_rule() {
        let err = record("daily", json!({"weird": true}))
            .to_descriptor()
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::UnsupportedFrequency {
                frequency: "daily".to_string()
            }
        );
    }

    #[test]
    fn test_bad_rule_names_offender() {
        let err = record("ANNUAL", json!({"month": 2})).to_descriptor().unwrap_err();
        assert_eq!(
            err,
            ScheduleError::UnsupportedDueRule {
                rule: r#"{"month":2}"#.to_string()
            }
        );
    }

    #[test]
    fn test_descriptor_back_to_record() {
        let descriptor = ObligationDescriptor::new(
            "org-9/annual-return",
            Frequency::Annual,
            DueRule::FiscalYearEnd { month: 6, day: 30 },
        );
        let stored = ObligationRecord::from(&descriptor);
        assert_eq!(stored.frequency, "ANNUAL");
        assert_eq!(stored.to_descriptor().unwrap(), descriptor);
    }
}
