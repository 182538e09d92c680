//! Schedule occurrences produced by the generator.

use std::fmt;

use chrono::{DateTime, Utc};
use obligation_core::types::Date;
use serde::{Serialize, Serializer};

/// Filing status of an occurrence.
///
/// The generator only ever produces `Due`; later transitions belong to the
/// record-keeping system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccurrenceStatus {
    /// Not yet filed.
    #[default]
    Due,
    /// Filed on time.
    Filed,
    /// Filed after the due date, or overdue.
    Late,
    /// Filing waived for this period.
    Exempt,
}

impl OccurrenceStatus {
    /// Returns the stored status name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OccurrenceStatus::Due => "DUE",
            OccurrenceStatus::Filed => "FILED",
            OccurrenceStatus::Late => "LATE",
            OccurrenceStatus::Exempt => "EXEMPT",
        }
    }
}

impl fmt::Display for OccurrenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One concrete filing of an obligation for one period.
///
/// Serialises as
/// `{"org_obligation_id", "period", "due_date", "status", "filed_at"}` with
/// `due_date` rendered as a UTC-midnight date-time.
///
/// # Examples
///
/// ```
/// use obligation_core::types::Date;
/// use obligation_schedule::{OccurrenceStatus, ScheduleOccurrence};
///
/// let occurrence = ScheduleOccurrence::due(
///     "org-1/vat",
///     "2024-Q1".to_string(),
///     Date::from_ymd(2024, 3, 31).unwrap(),
/// );
/// assert_eq!(occurrence.status(), OccurrenceStatus::Due);
/// assert!(occurrence.filed_at().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScheduleOccurrence {
    org_obligation_id: String,
    period: String,
    #[serde(serialize_with = "serialize_midnight_utc")]
    due_date: Date,
    status: OccurrenceStatus,
    filed_at: Option<DateTime<Utc>>,
}

impl ScheduleOccurrence {
    /// Creates a freshly generated occurrence: status `Due`, never filed.
    pub fn due(org_obligation_id: impl Into<String>, period: String, due_date: Date) -> Self {
        Self {
            org_obligation_id: org_obligation_id.into(),
            period,
            due_date,
            status: OccurrenceStatus::Due,
            filed_at: None,
        }
    }

    /// Returns the organization-obligation link this occurrence belongs to.
    #[inline]
    pub fn org_obligation_id(&self) -> &str {
        &self.org_obligation_id
    }

    /// Returns the period label (`YYYY-MM`, `YYYY-Q<n>` or `YYYY`).
    #[inline]
    pub fn period(&self) -> &str {
        &self.period
    }

    /// Returns the due date.
    #[inline]
    pub fn due_date(&self) -> Date {
        self.due_date
    }

    /// Returns the filing status.
    #[inline]
    pub fn status(&self) -> OccurrenceStatus {
        self.status
    }

    /// Returns when the occurrence was filed, if ever.
    #[inline]
    pub fn filed_at(&self) -> Option<DateTime<Utc>> {
        self.filed_at
    }
}

fn serialize_midnight_utc<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    date.midnight_utc().serialize(serializer)
}
