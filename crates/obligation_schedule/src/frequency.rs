//! Filing frequency enumeration.

use std::fmt;
use std::str::FromStr;

use obligation_core::types::Date;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// How often an obligation has to be filed.
///
/// Only the recurring frequencies (`Monthly`, `Quarterly`, `Annual`) can be
/// expanded into a schedule. `OneTime` and `Conditional` obligations exist in
/// the record-keeping system but are never routed to the generator.
///
/// # Examples
///
/// ```
/// use obligation_schedule::Frequency;
///
/// let freq: Frequency = "QUARTERLY".parse().unwrap();
/// assert_eq!(freq, Frequency::Quarterly);
/// assert_eq!(freq.months_per_period(), Some(3));
/// assert!(freq.is_recurring());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    /// Filed once per calendar month.
    Monthly,
    /// Filed once per calendar quarter.
    Quarterly,
    /// Filed once per calendar year.
    Annual,
    /// Filed a single time; has no recurring schedule.
    OneTime,
    /// Filed only when a triggering event happens.
    Conditional,
}

impl Frequency {
    /// Returns the number of calendar months between period anchors, or
    /// `None` for frequencies without a recurring schedule.
    ///
    /// # Examples
    ///
    /// ```
    /// use obligation_schedule::Frequency;
    ///
    /// assert_eq!(Frequency::Monthly.months_per_period(), Some(1));
    /// assert_eq!(Frequency::Quarterly.months_per_period(), Some(3));
    /// assert_eq!(Frequency::Annual.months_per_period(), Some(12));
    /// assert_eq!(Frequency::OneTime.months_per_period(), None);
    /// ```
    #[inline]
    pub fn months_per_period(&self) -> Option<u32> {
        match self {
            Frequency::Monthly => Some(1),
            Frequency::Quarterly => Some(3),
            Frequency::Annual => Some(12),
            Frequency::OneTime | Frequency::Conditional => None,
        }
    }

    /// Returns whether the generator can expand this frequency.
    #[inline]
    pub fn is_recurring(&self) -> bool {
        self.months_per_period().is_some()
    }

    /// Returns the canonical record name for this frequency.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Monthly => "MONTHLY",
            Frequency::Quarterly => "QUARTERLY",
            Frequency::Annual => "ANNUAL",
            Frequency::OneTime => "ONE_TIME",
            Frequency::Conditional => "CONDITIONAL",
        }
    }

    /// Returns the anchor of the period containing `date`.
    ///
    /// Monthly periods start on the first of the month, quarterly periods on
    /// the first of January/April/July/October, annual periods on January 1st.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::UnsupportedFrequency` for non-recurring
    /// frequencies.
    pub fn period_anchor(&self, date: Date) -> Result<Date, ScheduleError> {
        match self {
            Frequency::Monthly => Ok(date.first_of_month()),
            Frequency::Quarterly => Ok(date.first_of_quarter()),
            Frequency::Annual => Ok(date.first_of_year()),
            Frequency::OneTime | Frequency::Conditional => Err(self.unsupported()),
        }
    }

    pub(crate) fn unsupported(&self) -> ScheduleError {
        ScheduleError::UnsupportedFrequency {
            frequency: self.name().to_string(),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Frequency {
    type Err = ScheduleError;

    /// Parses a stored frequency name (case-insensitive, `-` read as `_`).
    ///
    /// Accepted names: `MONTHLY`, `QUARTERLY`, `ANNUAL`, `ONE_TIME`,
    /// `CONDITIONAL`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "annual" => Ok(Frequency::Annual),
            "one_time" => Ok(Frequency::OneTime),
            "conditional" => Ok(Frequency::Conditional),
            _ => Err(ScheduleError::UnsupportedFrequency {
                frequency: s.to_string(),
            }),
        }
    }
}
