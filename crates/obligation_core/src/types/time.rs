//! Date type and UTC calendar helpers for filing periods.
//!
//! This module provides:
//! - `Date`: Type-safe, date-only wrapper around chrono::NaiveDate
//! - Period boundary helpers (first/last day of month, quarter, year)
//! - Checked month/year/day arithmetic on calendar fields
//!
//! All arithmetic works on year/month/day fields and never consults a local
//! timezone, so month, quarter and year boundaries are identical on every host.
//!
//! # Examples
//!
//! ```
//! use obligation_core::types::time::Date;
//!
//! let anchor = Date::from_ymd(2024, 1, 1).unwrap();
//! let next = anchor.checked_add_months(1).unwrap();
//! assert_eq!(next, Date::from_ymd(2024, 2, 1).unwrap());
//! assert_eq!(next.last_of_month(), Date::from_ymd(2024, 2, 29).unwrap());
//! ```

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, Utc};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Returns the number of days in `month` (1-12) of `year`.
///
/// # Examples
///
/// ```
/// use obligation_core::types::time::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29);
/// assert_eq!(days_in_month(2023, 2).unwrap(), 28);
/// assert_eq!(days_in_month(2024, 4).unwrap(), 30);
/// assert!(days_in_month(2024, 13).is_err());
/// ```
pub fn days_in_month(year: i32, month: u32) -> Result<u32, DateError> {
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidDate {
            year,
            month,
            day: 1,
        });
    }
    Ok(month_length(year, month))
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

// Caller guarantees 1 <= month <= 12.
fn month_length(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Type-safe, date-only wrapper around chrono::NaiveDate.
///
/// Time-of-day never participates in any calculation: a `Date` denotes a
/// whole UTC calendar day. Serialises as ISO 8601 (`YYYY-MM-DD`).
///
/// # Examples
///
/// ```
/// use obligation_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use obligation_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.day(), 29);
    ///
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Creates a Date, clamping `day` to the last day of the month.
    ///
    /// `month` must be 1-12 and `day` at least 1; a day past the end of the
    /// month resolves to the month's last day (e.g. the 31st of April is
    /// April 30th).
    ///
    /// # Examples
    ///
    /// ```
    /// use obligation_core::types::time::Date;
    ///
    /// let clamped = Date::with_day_clamped(2025, 2, 31).unwrap();
    /// assert_eq!(clamped, Date::from_ymd(2025, 2, 28).unwrap());
    ///
    /// assert!(Date::with_day_clamped(2025, 0, 10).is_err());
    /// assert!(Date::with_day_clamped(2025, 3, 0).is_err());
    /// ```
    pub fn with_day_clamped(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if day == 0 {
            return Err(DateError::InvalidDate { year, month, day });
        }
        let length = days_in_month(year, month)?;
        Self::from_ymd(year, month, day.min(length))
    }

    /// Returns today's date on the UTC clock.
    ///
    /// Only callers that own a "now" policy should use this; schedule
    /// generation itself never reads the clock.
    pub fn today_utc() -> Self {
        Date(Utc::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use obligation_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// assert!(Date::parse("15/06/2024").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the calendar quarter (1-4) containing this date.
    ///
    /// # Examples
    ///
    /// ```
    /// use obligation_core::types::time::Date;
    ///
    /// assert_eq!(Date::from_ymd(2024, 1, 31).unwrap().quarter(), 1);
    /// assert_eq!(Date::from_ymd(2024, 4, 1).unwrap().quarter(), 2);
    /// assert_eq!(Date::from_ymd(2024, 12, 31).unwrap().quarter(), 4);
    /// ```
    pub fn quarter(&self) -> u32 {
        (self.month() - 1) / 3 + 1
    }

    /// Returns the first day of this date's month.
    pub fn first_of_month(&self) -> Self {
        Date(self.0 - Days::new(u64::from(self.day() - 1)))
    }

    /// Returns the first day of this date's calendar quarter.
    ///
    /// The month is floored to the nearest quarter start (January, April,
    /// July, October).
    pub fn first_of_quarter(&self) -> Self {
        let months_into_quarter = (self.month() - 1) % 3;
        Date(self.first_of_month().0 - Months::new(months_into_quarter))
    }

    /// Returns January 1st of this date's year.
    pub fn first_of_year(&self) -> Self {
        Date(self.0 - Days::new(u64::from(self.0.ordinal0())))
    }

    /// Returns the last day of this date's month.
    ///
    /// # Examples
    ///
    /// ```
    /// use obligation_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2023, 2, 10).unwrap();
    /// assert_eq!(date.last_of_month(), Date::from_ymd(2023, 2, 28).unwrap());
    /// ```
    pub fn last_of_month(&self) -> Self {
        let length = month_length(self.year(), self.month());
        Date(self.0 + Days::new(u64::from(length - self.day())))
    }

    /// Returns the last day of this date's calendar quarter.
    ///
    /// # Examples
    ///
    /// ```
    /// use obligation_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 8, 3).unwrap();
    /// assert_eq!(date.last_of_quarter(), Date::from_ymd(2024, 9, 30).unwrap());
    /// ```
    pub fn last_of_quarter(&self) -> Self {
        // Final month of a quarter never leaves the current year.
        Date(self.first_of_quarter().0 + Months::new(2)).last_of_month()
    }

    /// Returns December 31st of this date's year.
    pub fn last_of_year(&self) -> Self {
        let days_in_year = if is_leap_year(self.year()) { 366 } else { 365 };
        Date(self.0 + Days::new(u64::from(days_in_year - self.0.ordinal())))
    }

    /// Adds calendar months, clamping the day to the target month's length.
    ///
    /// # Errors
    ///
    /// Returns `DateError::OutOfRange` when the result is not representable.
    ///
    /// # Examples
    ///
    /// ```
    /// use obligation_core::types::time::Date;
    ///
    /// let jan31 = Date::from_ymd(2024, 1, 31).unwrap();
    /// assert_eq!(
    ///     jan31.checked_add_months(1).unwrap(),
    ///     Date::from_ymd(2024, 2, 29).unwrap()
    /// );
    /// ```
    pub fn checked_add_months(&self, months: u32) -> Result<Self, DateError> {
        self.0
            .checked_add_months(Months::new(months))
            .map(Date)
            .ok_or_else(|| DateError::OutOfRange(format!("adding {} months to {}", months, self)))
    }

    /// Adds whole calendar years (February 29th clamps to February 28th).
    ///
    /// # Errors
    ///
    /// Returns `DateError::OutOfRange` when the result is not representable.
    pub fn checked_add_years(&self, years: u32) -> Result<Self, DateError> {
        let months = years
            .checked_mul(12)
            .ok_or_else(|| DateError::OutOfRange(format!("adding {} years to {}", years, self)))?;
        self.checked_add_months(months)
    }

    /// Adds calendar days.
    ///
    /// # Errors
    ///
    /// Returns `DateError::OutOfRange` when the result is not representable.
    pub fn checked_add_days(&self, days: u64) -> Result<Self, DateError> {
        self.0
            .checked_add_days(Days::new(days))
            .map(Date)
            .ok_or_else(|| DateError::OutOfRange(format!("adding {} days to {}", days, self)))
    }

    /// Returns this date as a UTC date-time at midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use obligation_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 2, 15).unwrap();
    /// assert_eq!(date.midnight_utc().to_rfc3339(), "2024-02-15T00:00:00+00:00");
    /// ```
    pub fn midnight_utc(&self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
