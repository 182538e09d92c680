//! Query windows for schedule generation.

use obligation_core::types::Date;

use crate::error::ScheduleError;
use crate::generator;
use crate::obligation::ObligationDescriptor;
use crate::occurrence::ScheduleOccurrence;

/// Number of days a window spans when the caller gives no end date.
pub const DEFAULT_WINDOW_DAYS: u64 = 365;

/// An inclusive `[start, end]` date range.
///
/// # Examples
///
/// ```
/// use obligation_core::types::Date;
/// use obligation_schedule::ScheduleWindow;
///
/// let today = Date::from_ymd(2024, 3, 1).unwrap();
/// let window = ScheduleWindow::resolve(None, None, today, 365).unwrap();
///
/// assert_eq!(window.start(), today);
/// assert_eq!(window.end(), Date::from_ymd(2025, 3, 1).unwrap());
/// assert!(window.contains(Date::from_ymd(2025, 3, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleWindow {
    start: Date,
    end: Date,
}

impl ScheduleWindow {
    /// Creates a window; `start > end` gives an empty window.
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Creates the window `[start, start + days]`.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::DateOverflow` if the end is not representable.
    pub fn starting(start: Date, days: u64) -> Result<Self, ScheduleError> {
        Ok(Self::new(start, start.checked_add_days(days)?))
    }

    /// Fills in missing bounds: `start` defaults to `today`, `end` to
    /// `today + default_days`.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::DateOverflow` if the default end is not
    /// representable.
    pub fn resolve(
        start: Option<Date>,
        end: Option<Date>,
        today: Date,
        default_days: u64,
    ) -> Result<Self, ScheduleError> {
        let end = match end {
            Some(end) => end,
            None => today.checked_add_days(default_days)?,
        };
        Ok(Self::new(start.unwrap_or(today), end))
    }

    /// Returns the first day of the window.
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of the window.
    #[inline]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns whether no date can fall inside the window.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Returns whether `date` lies inside the window (both ends inclusive).
    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Generates one obligation's occurrences due inside this window.
    pub fn generate(
        &self,
        descriptor: &ObligationDescriptor,
    ) -> Result<Vec<ScheduleOccurrence>, ScheduleError> {
        generator::generate(descriptor, self.start, self.end)
    }

    /// Generates the merged schedule of several obligations due inside this window.
    pub fn generate_all<'a, I>(
        &self,
        descriptors: I,
    ) -> Result<Vec<ScheduleOccurrence>, ScheduleError>
    where
        I: IntoIterator<Item = &'a ObligationDescriptor>,
    {
        generator::generate_all(descriptors, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_contains_is_inclusive() {
        let window = ScheduleWindow::new(d(2024, 1, 1), d(2024, 3, 31));
        assert!(window.contains(d(2024, 1, 1)));
        assert!(window.contains(d(2024, 3, 31)));
        assert!(!window.contains(d(2023, 12, 31)));
        assert!(!window.contains(d(2024, 4, 1)));
    }

    #[test]
    fn test_resolve_defaults_end_from_today() {
        let today = d(2024, 6, 1);
        let window = ScheduleWindow::resolve(Some(d(2024, 1, 1)), None, today, DEFAULT_WINDOW_DAYS)
            .unwrap();
        assert_eq!(window.start(), d(2024, 1, 1));
        assert_eq!(window.end(), d(2025, 6, 1));
    }

    #[test]
    fn test_resolve_keeps_explicit_bounds() {
        let window =
            ScheduleWindow::resolve(Some(d(2024, 1, 1)), Some(d(2024, 2, 1)), d(2030, 1, 1), 10)
                .unwrap();
        assert_eq!(window, ScheduleWindow::new(d(2024, 1, 1), d(2024, 2, 1)));
    }

    #[test]
    fn test_starting() {
        let window = ScheduleWindow::starting(d(2023, 1, 1), 365).unwrap();
        assert_eq!(window.end(), d(2024, 1, 1));
        assert!(!window.is_empty());
        assert!(ScheduleWindow::new(d(2024, 2, 1), d(2024, 1, 1)).is_empty());
    }
}
