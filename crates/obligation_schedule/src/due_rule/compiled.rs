//! Due-rule interpretation: turning a [`DueRule`] into an anchor → due-date function.

use obligation_core::types::Date;

use super::legacy::{self, LegacyRule};
use super::{DueRule, RelativeTo};
use crate::error::ScheduleError;
use crate::frequency::Frequency;

/// A due rule bound to a frequency, ready to evaluate period anchors.
///
/// Compiling reads legacy text once; evaluating never looks at strings or the
/// clock, so the same anchor always yields the same due date.
///
/// # Examples
///
/// ```
/// use obligation_core::types::Date;
/// use obligation_schedule::{DueRule, Frequency, RelativeTo};
///
/// let rule = DueRule::FixedDayRelative { day: 20, relative_to: RelativeTo::FiscalQuarterEnd };
/// let compiled = rule.compile(Frequency::Quarterly).unwrap();
///
/// let anchor = Date::from_ymd(2024, 10, 1).unwrap();
/// assert_eq!(compiled.due_date(anchor).unwrap(), Date::from_ymd(2025, 1, 20).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompiledDueRule {
    target: DueTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DueTarget {
    /// `day` of the month `months_after` months past the anchor's month.
    DayOfLaterMonth { months_after: u32, day: u32 },
    /// `day` of `month` in the anchor's year plus `years_after`.
    MonthDay { years_after: i32, month: u32, day: u32 },
    /// `day` of the anchor's own month.
    DayOfAnchorMonth { day: u32 },
    LastOfMonth,
    LastOfQuarter,
}

impl CompiledDueRule {
    /// Computes the due date for the period starting at `anchor`.
    ///
    /// Days past the end of the target month are clamped to its last day.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::DateOverflow` when the due date falls outside
    /// the representable calendar.
    pub fn due_date(&self, anchor: Date) -> Result<Date, ScheduleError> {
        let due = match self.target {
            DueTarget::DayOfLaterMonth { months_after, day } => {
                let month = anchor.first_of_month().checked_add_months(months_after)?;
                Date::with_day_clamped(month.year(), month.month(), day)?
            }
            DueTarget::MonthDay {
                years_after,
                month,
                day,
            } => {
                let year = anchor.year().checked_add(years_after).ok_or_else(|| {
                    ScheduleError::DateOverflow {
                        reason: format!("adding {} years to {}", years_after, anchor),
                    }
                })?;
                Date::with_day_clamped(year, month, day)?
            }
            DueTarget::DayOfAnchorMonth { day } => {
                Date::with_day_clamped(anchor.year(), anchor.month(), day)?
            }
            DueTarget::LastOfMonth => anchor.last_of_month(),
            DueTarget::LastOfQuarter => anchor.last_of_quarter(),
        };
        Ok(due)
    }
}

impl DueRule {
    /// Binds this rule to `frequency`, producing a pure anchor → due-date function.
    ///
    /// The frequency only changes the meaning of legacy text: for `Annual`
    /// obligations `"last day of month"` and `"<N>th of month"` refer to
    /// December of the anchor's year.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::UnsupportedDueRule` when legacy text is not a
    /// recognised form.
    pub fn compile(&self, frequency: Frequency) -> Result<CompiledDueRule, ScheduleError> {
        let annual = frequency == Frequency::Annual;

        let target = match self {
            DueRule::FixedDayRelative { day, relative_to } => {
                let months_after = match relative_to {
                    RelativeTo::FiscalQuarterEnd => 3,
                    // Both calendar variants resolve to the following month.
                    RelativeTo::CalendarQuarterEnd | RelativeTo::CalendarMonthEnd => 1,
                };
                DueTarget::DayOfLaterMonth {
                    months_after,
                    day: *day,
                }
            }
            DueRule::FiscalYearEnd { month, day } => DueTarget::MonthDay {
                years_after: 1,
                month: *month,
                day: *day,
            },
            DueRule::Conditional => DueTarget::MonthDay {
                years_after: 0,
                month: 12,
                day: 31,
            },
            DueRule::FixedMonthDay { month, day } => DueTarget::MonthDay {
                years_after: 0,
                month: *month,
                day: *day,
            },
            DueRule::Legacy(text) => match legacy::parse(text) {
                Some(LegacyRule::LastDayOfQuarter) => DueTarget::LastOfQuarter,
                Some(LegacyRule::LastDayOfMonth) if annual => DueTarget::MonthDay {
                    years_after: 0,
                    month: 12,
                    day: 31,
                },
                Some(LegacyRule::LastDayOfMonth) => DueTarget::LastOfMonth,
                Some(LegacyRule::NthOfMonth(day)) if annual => DueTarget::MonthDay {
                    years_after: 0,
                    month: 12,
                    day,
                },
                Some(LegacyRule::NthOfMonth(day)) => DueTarget::DayOfAnchorMonth { day },
                None => return Err(ScheduleError::unsupported_rule(self)),
            },
        };

        Ok(CompiledDueRule { target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    fn due(rule: DueRule, frequency: Frequency, anchor: Date) -> Date {
        rule.compile(frequency).unwrap().due_date(anchor).unwrap()
    }

    #[test]
    fn test_fiscal_quarter_end_adds_three_months() {
        let rule = DueRule::FixedDayRelative {
            day: 15,
            relative_to: RelativeTo::FiscalQuarterEnd,
        };
        assert_eq!(due(rule.clone(), Frequency::Quarterly, d(2024, 1, 1)), d(2024, 4, 15));
        assert_eq!(due(rule, Frequency::Quarterly, d(2024, 11, 1)), d(2025, 2, 15));
    }

    #[test]
    fn test_calendar_offsets_match() {
        let quarter = DueRule::FixedDayRelative {
            day: 20,
            relative_to: RelativeTo::CalendarQuarterEnd,
        };
        let month = DueRule::FixedDayRelative {
            day: 20,
            relative_to: RelativeTo::CalendarMonthEnd,
        };
        for anchor in [d(2024, 1, 1), d(2024, 7, 1), d(2024, 12, 1)] {
            assert_eq!(
                due(quarter.clone(), Frequency::Quarterly, anchor),
                due(month.clone(), Frequency::Monthly, anchor)
            );
        }
        assert_eq!(due(month, Frequency::Monthly, d(2024, 12, 1)), d(2025, 1, 20));
    }

    #[test]
    fn test_day_clamped_to_month_length() {
        let rule = DueRule::FixedDayRelative {
            day: 31,
            relative_to: RelativeTo::CalendarMonthEnd,
        };
        assert_eq!(due(rule, Frequency::Monthly, d(2024, 1, 1)), d(2024, 2, 29));
    }

    #[test]
    fn test_fiscal_year_end_is_following_year() {
        let rule = DueRule::FiscalYearEnd { month: 4, day: 15 };
        assert_eq!(due(rule, Frequency::Annual, d(2024, 1, 1)), d(2025, 4, 15));
    }

    #[test]
    fn test_fixed_month_day_is_same_year() {
        let rule = DueRule::FixedMonthDay { month: 3, day: 1 };
        assert_eq!(due(rule, Frequency::Annual, d(2024, 1, 1)), d(2024, 3, 1));
    }

    #[test]
    fn test_conditional_falls_back_to_year_end() {
        assert_eq!(
            due(DueRule::Conditional, Frequency::Quarterly, d(2024, 4, 1)),
            d(2024, 12, 31)
        );
    }

    #[test]
    fn test_legacy_last_day_of_quarter() {
        let rule = DueRule::Legacy("last day of quarter".to_string());
        assert_eq!(due(rule.clone(), Frequency::Quarterly, d(2024, 4, 1)), d(2024, 6, 30));
        assert_eq!(due(rule, Frequency::Monthly, d(2024, 2, 1)), d(2024, 3, 31));
    }

    #[test]
    fn test_legacy_last_day_of_month_depends_on_frequency() {
        let rule = DueRule::Legacy("last day of month".to_string());
        assert_eq!(due(rule.clone(), Frequency::Monthly, d(2023, 2, 1)), d(2023, 2, 28));
        assert_eq!(due(rule.clone(), Frequency::Quarterly, d(2023, 4, 1)), d(2023, 4, 30));
        assert_eq!(due(rule, Frequency::Annual, d(2023, 1, 1)), d(2023, 12, 31));
    }

    #[test]
    fn test_legacy_nth_of_month_depends_on_frequency() {
        let rule = DueRule::Legacy("21st of month".to_string());
        assert_eq!(due(rule.clone(), Frequency::Monthly, d(2024, 6, 1)), d(2024, 6, 21));
        assert_eq!(due(rule, Frequency::Annual, d(2024, 1, 1)), d(2024, 12, 21));
    }

    #[test]
    fn test_unknown_legacy_text_is_rejected() {
        let err = DueRule::Legacy("invalid rule".to_string())
            .compile(Frequency::Monthly)
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::UnsupportedDueRule {
                rule: "\"invalid rule\"".to_string()
            }
        );
        assert!(err.to_string().contains("invalid rule"));
    }

    #[test]
    fn test_compiled_rule_is_deterministic() {
        let compiled = DueRule::FixedMonthDay { month: 2, day: 29 }
            .compile(Frequency::Annual)
            .unwrap();
        let anchor = d(2025, 1, 1);
        assert_eq!(compiled.due_date(anchor).unwrap(), d(2025, 2, 28));
        assert_eq!(compiled.due_date(anchor), compiled.due_date(anchor));
    }
}
