//! Occurrence generation: walking period anchors through a query window.

use obligation_core::types::Date;
use tracing::{debug, trace};

use crate::error::ScheduleError;
use crate::frequency::Frequency;
use crate::obligation::ObligationDescriptor;
use crate::occurrence::ScheduleOccurrence;

/// Iterator over the period anchors of a frequency, from the period
/// containing `start` up to and including the last anchor `<= end`.
///
/// # Examples
///
/// ```
/// use obligation_core::types::Date;
/// use obligation_schedule::{Frequency, PeriodAnchors};
///
/// let anchors: Vec<Date> = PeriodAnchors::new(
///     Frequency::Quarterly,
///     Date::from_ymd(2024, 2, 10).unwrap(),
///     Date::from_ymd(2024, 7, 1).unwrap(),
/// )
/// .unwrap()
/// .collect();
///
/// assert_eq!(
///     anchors,
///     vec![
///         Date::from_ymd(2024, 1, 1).unwrap(),
///         Date::from_ymd(2024, 4, 1).unwrap(),
///         Date::from_ymd(2024, 7, 1).unwrap(),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PeriodAnchors {
    next: Option<Date>,
    end: Date,
    step_months: u32,
}

impl PeriodAnchors {
    /// Starts the walk at the anchor of the period containing `start`.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::UnsupportedFrequency` for non-recurring
    /// frequencies.
    pub fn new(frequency: Frequency, start: Date, end: Date) -> Result<Self, ScheduleError> {
        let step_months = frequency
            .months_per_period()
            .ok_or_else(|| frequency.unsupported())?;
        Ok(Self {
            next: Some(frequency.period_anchor(start)?),
            end,
            step_months,
        })
    }
}

impl Iterator for PeriodAnchors {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let anchor = self.next.filter(|anchor| *anchor <= self.end)?;
        // An unrepresentable successor is necessarily past `end`.
        self.next = anchor.checked_add_months(self.step_months).ok();
        Some(anchor)
    }
}

/// Returns the human-readable label of the period starting at `anchor`.
///
/// # Examples
///
/// ```
/// use obligation_core::types::Date;
/// use obligation_schedule::{period_label, Frequency};
///
/// let anchor = Date::from_ymd(2024, 7, 1).unwrap();
/// assert_eq!(period_label(Frequency::Monthly, anchor).unwrap(), "2024-07");
/// assert_eq!(period_label(Frequency::Quarterly, anchor).unwrap(), "2024-Q3");
/// assert_eq!(period_label(Frequency::Annual, anchor).unwrap(), "2024");
/// ```
///
/// # Errors
///
/// Returns `ScheduleError::UnsupportedFrequency` for non-recurring frequencies.
pub fn period_label(frequency: Frequency, anchor: Date) -> Result<String, ScheduleError> {
    match frequency {
        Frequency::Monthly => Ok(format!("{:04}-{:02}", anchor.year(), anchor.month())),
        Frequency::Quarterly => Ok(format!("{:04}-Q{}", anchor.year(), anchor.quarter())),
        Frequency::Annual => Ok(format!("{:04}", anchor.year())),
        Frequency::OneTime | Frequency::Conditional => Err(frequency.unsupported()),
    }
}

/// Generates the occurrences of one obligation whose due dates fall inside
/// `[start, end]` (inclusive on both ends).
///
/// Anchors are walked from the period containing `start` while
/// `anchor <= end`; an anchor whose due date lands outside the window is
/// dropped without a trace in the result, so the list may be empty. Results
/// come back in anchor order. An inverted window yields no occurrences.
///
/// # Errors
///
/// - `ScheduleError::UnsupportedDueRule` if the rule cannot be compiled
/// - `ScheduleError::UnsupportedFrequency` for `OneTime`/`Conditional` obligations
/// - `ScheduleError::DateOverflow` if a due date is not representable
///
/// No partial result is returned on error.
///
/// # Examples
///
/// ```
/// use obligation_core::types::Date;
/// use obligation_schedule::{generate, DueRule, Frequency, ObligationDescriptor};
///
/// let vat = ObligationDescriptor::new(
///     "org-1/vat",
///     Frequency::Quarterly,
///     DueRule::Legacy("last day of quarter".to_string()),
/// );
/// let occurrences = generate(
///     &vat,
///     Date::from_ymd(2024, 1, 1).unwrap(),
///     Date::from_ymd(2024, 12, 31).unwrap(),
/// )
/// .unwrap();
///
/// let periods: Vec<&str> = occurrences.iter().map(|o| o.period()).collect();
/// assert_eq!(periods, ["2024-Q1", "2024-Q2", "2024-Q3", "2024-Q4"]);
/// ```
pub fn generate(
    descriptor: &ObligationDescriptor,
    start: Date,
    end: Date,
) -> Result<Vec<ScheduleOccurrence>, ScheduleError> {
    let frequency = descriptor.frequency();
    let rule = descriptor.due_rule().compile(frequency)?;
    let anchors = PeriodAnchors::new(frequency, start, end)?;

    let mut occurrences = Vec::new();
    for anchor in anchors {
        let due_date = rule.due_date(anchor)?;
        if due_date < start || due_date > end {
            trace!(
                obligation = descriptor.id(),
                %anchor,
                %due_date,
                "due date outside window, skipping"
            );
            continue;
        }
        occurrences.push(ScheduleOccurrence::due(
            descriptor.id(),
            period_label(frequency, anchor)?,
            due_date,
        ));
    }

    debug!(
        obligation = descriptor.id(),
        %frequency,
        %start,
        %end,
        count = occurrences.len(),
        "generated schedule"
    );
    Ok(occurrences)
}

/// Generates the schedules of several obligations as one list.
///
/// Occurrences are ordered by due date, then by obligation id; within one
/// obligation the anchor order is kept. Fails on the first obligation that
/// cannot be generated, returning nothing.
pub fn generate_all<'a, I>(
    descriptors: I,
    start: Date,
    end: Date,
) -> Result<Vec<ScheduleOccurrence>, ScheduleError>
where
    I: IntoIterator<Item = &'a ObligationDescriptor>,
{
    let mut occurrences = Vec::new();
    for descriptor in descriptors {
        occurrences.extend(generate(descriptor, start, end)?);
    }
    occurrences.sort_by(|a, b| {
        a.due_date()
            .cmp(&b.due_date())
            .then_with(|| a.org_obligation_id().cmp(b.org_obligation_id()))
    });
    Ok(occurrences)
}
