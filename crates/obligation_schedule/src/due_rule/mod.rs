//! Declarative due rules and their interpretation.
//!
//! A [`DueRule`] describes how a due date follows from a period anchor. Stored
//! rules are JSON objects whose shape (which fields are present) selects the
//! rule kind; [`DueRule::from_value`] turns that shape into an explicit
//! variant so the interpreter can match exhaustively.
//!
//! | JSON shape | Variant |
//! |------------|---------|
//! | `{"day": 15, "relative_to": "calendar_month_end"}` | [`DueRule::FixedDayRelative`] |
//! | `{"month": 4, "day": 15, "relative_to": "fiscal_year_end"}` | [`DueRule::FiscalYearEnd`] |
//! | `{"conditional": true}` | [`DueRule::Conditional`] |
//! | `{"month": 3, "day": 31}` | [`DueRule::FixedMonthDay`] |
//! | `"last day of quarter"` | [`DueRule::Legacy`] |

mod compiled;
mod legacy;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::ScheduleError;

pub use compiled::CompiledDueRule;

/// Period end a [`DueRule::FixedDayRelative`] rule counts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeTo {
    /// Due in the third month after the anchor's month.
    FiscalQuarterEnd,
    /// Due in the month after the anchor's month.
    CalendarQuarterEnd,
    /// Due in the month after the anchor's month.
    CalendarMonthEnd,
}

impl RelativeTo {
    /// Returns the stored name of this reference point.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelativeTo::FiscalQuarterEnd => "fiscal_quarter_end",
            RelativeTo::CalendarQuarterEnd => "calendar_quarter_end",
            RelativeTo::CalendarMonthEnd => "calendar_month_end",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "fiscal_quarter_end" => Some(RelativeTo::FiscalQuarterEnd),
            "calendar_quarter_end" => Some(RelativeTo::CalendarQuarterEnd),
            "calendar_month_end" => Some(RelativeTo::CalendarMonthEnd),
            _ => None,
        }
    }
}

const FISCAL_YEAR_END: &str = "fiscal_year_end";

/// How to compute a due date from a period anchor.
///
/// New obligations should only be authored with the structured variants;
/// [`DueRule::Legacy`] exists to read records written before them.
///
/// # Examples
///
/// ```
/// use obligation_schedule::{DueRule, RelativeTo};
/// use serde_json::json;
///
/// let rule: DueRule = serde_json::from_value(json!({
///     "day": 15,
///     "relative_to": "calendar_month_end"
/// }))
/// .unwrap();
///
/// assert_eq!(
///     rule,
///     DueRule::FixedDayRelative { day: 15, relative_to: RelativeTo::CalendarMonthEnd }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum DueRule {
    /// `day` of a month counted from the anchor's month.
    FixedDayRelative {
        /// Day of month (1-31).
        day: u32,
        /// Which month the day belongs to.
        relative_to: RelativeTo,
    },
    /// `day` of `month` in the year after the anchor's year.
    FiscalYearEnd {
        /// Month (1-12).
        month: u32,
        /// Day of month (1-31).
        day: u32,
    },
    /// `day` of `month` in the anchor's year.
    FixedMonthDay {
        /// Month (1-12).
        month: u32,
        /// Day of month (1-31).
        day: u32,
    },
    /// No deterministic deadline; resolves to December 31st of the anchor's year.
    Conditional,
    /// Historical free-text rule, e.g. `"last day of quarter"`.
    Legacy(String),
}

impl DueRule {
    /// Decodes a stored rule by its shape.
    ///
    /// Shapes are tried in order: `day` + `relative_to`, then
    /// `month` + `day` + `relative_to: "fiscal_year_end"`, then
    /// `conditional: true`, then a bare `month` + `day`. Strings become
    /// [`DueRule::Legacy`] and are checked when the rule is compiled.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::UnsupportedDueRule` carrying the JSON text of
    /// `value` when no shape matches (including out-of-range days/months).
    pub fn from_value(value: &Value) -> Result<Self, ScheduleError> {
        match value {
            Value::String(text) => Ok(DueRule::Legacy(text.clone())),
            Value::Object(fields) => {
                Self::from_fields(fields).ok_or_else(|| ScheduleError::unsupported_rule(value))
            }
            _ => Err(ScheduleError::unsupported_rule(value)),
        }
    }

    fn from_fields(fields: &Map<String, Value>) -> Option<Self> {
        let day = bounded_field(fields, "day", 31);
        let month = bounded_field(fields, "month", 12);
        let relative_to = fields.get("relative_to");

        if let (Some(day), Some(relative_to)) = (
            day,
            relative_to
                .and_then(Value::as_str)
                .and_then(RelativeTo::from_name),
        ) {
            return Some(DueRule::FixedDayRelative { day, relative_to });
        }

        if let (Some(month), Some(day)) = (month, day) {
            if relative_to.and_then(Value::as_str) == Some(FISCAL_YEAR_END) {
                return Some(DueRule::FiscalYearEnd { month, day });
            }
        }

        if fields.get("conditional") == Some(&Value::Bool(true)) {
            return Some(DueRule::Conditional);
        }

        match (month, day, relative_to) {
            (Some(month), Some(day), None) => Some(DueRule::FixedMonthDay { month, day }),
            _ => None,
        }
    }

    /// Encodes this rule in its stored JSON shape.
    pub fn to_value(&self) -> Value {
        match self {
            DueRule::FixedDayRelative { day, relative_to } => {
                json!({ "day": day, "relative_to": relative_to.as_str() })
            }
            DueRule::FiscalYearEnd { month, day } => {
                json!({ "month": month, "day": day, "relative_to": FISCAL_YEAR_END })
            }
            DueRule::FixedMonthDay { month, day } => json!({ "month": month, "day": day }),
            DueRule::Conditional => json!({ "conditional": true }),
            DueRule::Legacy(text) => Value::String(text.clone()),
        }
    }

    /// Returns whether this is a free-text legacy rule.
    pub fn is_legacy(&self) -> bool {
        matches!(self, DueRule::Legacy(_))
    }
}

// Integer field in 1..=max; anything else counts as absent.
fn bounded_field(fields: &Map<String, Value>, key: &str, max: u32) -> Option<u32> {
    fields
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| (1..=max).contains(n))
}

impl TryFrom<Value> for DueRule {
    type Error = ScheduleError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        DueRule::from_value(&value)
    }
}

impl From<DueRule> for Value {
    fn from(rule: DueRule) -> Self {
        rule.to_value()
    }
}

impl fmt::Display for DueRule {
    /// Formats the rule as its stored JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}
