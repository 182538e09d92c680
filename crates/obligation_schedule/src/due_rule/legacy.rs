//! Free-text due rules kept for records authored before structured rules.
//!
//! Recognised forms (case-insensitive, surrounding whitespace ignored):
//! - `"last day of quarter"`
//! - anything containing `"last day of month"`
//! - anything containing `"<N>st|nd|rd|th of month"`, e.g. `"20th of month"`

use std::sync::LazyLock;

use regex::Regex;

/// A legacy rule after its text has been read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LegacyRule {
    LastDayOfQuarter,
    LastDayOfMonth,
    NthOfMonth(u32),
}

static NTH_OF_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)(?:st|nd|rd|th) of month").expect("ordinal pattern is valid")
});

/// Reads a legacy rule, first match wins. Returns `None` for unknown text.
pub(crate) fn parse(text: &str) -> Option<LegacyRule> {
    let normalized = text.trim().to_lowercase();

    if normalized == "last day of quarter" {
        return Some(LegacyRule::LastDayOfQuarter);
    }
    if normalized.contains("last day of month") {
        return Some(LegacyRule::LastDayOfMonth);
    }
    nth_of_month(&normalized).map(LegacyRule::NthOfMonth)
}

// First ordinal in 1..=31 written before "of month".
fn nth_of_month(text: &str) -> Option<u32> {
    NTH_OF_MONTH
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .find(|day| (1..=31).contains(day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_day_of_quarter_is_exact() {
        assert_eq!(
            parse("last day of quarter"),
            Some(LegacyRule::LastDayOfQuarter)
        );
        assert_eq!(
            parse("  Last Day of Quarter "),
            Some(LegacyRule::LastDayOfQuarter)
        );
        assert_eq!(parse("the last day of quarter end"), None);
    }

    #[test]
    fn test_last_day_of_month_is_substring() {
        assert_eq!(parse("last day of month"), Some(LegacyRule::LastDayOfMonth));
        assert_eq!(
            parse("by the last day of month following"),
            Some(LegacyRule::LastDayOfMonth)
        );
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(parse("1st of month"), Some(LegacyRule::NthOfMonth(1)));
        assert_eq!(parse("2nd of month"), Some(LegacyRule::NthOfMonth(2)));
        assert_eq!(parse("23rd of month"), Some(LegacyRule::NthOfMonth(23)));
        assert_eq!(parse("20th of month"), Some(LegacyRule::NthOfMonth(20)));
        assert_eq!(
            parse("due on the 15th of month"),
            Some(LegacyRule::NthOfMonth(15))
        );
    }

    #[test]
    fn test_skips_out_of_range_ordinal() {
        assert_eq!(
            parse("40th of month, else 5th of month"),
            Some(LegacyRule::NthOfMonth(5))
        );
        assert_eq!(parse("10TH OF MONTH"), Some(LegacyRule::NthOfMonth(10)));
    }

    #[test]
    fn test_rejects_unknown_text() {
        assert_eq!(parse("invalid rule"), None);
        assert_eq!(parse("th of month"), None);
        assert_eq!(parse("15 of month"), None);
        assert_eq!(parse("15th of the month"), None);
        assert_eq!(parse("0th of month"), None);
        assert_eq!(parse("45th of month"), None);
        assert_eq!(parse("99999999999th of month"), None);
        assert_eq!(parse("twentieth of month"), None);
        assert_eq!(parse(""), None);
    }
}
