//! Preset ranges relative to today.
//!
//! Range pickers usually offer a column of one-click presets ("Past week",
//! "Past month", ...). Each preset ends on `today`. The single-day presets
//! ("Today", "Yesterday") are only offered when single-day ranges are allowed,
//! since they would otherwise describe a selection the picker refuses.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::dates::months_before;
use crate::range::DateRange;

/// A labelled preset range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    pub label: String,
    pub range: DateRange,
}

impl Shortcut {
    pub fn new(label: impl Into<String>, range: DateRange) -> Self {
        Self {
            label: label.into(),
            range,
        }
    }
}

/// Build the default preset list for `today`.
pub fn default_shortcuts(today: NaiveDate, allow_single_day_range: bool) -> Vec<Shortcut> {
    let ending_today = |start: NaiveDate| DateRange::new(Some(start), Some(today));
    let mut shortcuts = Vec::with_capacity(8);

    if allow_single_day_range {
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        shortcuts.push(Shortcut::new("Today", DateRange::single_day(today)));
        shortcuts.push(Shortcut::new("Yesterday", DateRange::single_day(yesterday)));
    }

    let week_ago = today.checked_sub_days(Days::new(7)).unwrap_or(today);
    shortcuts.push(Shortcut::new("Past week", ending_today(week_ago)));
    shortcuts.push(Shortcut::new("Past month", ending_today(months_before(today, 1))));
    shortcuts.push(Shortcut::new("Past 3 months", ending_today(months_before(today, 3))));
    shortcuts.push(Shortcut::new("Past 6 months", ending_today(months_before(today, 6))));
    shortcuts.push(Shortcut::new("Past year", ending_today(months_before(today, 12))));
    shortcuts.push(Shortcut::new("Past 2 years", ending_today(months_before(today, 24))));

    shortcuts
}

/// Find a preset by label, ignoring case and surrounding whitespace.
pub fn find_shortcut<'a>(shortcuts: &'a [Shortcut], label: &str) -> Option<&'a Shortcut> {
    let label = label.trim();
    shortcuts
        .iter()
        .find(|shortcut| shortcut.label.eq_ignore_ascii_case(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_shortcuts_without_single_day() {
        let today = ymd(2024, 3, 31);
        let shortcuts = default_shortcuts(today, false);
        let labels: Vec<_> = shortcuts.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Past week",
                "Past month",
                "Past 3 months",
                "Past 6 months",
                "Past year",
                "Past 2 years"
            ]
        );

        assert_eq!(
            shortcuts[0].range,
            DateRange::new(Some(ymd(2024, 3, 24)), Some(today))
        );
        // End-of-month days clamp to the shorter month
        assert_eq!(
            shortcuts[1].range,
            DateRange::new(Some(ymd(2024, 2, 29)), Some(today))
        );
        assert_eq!(
            shortcuts[5].range,
            DateRange::new(Some(ymd(2022, 3, 31)), Some(today))
        );
        assert!(shortcuts.iter().all(|s| !s.range.is_single_day()));
    }

    #[test]
    fn test_single_day_shortcuts_when_allowed() {
        let today = ymd(2024, 3, 1);
        let shortcuts = default_shortcuts(today, true);
        assert_eq!(shortcuts.len(), 8);
        assert_eq!(shortcuts[0].range, DateRange::single_day(today));
        assert_eq!(shortcuts[1].range, DateRange::single_day(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_find_shortcut_by_label() {
        let shortcuts = default_shortcuts(ymd(2024, 3, 15), true);
        assert_eq!(
            find_shortcut(&shortcuts, " past WEEK ").map(|s| s.label.as_str()),
            Some("Past week")
        );
        assert!(find_shortcut(&shortcuts, "Past decade").is_none());
    }
}
