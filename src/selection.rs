//! Range selection strategy.
//!
//! This module decides what a single day click (or hover preview) does to the
//! currently selected range. It is the one place where range-picker click
//! semantics live; views feed it their current snapshot and replace their state
//! wholesale with the returned [`SelectionResult`].
//!
//! Two modes are supported:
//!
//! - **Default (toggle) mode**: no boundary is preferred. Clicking builds a range
//!   from the clicked day and the existing bound, clicking an existing bound
//!   deselects it, and clicking anywhere else starts a fresh selection.
//! - **Boundary-directed mode**: the caller says which boundary the click is meant
//!   to move. The result reports the boundary that was actually affected, which
//!   flips to the opposite side when the click crosses over it.
//!
//! All comparisons are calendar-day comparisons on [`NaiveDate`]. Every call is a
//! pure function of its arguments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::range::DateRange;

/// One end of a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    Start,
    End,
}

impl Boundary {
    /// The opposite end.
    pub fn other(self) -> Self {
        match self {
            Boundary::Start => Boundary::End,
            Boundary::End => Boundary::Start,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Boundary::Start => "start",
            Boundary::End => "end",
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Boundary {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Boundary::Start),
            "end" => Ok(Boundary::End),
            other => anyhow::bail!("Invalid boundary '{other}': expected 'start' or 'end'"),
        }
    }
}

/// Outcome of one interaction step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// The range after applying the click.
    pub range: DateRange,
    /// The boundary the click actually affected. Only set in boundary-directed mode.
    pub boundary: Option<Boundary>,
}

impl SelectionResult {
    fn toggled(range: DateRange) -> Self {
        Self {
            range,
            boundary: None,
        }
    }

    fn directed(range: DateRange, boundary: Boundary) -> Self {
        Self {
            range,
            boundary: Some(boundary),
        }
    }
}

/// Compute the range that results from the user interacting with `day`.
///
/// With `preferred_boundary` set this runs in boundary-directed mode, otherwise in
/// default toggle mode. When `allow_single_day_range` is false, a click that would
/// make both ends the same day clears instead.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rangepick::range::DateRange;
/// use rangepick::selection::{Boundary, compute_next_state};
///
/// let d = |n| NaiveDate::from_ymd_opt(2024, 3, n).unwrap();
///
/// // Picking a start after the selected end swaps roles instead of inverting the range
/// let current = DateRange::new(None, Some(d(18)));
/// let next = compute_next_state(current, d(22), false, Some(Boundary::Start));
/// assert_eq!(next.range, DateRange::new(Some(d(18)), Some(d(22))));
/// assert_eq!(next.boundary, Some(Boundary::End));
/// ```
pub fn compute_next_state(
    current: DateRange,
    day: NaiveDate,
    allow_single_day_range: bool,
    preferred_boundary: Option<Boundary>,
) -> SelectionResult {
    match preferred_boundary {
        Some(boundary) => next_state_for_boundary(current, day, allow_single_day_range, boundary),
        None => SelectionResult::toggled(next_state_toggle(current, day, allow_single_day_range)),
    }
}

fn next_state_toggle(current: DateRange, day: NaiveDate, allow_single_day_range: bool) -> DateRange {
    match (current.start, current.end) {
        (None, None) => DateRange::starting_at(day),
        (Some(bound), None) | (None, Some(bound)) => {
            DateRange::from_days(day, bound, allow_single_day_range)
        }
        (Some(start), Some(end)) => {
            let is_start = start == day;
            let is_end = end == day;
            if is_start && is_end {
                DateRange::EMPTY
            } else if is_start {
                DateRange::new(None, Some(end))
            } else if is_end {
                DateRange::new(Some(start), None)
            } else {
                DateRange::starting_at(day)
            }
        }
    }
}

fn next_state_for_boundary(
    current: DateRange,
    day: NaiveDate,
    allow_single_day_range: bool,
    boundary: Boundary,
) -> SelectionResult {
    let other_boundary = boundary.other();
    let boundary_date = current.boundary_date(boundary);
    let other_date = current.boundary_date(other_boundary);
    let range = |boundary_date, other_date| DateRange::for_boundary(boundary, boundary_date, other_date);

    match (boundary_date, other_date) {
        (None, None) => {
            SelectionResult::directed(current.with_boundary(boundary, Some(day)), boundary)
        }

        (Some(selected), None) => {
            let next = if selected == day { None } else { Some(day) };
            SelectionResult::directed(current.with_boundary(boundary, next), boundary)
        }

        (None, Some(other)) => {
            if day == other {
                if allow_single_day_range {
                    SelectionResult::directed(range(Some(day), Some(day)), boundary)
                } else {
                    SelectionResult::directed(DateRange::EMPTY, other_boundary)
                }
            } else if is_overlapping_other_boundary(boundary, day, other) {
                // The dragged handle crossed the other one: the old other date takes
                // this boundary's slot and the click becomes the other boundary.
                SelectionResult::directed(range(Some(other), Some(day)), other_boundary)
            } else {
                SelectionResult::directed(range(Some(day), Some(other)), boundary)
            }
        }

        (Some(selected), Some(other)) => {
            if day == selected {
                let remaining = if selected == other { None } else { Some(other) };
                SelectionResult::directed(range(None, remaining), boundary)
            } else if day == other {
                if allow_single_day_range {
                    SelectionResult::directed(range(Some(day), Some(day)), boundary)
                } else {
                    SelectionResult::directed(range(None, Some(other)), other_boundary)
                }
            } else if is_overlapping_other_boundary(boundary, day, other) {
                // Crossing a full range keeps the dragged boundary and drops the other.
                SelectionResult::directed(range(Some(day), None), boundary)
            } else {
                SelectionResult::directed(range(Some(day), Some(other)), boundary)
            }
        }
    }
}

/// Whether moving `boundary` to `day` would cross past `other_date`.
fn is_overlapping_other_boundary(boundary: Boundary, day: NaiveDate, other_date: NaiveDate) -> bool {
    match boundary {
        Boundary::Start => day > other_date,
        Boundary::End => day < other_date,
    }
}
