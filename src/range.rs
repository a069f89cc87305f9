//! Date range value type.
//!
//! A `DateRange` is an ordered pair of optional calendar days. Either side may be
//! absent while a selection is in progress. When both sides are present the
//! selection engine always emits them in chronological order, but the type itself
//! does not enforce this so that callers can hold raw, unvalidated snapshots.
//!
//! The textual form used by the CLI and configuration is `START..END` where each
//! side is a `YYYY-MM-DD` day or empty for an absent bound:
//!
//! ```text
//! 2024-03-10..2024-03-14   full range
//! 2024-03-10..             start only
//! ..2024-03-14             end only
//! ..                       empty
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::DAY_FORMAT;
use crate::selection::Boundary;

/// Separator between the two sides of a range in its textual form.
pub const RANGE_SEPARATOR: &str = "..";

/// An immutable `(start, end)` pair of optional calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// A range with neither bound selected.
    pub const EMPTY: DateRange = DateRange {
        start: None,
        end: None,
    };

    /// Build a range from raw sides without reordering.
    pub const fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// A range with only its start selected.
    pub const fn starting_at(day: NaiveDate) -> Self {
        Self::new(Some(day), None)
    }

    /// A range covering exactly one day.
    pub const fn single_day(day: NaiveDate) -> Self {
        Self::new(Some(day), Some(day))
    }

    /// Build a two-ended range from two arbitrary days.
    ///
    /// The result is always `(min, max)`. When both days are the same and single-day
    /// ranges are not allowed, the result collapses to [`DateRange::EMPTY`].
    pub fn from_days(a: NaiveDate, b: NaiveDate, allow_single_day_range: bool) -> Self {
        if a == b && !allow_single_day_range {
            return Self::EMPTY;
        }
        Self::new(Some(a.min(b)), Some(a.max(b)))
    }

    /// Build a range by placing `boundary_date` in `boundary`'s slot and
    /// `other_date` in the opposite slot.
    ///
    /// If both end up present they are put back into chronological order.
    pub fn for_boundary(
        boundary: Boundary,
        boundary_date: Option<NaiveDate>,
        other_date: Option<NaiveDate>,
    ) -> Self {
        let range = match boundary {
            Boundary::Start => Self::new(boundary_date, other_date),
            Boundary::End => Self::new(other_date, boundary_date),
        };
        range.ordered()
    }

    /// The day stored in `boundary`'s slot.
    pub fn boundary_date(&self, boundary: Boundary) -> Option<NaiveDate> {
        match boundary {
            Boundary::Start => self.start,
            Boundary::End => self.end,
        }
    }

    /// Copy of this range with `boundary`'s slot replaced.
    pub fn with_boundary(self, boundary: Boundary, day: Option<NaiveDate>) -> Self {
        match boundary {
            Boundary::Start => Self::new(day, self.end),
            Boundary::End => Self::new(self.start, day),
        }
    }

    /// Swap the sides if both are present and out of order.
    pub fn ordered(self) -> Self {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start > end => Self::new(Some(end), Some(start)),
            _ => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Whether both sides are present and fall on the same day.
    pub fn is_single_day(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start == end)
    }

    /// Whether `day` lies within a fully selected range (inclusive).
    ///
    /// Half-open ranges only contain their single selected day.
    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= day && day <= end,
            (Some(only), None) | (None, Some(only)) => only == day,
            (None, None) => false,
        }
    }

    /// Number of days covered, inclusive of both ends. `None` unless full.
    pub fn len_days(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((end - start).num_days().abs() + 1),
            _ => None,
        }
    }

    /// The bound a host view should treat as "next to be picked": the first
    /// absent side, or `None` when the range is full.
    pub fn missing_boundary(&self) -> Option<Boundary> {
        if self.start.is_none() {
            Some(Boundary::Start)
        } else if self.end.is_none() {
            Some(Boundary::End)
        } else {
            None
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = |day: Option<NaiveDate>| {
            day.map(|d| d.format(DAY_FORMAT).to_string())
                .unwrap_or_default()
        };
        write!(f, "{}{RANGE_SEPARATOR}{}", side(self.start), side(self.end))
    }
}

impl FromStr for DateRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s.trim().split_once(RANGE_SEPARATOR).with_context(|| {
            format!("Invalid range '{s}': expected START..END (either side may be empty)")
        })?;

        let parse_side = |side: &str, name: &str| -> Result<Option<NaiveDate>> {
            let side = side.trim();
            if side.is_empty() {
                return Ok(None);
            }
            crate::dates::parse_day(side)
                .map(Some)
                .with_context(|| format!("Invalid {name} in range '{s}'"))
        };

        let start = parse_side(start, "start")?;
        let end = parse_side(end, "end")?;

        if let (Some(a), Some(b)) = (start, end)
            && a > b
        {
            anyhow::bail!("Range start {a} is after range end {b}");
        }

        Ok(Self::new(start, end))
    }
}
