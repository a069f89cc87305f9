//! Day-level date helpers.
//!
//! The selection engine works on [`NaiveDate`], where equality already means "same
//! calendar day". Hosts that carry full timestamps go through these helpers to drop
//! the time-of-day component before handing days to the engine.

use anyhow::{Context, Result};
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

use crate::constants::{DAY_FORMAT, DEFAULT_MAX_DATE_MONTHS_AHEAD, DEFAULT_MIN_DATE_YEARS_BACK};

/// Parse a `YYYY-MM-DD` day.
pub fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DAY_FORMAT)
        .with_context(|| format!("Invalid date '{s}'. Use YYYY-MM-DD"))
}

/// Whether two timestamps fall on the same calendar day, ignoring time of day.
pub fn are_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Drop the time-of-day component.
pub fn normalize_to_day(moment: NaiveDateTime) -> NaiveDate {
    moment.date()
}

/// Whether `day` lies within `[min, max]`, inclusive on both ends.
pub fn is_day_in_range(day: NaiveDate, min: NaiveDate, max: NaiveDate) -> bool {
    min <= day && day <= max
}

/// Clamp `day` into `[min, max]`.
pub fn clamp_day(day: NaiveDate, min: NaiveDate, max: NaiveDate) -> NaiveDate {
    day.clamp(min, max)
}

/// January 1st, twenty years before `today`'s year.
pub fn default_min_date(today: NaiveDate) -> NaiveDate {
    let year = today.year() - DEFAULT_MIN_DATE_YEARS_BACK;
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// December 31st of the year six months after `today`.
pub fn default_max_date(today: NaiveDate) -> NaiveDate {
    let ahead = today
        .checked_add_months(Months::new(DEFAULT_MAX_DATE_MONTHS_AHEAD))
        .unwrap_or(NaiveDate::MAX);
    NaiveDate::from_ymd_opt(ahead.year(), 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Go back `months` calendar months, clamping the day to the target month's length.
pub fn months_before(day: NaiveDate, months: u32) -> NaiveDate {
    day.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}
