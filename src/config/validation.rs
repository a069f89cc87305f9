//! Configuration validation.
//!
//! Rejects unparseable days, years outside the supported window, and bounds that
//! leave no selectable day.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

use super::Config;
use crate::constants::*;

/// Validate every configured field.
pub fn validate_config(config: &Config) -> Result<()> {
    let min_date = config.min_date().context("Invalid min_date")?;
    let max_date = config.max_date().context("Invalid max_date")?;

    if let Some(day) = min_date {
        validate_year(day, "min_date")?;
    }
    if let Some(day) = max_date {
        validate_year(day, "max_date")?;
    }

    if let (Some(min), Some(max)) = (min_date, max_date)
        && min > max
    {
        anyhow::bail!(
            "min_date ({}) must not be after max_date ({})",
            min.format(DAY_FORMAT),
            max.format(DAY_FORMAT)
        );
    }

    Ok(())
}

fn validate_year(day: NaiveDate, field: &str) -> Result<()> {
    if !(MINIMUM_YEAR..=MAXIMUM_YEAR).contains(&day.year()) {
        anyhow::bail!(
            "{} year ({}) must be between {} and {}",
            field,
            day.year(),
            MINIMUM_YEAR,
            MAXIMUM_YEAR
        );
    }
    Ok(())
}
