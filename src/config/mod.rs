//! Configuration system for rangepick.
//!
//! Settings live in `rangepick.toml`, searched in:
//! 1. The directory given with `--config <DIR>`
//! 2. **XDG_CONFIG_HOME**/rangepick/rangepick.toml
//!
//! A commented default file is written on first load.
//!
//! ```toml
//! #[Selection]
//! allow_single_day_range = false # Allow ranges that start and end on the same day
//! boundary = "start"             # Boundary every click moves: "start" or "end" (omit for toggle mode)
//!
//! #[Bounds]
//! min_date = "2004-01-01"        # Earliest selectable day (YYYY-MM-DD)
//! max_date = "2024-12-31"        # Latest selectable day (YYYY-MM-DD)
//!
//! #[Output]
//! shortcuts = true               # Offer preset ranges relative to today
//! output = "text"                # Output format: "text" or "json"
//! ```
//!
//! Every field is optional. Missing bounds are derived from today's date, see
//! [`PickerOptions::for_today`].

pub mod builder;
pub mod loading;
pub mod validation;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

use crate::constants::*;
use crate::dates::parse_day;
use crate::picker::PickerOptions;
use crate::selection::Boundary;

pub use builder::create_default_config;
pub use loading::{
    get_config_path, get_custom_config_dir, load, load_from_path, parse_config, set_config_dir,
};

/// How command results are printed.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawing log output
    #[default]
    Text,
    /// One JSON document on stdout
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Settings loaded from `rangepick.toml`.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Whether a range may start and end on the same day.
    pub allow_single_day_range: Option<bool>,

    /// Boundary every click is directed at. `None` selects toggle mode.
    pub boundary: Option<Boundary>,

    /// Earliest selectable day as `YYYY-MM-DD`.
    pub min_date: Option<String>,
    /// Latest selectable day as `YYYY-MM-DD`.
    pub max_date: Option<String>,

    /// Whether preset ranges are offered.
    pub shortcuts: Option<bool>,

    /// Output format for command results.
    pub output: Option<OutputFormat>,
}

impl Config {
    /// Load configuration using automatic path detection.
    pub fn load() -> Result<Self> {
        loading::load()
    }

    /// Load configuration from a specific file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        loading::load_from_path(path)
    }

    /// Parsed `min_date`, if configured.
    pub fn min_date(&self) -> Result<Option<NaiveDate>> {
        self.min_date.as_deref().map(parse_day).transpose()
    }

    /// Parsed `max_date`, if configured.
    pub fn max_date(&self) -> Result<Option<NaiveDate>> {
        self.max_date.as_deref().map(parse_day).transpose()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }

    pub fn shortcuts_enabled(&self) -> bool {
        self.shortcuts.unwrap_or(DEFAULT_SHORTCUTS)
    }

    /// Build picker options, filling unset fields from defaults relative to `today`.
    pub fn picker_options(&self, today: NaiveDate) -> Result<PickerOptions> {
        let defaults = PickerOptions::for_today(today);
        let options = PickerOptions {
            allow_single_day_range: self
                .allow_single_day_range
                .unwrap_or(DEFAULT_ALLOW_SINGLE_DAY_RANGE),
            boundary_to_modify: self.boundary,
            min_date: self.min_date()?.unwrap_or(defaults.min_date),
            max_date: self.max_date()?.unwrap_or(defaults.max_date),
        };
        options.validate()?;
        Ok(options)
    }

    /// Log the effective settings as indented lines.
    pub fn log_config(&self, options: &PickerOptions) {
        log_block_start!("Loaded configuration");
        log_indented!(
            "Single-day ranges: {}",
            if options.allow_single_day_range {
                "allowed"
            } else {
                "not allowed"
            }
        );
        match options.boundary_to_modify {
            Some(boundary) => log_indented!("Selection mode: boundary-directed ({boundary})"),
            None => log_indented!("Selection mode: toggle"),
        }
        log_indented!(
            "Selectable days: {} to {}",
            options.min_date.format(DAY_FORMAT),
            options.max_date.format(DAY_FORMAT)
        );
        log_indented!(
            "Shortcuts: {}",
            if self.shortcuts_enabled() {
                "enabled"
            } else {
                "disabled"
            }
        );
        log_indented!("Output: {}", self.output_format().as_str());
    }
}

#[cfg(test)]
mod tests;
