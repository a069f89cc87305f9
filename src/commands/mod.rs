//! Command-line command handlers.
//!
//! Each command lives in its own submodule. They share a [`Session`] that merges
//! the configuration file with command-line overrides.

pub mod click;
pub mod help;
pub mod hover;
pub mod shortcuts;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::args::CommonOptions;
use crate::clock::{self, FixedClock};
use crate::config::{self, Config, OutputFormat};
use crate::logger::{Log, LoggerGuard};
use crate::picker::{PickerOptions, RangePicker};
use crate::range::DateRange;

/// Everything a command needs once configuration and overrides are resolved.
pub struct Session {
    pub config: Config,
    pub options: PickerOptions,
    pub today: NaiveDate,
    pub output: OutputFormat,
    pub starting_range: DateRange,
    _log_guard: Option<LoggerGuard>,
}

impl Session {
    /// Resolve configuration and apply command-line overrides on top of it.
    pub fn prepare(cli: &CommonOptions) -> Result<Self> {
        let log_guard = cli
            .log_file
            .clone()
            .map(Log::start_file_logging)
            .transpose()
            .context("Failed to start file logging")?;

        Log::set_debug(cli.debug_enabled);

        if let Some(day) = cli.today {
            clock::init_clock(Arc::new(FixedClock::new(day)));
        }
        let today = clock::today();

        config::set_config_dir(cli.config_dir.clone())?;
        let (config, output) = load_config(cli)?;

        let options = apply_overrides(config.picker_options(today)?, cli)?;

        let session = Self {
            config,
            options,
            today,
            output,
            starting_range: cli.range.unwrap_or_default(),
            _log_guard: log_guard,
        };

        log_version!();
        if Log::is_debug() {
            log_pipe!();
            log_debug!("Debug mode enabled - showing each selection step");
            log_debug!("Today is {}", today);
            session.config.log_config(&session.options);
        }

        Ok(session)
    }

    /// A picker holding the starting range.
    pub fn picker(&self) -> Result<RangePicker> {
        RangePicker::uncontrolled(self.options, self.starting_range)
            .context("Starting range does not fit the selectable days")
    }

    pub fn is_json(&self) -> bool {
        self.output == OutputFormat::Json
    }
}

/// Load the configuration and settle the output format.
///
/// JSON output goes straight to stdout, so the log is silenced before loading
/// whenever `--json` is given; a first run would otherwise announce the default
/// file it creates. A configured `output = "json"` silences it after loading.
pub(crate) fn load_config(cli: &CommonOptions) -> Result<(Config, OutputFormat)> {
    let log_to_stdout = cli.log_file.is_none();
    if cli.json && log_to_stdout {
        Log::set_enabled(false);
    }

    let config = Config::load()?;

    let output = if cli.json {
        OutputFormat::Json
    } else {
        config.output_format()
    };
    if output == OutputFormat::Json && log_to_stdout {
        Log::set_enabled(false);
    }

    Ok((config, output))
}

/// Layer command-line flags over configured options.
pub(crate) fn apply_overrides(mut options: PickerOptions, cli: &CommonOptions) -> Result<PickerOptions> {
    if cli.allow_single_day {
        options.allow_single_day_range = true;
    }
    if let Some(boundary) = cli.boundary {
        options.boundary_to_modify = Some(boundary);
    }
    if let Some(min_date) = cli.min_date {
        options.min_date = min_date;
    }
    if let Some(max_date) = cli.max_date {
        options.max_date = max_date;
    }
    options.validate()?;
    Ok(options)
}

/// Print a JSON document on stdout.
pub(crate) fn print_json(value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}

/// Describe a range for humans, including its length when full.
pub(crate) fn describe_range(range: &DateRange) -> String {
    if range.is_empty() {
        return "(nothing selected)".to_string();
    }
    match range.len_days() {
        Some(1) => format!("{range} (1 day)"),
        Some(days) => format!("{range} ({days} days)"),
        None => range.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Boundary;
    use serial_test::serial;
    use tempfile::tempdir;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_apply_overrides() {
        let base = PickerOptions::for_today(ymd(2024, 3, 15));
        let cli = CommonOptions {
            allow_single_day: true,
            boundary: Some(Boundary::Start),
            min_date: Some(ymd(2024, 3, 1)),
            ..CommonOptions::default()
        };

        let options = apply_overrides(base, &cli).unwrap();
        assert!(options.allow_single_day_range);
        assert_eq!(options.boundary_to_modify, Some(Boundary::Start));
        assert_eq!(options.min_date, ymd(2024, 3, 1));
        assert_eq!(options.max_date, base.max_date);
    }

    #[test]
    fn test_apply_overrides_rejects_inverted_bounds() {
        let base = PickerOptions::for_today(ymd(2024, 3, 15));
        let cli = CommonOptions {
            min_date: Some(ymd(2030, 1, 1)),
            ..CommonOptions::default()
        };
        assert!(apply_overrides(base, &cli).is_err());
    }

    #[test]
    #[serial]
    fn test_json_first_run_logs_nothing() {
        let temp_dir = tempdir().unwrap();
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let cli = CommonOptions {
            json: true,
            ..CommonOptions::default()
        };
        let (result, output) = crate::logger::capture_output(|| load_config(&cli));
        let logging_after = Log::is_enabled();
        Log::set_enabled(true);

        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        let (_, format) = result.unwrap();
        assert_eq!(format, OutputFormat::Json);
        assert!(output.is_empty(), "unexpected log output: {output:?}");
        assert!(!logging_after);
        assert!(temp_dir.path().join("rangepick").join("rangepick.toml").exists());
    }

    #[test]
    #[serial]
    fn test_text_first_run_announces_default_config() {
        let temp_dir = tempdir().unwrap();
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let (result, output) =
            crate::logger::capture_output(|| load_config(&CommonOptions::default()));

        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        let (_, format) = result.unwrap();
        assert_eq!(format, OutputFormat::Text);
        assert!(output.contains("Created default configuration"));
        assert!(Log::is_enabled());
    }

    #[test]
    fn test_describe_range() {
        let day = ymd(2024, 3, 10);
        assert_eq!(describe_range(&DateRange::EMPTY), "(nothing selected)");
        assert_eq!(describe_range(&DateRange::starting_at(day)), "2024-03-10..");
        assert_eq!(
            describe_range(&DateRange::single_day(day)),
            "2024-03-10..2024-03-10 (1 day)"
        );
        assert_eq!(
            describe_range(&DateRange::new(Some(day), Some(ymd(2024, 3, 14)))),
            "2024-03-10..2024-03-14 (5 days)"
        );
    }
}
