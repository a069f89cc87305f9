//! Default configuration file creation.
//!
//! The default file is assembled with a small builder that aligns trailing
//! comments into one column.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::constants::*;
use crate::dates::{default_max_date, default_min_date};

/// Write a commented default configuration to `path`, creating parent directories.
///
/// Bounds are left commented out so they keep following today's date.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let content = default_config_content(crate::clock::today());
    fs::write(path, content)
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;

    log_block_start!("Created default configuration");
    log_indented!("{}", path.display());
    Ok(())
}

/// Default file text. The commented bound samples show the defaults for `today`.
fn default_config_content(today: NaiveDate) -> String {
    let sample = |day: NaiveDate| format!("\"{}\"", day.format(DAY_FORMAT));

    ConfigBuilder::new()
        .add_section("Selection")
        .add_setting(
            "allow_single_day_range",
            &DEFAULT_ALLOW_SINGLE_DAY_RANGE.to_string(),
            "Allow ranges that start and end on the same day",
        )
        .add_setting(
            "#boundary",
            "\"start\"",
            "Boundary every click moves: \"start\" or \"end\" (omit for toggle mode)",
        )
        .add_section("Bounds")
        .add_setting(
            "#min_date",
            &sample(default_min_date(today)),
            "Earliest selectable day (default: Jan 1st, 20 years ago)",
        )
        .add_setting(
            "#max_date",
            &sample(default_max_date(today)),
            "Latest selectable day (default: end of the year 6 months ahead)",
        )
        .add_section("Output")
        .add_setting(
            "shortcuts",
            &DEFAULT_SHORTCUTS.to_string(),
            "Offer preset ranges relative to today",
        )
        .add_setting(
            "output",
            &format!("\"{DEFAULT_OUTPUT}\""),
            "Output format: \"text\" or \"json\"",
        )
        .build()
}

struct ConfigBuilder {
    entries: Vec<Entry>,
}

enum Entry {
    Section(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(Entry::Section(format!("#[{title}]")));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(Entry::Setting {
            line: format!("{key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    fn build(self) -> String {
        let width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Setting { line, .. } => Some(line.len()),
                Entry::Section(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut lines = Vec::new();
        for entry in self.entries {
            match entry {
                Entry::Section(title) => {
                    if !lines.is_empty() {
                        lines.push(String::new());
                    }
                    lines.push(title);
                }
                Entry::Setting { line, comment } => {
                    lines.push(format!("{line:<width$}{comment}"));
                }
            }
        }

        lines.push(String::new());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::constants::test_constants::TEST_TODAY;
    use crate::dates::parse_day;

    fn today() -> NaiveDate {
        parse_day(TEST_TODAY).unwrap()
    }

    #[test]
    fn test_default_content_parses_back() {
        let content = default_config_content(today());
        let config: Config = toml::from_str(&content).unwrap();
        assert_eq!(config.allow_single_day_range, Some(false));
        assert_eq!(config.boundary, None);
        assert_eq!(config.min_date, None);
        assert_eq!(config.shortcuts, Some(true));
    }

    #[test]
    fn test_comments_are_aligned() {
        let content = default_config_content(today());
        let columns: Vec<usize> = content
            .lines()
            .filter(|line| line.contains(" = "))
            .filter_map(|line| line.find("# "))
            .collect();
        assert!(!columns.is_empty());
        assert!(columns.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_bound_samples_follow_today() {
        let content = default_config_content(today());
        assert!(content.contains("#min_date = \"2004-01-01\""));
        assert!(content.contains("#max_date = \"2024-12-31\""));

        let later = default_config_content(parse_day("2030-09-01").unwrap());
        assert!(later.contains("#min_date = \"2010-01-01\""));
        assert!(later.contains("#max_date = \"2031-12-31\""));
    }
}
