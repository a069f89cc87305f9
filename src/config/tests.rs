use super::validation::validate_config;
use super::*;
use crate::constants::test_constants::*;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

fn today() -> NaiveDate {
    parse_day(TEST_TODAY).unwrap()
}

fn create_test_config(min_date: Option<&str>, max_date: Option<&str>) -> Config {
    Config {
        allow_single_day_range: Some(false),
        boundary: None,
        min_date: min_date.map(|s| s.to_string()),
        max_date: max_date.map(|s| s.to_string()),
        shortcuts: Some(true),
        output: None,
    }
}

#[test]
#[serial]
fn test_config_load_default_creation() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("rangepick").join("rangepick.toml");

    // Save and restore XDG_CONFIG_HOME
    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }

    let result = Config::load();

    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    if let Err(e) = &result {
        eprintln!("Config::load() failed: {e:?}");
    }
    let config = result.unwrap();
    assert!(config_path.exists());
    assert_eq!(config.allow_single_day_range, Some(false));
    assert_eq!(config.output_format(), OutputFormat::Text);
}

#[test]
fn test_config_load_from_path() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("rangepick.toml");
    fs::write(
        &path,
        r#"
allow_single_day_range = true
boundary = "end"
min_date = "2024-01-01"
max_date = "2024-12-31"
shortcuts = false
output = "json"
"#,
    )
    .unwrap();

    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(config.allow_single_day_range, Some(true));
    assert_eq!(config.boundary, Some(Boundary::End));
    assert!(!config.shortcuts_enabled());
    assert_eq!(config.output_format(), OutputFormat::Json);

    let options = config.picker_options(today()).unwrap();
    assert!(options.allow_single_day_range);
    assert_eq!(options.boundary_to_modify, Some(Boundary::End));
    assert_eq!(options.min_date, parse_day(TEST_MIN_DATE).unwrap());
    assert_eq!(options.max_date, parse_day(TEST_MAX_DATE).unwrap());
}

#[test]
fn test_config_load_from_missing_path_fails() {
    let temp_dir = tempdir().unwrap();
    let result = Config::load_from_path(&temp_dir.path().join("missing.toml"));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config, Config::default());

    let options = config.picker_options(today()).unwrap();
    assert_eq!(options, PickerOptions::for_today(today()));
    assert!(config.shortcuts_enabled());
}

#[test]
fn test_partial_bounds_fill_from_defaults() {
    let config = create_test_config(Some("2020-06-01"), None);
    let options = config.picker_options(today()).unwrap();
    assert_eq!(options.min_date, parse_day("2020-06-01").unwrap());
    assert_eq!(options.max_date, parse_day(TEST_MAX_DATE).unwrap());
}

#[test]
fn test_config_validation_basic() {
    assert!(validate_config(&create_test_config(None, None)).is_ok());
    assert!(validate_config(&create_test_config(Some(TEST_MIN_DATE), Some(TEST_MAX_DATE))).is_ok());
    // Equal bounds leave exactly one selectable day
    assert!(validate_config(&create_test_config(Some(TEST_MIN_DATE), Some(TEST_MIN_DATE))).is_ok());
}

#[test]
fn test_config_validation_inverted_bounds() {
    let result = validate_config(&create_test_config(Some(TEST_MAX_DATE), Some(TEST_MIN_DATE)));
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("must not be after max_date")
    );
}

#[test]
fn test_config_validation_bad_dates() {
    assert!(validate_config(&create_test_config(Some("2024-13-01"), None)).is_err());
    assert!(validate_config(&create_test_config(None, Some("tomorrow"))).is_err());
}

#[test]
fn test_config_validation_year_limits() {
    assert!(validate_config(&create_test_config(Some("0000-01-01"), None)).is_err());
    assert!(validate_config(&create_test_config(Some("0001-01-01"), Some("9999-12-31"))).is_ok());
}

#[test]
fn test_parse_config_rejects_unknown_fields_and_values() {
    assert!(parse_config("backend = \"auto\"").is_err());
    assert!(parse_config("boundary = \"middle\"").is_err());
    assert!(parse_config("output = \"yaml\"").is_err());
}

#[test]
fn test_default_bounds_inverted_by_config() {
    // A min_date after the derived max_date passes field validation but fails
    // once combined with the defaults
    let config = create_test_config(Some("2030-01-01"), None);
    assert!(validate_config(&config).is_ok());
    assert!(config.picker_options(today()).is_err());
}
