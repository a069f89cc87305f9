//! Application-wide constants and defaults.

// # Formats

/// Textual form of a calendar day everywhere in the application.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

// # Picker defaults

pub const DEFAULT_ALLOW_SINGLE_DAY_RANGE: bool = false;
pub const DEFAULT_SHORTCUTS: bool = true;
pub const DEFAULT_OUTPUT: &str = "text";

/// The default lower bound is January 1st this many years before today.
pub const DEFAULT_MIN_DATE_YEARS_BACK: i32 = 20;
/// The default upper bound is December 31st of the year this many months after today.
pub const DEFAULT_MAX_DATE_MONTHS_AHEAD: u32 = 6;

// # Validation limits

/// Earliest year accepted for configured bounds.
pub const MINIMUM_YEAR: i32 = 1;
/// Latest year accepted for configured bounds.
pub const MAXIMUM_YEAR: i32 = 9999;

// # Configuration files

pub const CONFIG_DIR_NAME: &str = "rangepick";
pub const CONFIG_FILE_NAME: &str = "rangepick.toml";

// # Exit codes

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
