//! # Rangepick Library
//!
//! Date range selection engine and the state shell of a range picker, plus the
//! pieces behind the `rangepick` command-line tool.
//!
//! ## Architecture
//!
//! - **Core**: [`selection`] decides what a day click does to the current range;
//!   [`range`] holds the `DateRange` value type it works on
//! - **Picker shell**: [`picker`] wraps the core with bounds, hover previews,
//!   controlled/uncontrolled values and change listeners; [`shortcuts`] builds
//!   preset ranges
//! - **Dates**: [`dates`] for day-level helpers and [`clock`] for "today"
//! - **Application**: [`config`] for TOML settings, [`args`] and [`commands`] for
//!   the CLI, [`logger`] for structured terminal output

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod clock;
pub mod commands;
pub mod config;
pub mod constants;
pub mod dates;
pub mod picker;
pub mod range;
pub mod selection;
pub mod shortcuts;

pub use picker::{PickerError, PickerOptions, RangePicker};
pub use range::DateRange;
pub use selection::{Boundary, SelectionResult, compute_next_state};
