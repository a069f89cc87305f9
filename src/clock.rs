//! "Today" provider abstraction.
//!
//! Presets and default picker bounds are relative to the current day. This module
//! lets the application use either the system's local date or a pinned date, so
//! `--today` and tests produce stable output.

use chrono::{Local, NaiveDate};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Global clock instance, defaults to SystemClock
static CLOCK: OnceCell<Arc<dyn Clock>> = OnceCell::new();

/// Trait for abstracting the current day
pub trait Clock: Send + Sync {
    /// The current calendar day
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system date
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always reports the same day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    day: NaiveDate,
}

impl FixedClock {
    pub fn new(day: NaiveDate) -> Self {
        Self { day }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.day
    }
}

/// Install the global clock. Only the first call takes effect.
///
/// Returns false if a clock was already installed.
pub fn init_clock(clock: Arc<dyn Clock>) -> bool {
    CLOCK.set(clock).is_ok()
}

/// The current day from the global clock, installing `SystemClock` on first use.
pub fn today() -> NaiveDate {
    CLOCK.get_or_init(|| Arc::new(SystemClock)).today()
}
