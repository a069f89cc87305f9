//! Range picker state shell.
//!
//! [`RangePicker`] is the stateful half of a date range picker with the rendering
//! taken out. It owns the displayed range, the selectable bounds and the hover
//! preview, and routes every click and hover through
//! [`compute_next_state`](crate::selection::compute_next_state) so that no click
//! semantics are re-derived here.
//!
//! ## Controlled vs uncontrolled
//!
//! - **Uncontrolled**: the picker keeps the value itself. Clicks update it and then
//!   notify change listeners.
//! - **Controlled**: the host owns the value. Clicks only notify listeners with the
//!   proposed range; the displayed value changes when the host calls
//!   [`RangePicker::set_value`].
//!
//! Each state change replaces the stored snapshot wholesale, so a host that applies
//! results from a single thread never observes a half-applied update.

use chrono::NaiveDate;
use std::fmt;

use crate::dates::{clamp_day, default_max_date, default_min_date, is_day_in_range};
use crate::range::DateRange;
use crate::selection::{Boundary, SelectionResult, compute_next_state};
use crate::shortcuts::Shortcut;

/// Errors raised when a picker is configured or fed a value it cannot hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// `min_date` is after `max_date`
    InvalidBounds {
        min_date: NaiveDate,
        max_date: NaiveDate,
    },
    /// A range has a side outside `[min_date, max_date]`
    OutOfBounds {
        range: DateRange,
        min_date: NaiveDate,
        max_date: NaiveDate,
    },
    /// A range would start and end on `day` while single-day ranges are off
    SingleDayNotAllowed { day: NaiveDate },
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerError::InvalidBounds { min_date, max_date } => {
                write!(f, "min_date {min_date} is after max_date {max_date}")
            }
            PickerError::OutOfBounds {
                range,
                min_date,
                max_date,
            } => write!(
                f,
                "range {range} is outside the selectable days {min_date}..{max_date}"
            ),
            PickerError::SingleDayNotAllowed { day } => {
                write!(f, "range would cover only {day} but single-day ranges are not allowed")
            }
        }
    }
}

impl std::error::Error for PickerError {}

/// Behaviour and bounds of a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerOptions {
    /// Whether a range may start and end on the same day
    pub allow_single_day_range: bool,
    /// Boundary every click is directed at, or `None` for toggle mode
    pub boundary_to_modify: Option<Boundary>,
    /// Earliest selectable day (inclusive)
    pub min_date: NaiveDate,
    /// Latest selectable day (inclusive)
    pub max_date: NaiveDate,
}

impl PickerOptions {
    /// Defaults relative to `today`: toggle mode, no single-day ranges, and bounds
    /// from January 1st twenty years back to the end of the year six months ahead.
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            allow_single_day_range: crate::constants::DEFAULT_ALLOW_SINGLE_DAY_RANGE,
            boundary_to_modify: None,
            min_date: default_min_date(today),
            max_date: default_max_date(today),
        }
    }

    pub fn validate(&self) -> Result<(), PickerError> {
        if self.min_date > self.max_date {
            return Err(PickerError::InvalidBounds {
                min_date: self.min_date,
                max_date: self.max_date,
            });
        }
        Ok(())
    }

    /// Whether `day` can be clicked or hovered.
    pub fn is_selectable(&self, day: NaiveDate) -> bool {
        is_day_in_range(day, self.min_date, self.max_date)
    }

    fn check_range(&self, range: DateRange) -> Result<(), PickerError> {
        let in_bounds = [range.start, range.end]
            .into_iter()
            .flatten()
            .all(|day| self.is_selectable(day));
        if in_bounds {
            Ok(())
        } else {
            Err(PickerError::OutOfBounds {
                range,
                min_date: self.min_date,
                max_date: self.max_date,
            })
        }
    }
}

/// The range a click on `day` would produce, shown while hovering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverPreview {
    pub day: NaiveDate,
    pub range: DateRange,
    pub boundary: Option<Boundary>,
}

/// Callback invoked with the new (or, when controlled, proposed) range.
pub type ChangeListener = Box<dyn FnMut(&DateRange) + Send>;

/// Stateful range picker without rendering.
pub struct RangePicker {
    options: PickerOptions,
    value: DateRange,
    controlled: bool,
    hover: Option<HoverPreview>,
    listeners: Vec<ChangeListener>,
}

impl fmt::Debug for RangePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangePicker")
            .field("options", &self.options)
            .field("value", &self.value)
            .field("controlled", &self.controlled)
            .field("hover", &self.hover)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl RangePicker {
    /// Create a picker that keeps its own value, starting at `initial`.
    pub fn uncontrolled(options: PickerOptions, initial: DateRange) -> Result<Self, PickerError> {
        Self::build(options, initial, false)
    }

    /// Create a picker whose value is owned by the host.
    pub fn controlled(options: PickerOptions, value: DateRange) -> Result<Self, PickerError> {
        Self::build(options, value, true)
    }

    fn build(options: PickerOptions, value: DateRange, controlled: bool) -> Result<Self, PickerError> {
        options.validate()?;
        options.check_range(value)?;
        Ok(Self {
            options,
            value: value.ordered(),
            controlled,
            hover: None,
            listeners: Vec::new(),
        })
    }

    /// The committed value.
    pub fn value(&self) -> DateRange {
        self.value
    }

    pub fn hover_preview(&self) -> Option<HoverPreview> {
        self.hover
    }

    /// What a view should draw: the hover preview if there is one, else the value.
    pub fn displayed_range(&self) -> DateRange {
        self.hover.map(|hover| hover.range).unwrap_or(self.value)
    }

    /// Register a change listener.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&DateRange) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Replace the value from the host. Does not notify listeners.
    pub fn set_value(&mut self, value: DateRange) -> Result<(), PickerError> {
        self.options.check_range(value)?;
        self.value = value.ordered();
        self.hover = None;
        Ok(())
    }

    /// Handle a click on `day`.
    ///
    /// Days outside the selectable bounds are ignored and return `None`.
    pub fn click(&mut self, day: NaiveDate) -> Option<SelectionResult> {
        if !self.options.is_selectable(day) {
            return None;
        }

        let result = self.next_state(day);
        self.hover = None;
        self.commit(result.range);
        Some(result)
    }

    /// Handle the pointer entering `day`.
    ///
    /// Disabled days clear any existing preview.
    pub fn hover(&mut self, day: NaiveDate) -> Option<HoverPreview> {
        if !self.options.is_selectable(day) {
            self.hover = None;
            return None;
        }

        let result = self.next_state(day);
        let preview = HoverPreview {
            day,
            range: result.range,
            boundary: result.boundary,
        };
        self.hover = Some(preview);
        Some(preview)
    }

    /// Handle the pointer leaving the calendar.
    pub fn leave(&mut self) {
        self.hover = None;
    }

    /// Apply a preset, clamped to the selectable bounds.
    ///
    /// Presets that do not overlap the bounds at all are rejected, as are presets
    /// clamped down to one day when single-day ranges are not allowed.
    pub fn apply_shortcut(&mut self, shortcut: &Shortcut) -> Result<DateRange, PickerError> {
        let PickerOptions {
            min_date, max_date, ..
        } = self.options;
        let range = shortcut.range.ordered();

        let misses_bounds = range.end.is_some_and(|end| end < min_date)
            || range.start.is_some_and(|start| start > max_date);
        if misses_bounds {
            return Err(PickerError::OutOfBounds {
                range,
                min_date,
                max_date,
            });
        }

        let clamped = DateRange::new(
            range.start.map(|day| clamp_day(day, min_date, max_date)),
            range.end.map(|day| clamp_day(day, min_date, max_date)),
        );
        if let Some(day) = clamped.start
            && clamped.is_single_day()
            && !self.options.allow_single_day_range
        {
            return Err(PickerError::SingleDayNotAllowed { day });
        }

        self.hover = None;
        self.commit(clamped);
        Ok(clamped)
    }

    fn next_state(&self, day: NaiveDate) -> SelectionResult {
        compute_next_state(
            self.value,
            day,
            self.options.allow_single_day_range,
            self.options.boundary_to_modify,
        )
    }

    fn commit(&mut self, range: DateRange) {
        if !self.controlled {
            self.value = range;
        }
        for listener in &mut self.listeners {
            listener(&range);
        }
    }
}
