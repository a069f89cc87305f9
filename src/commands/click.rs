//! Click command: replay a sequence of day clicks through the picker.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;

use super::{Session, describe_range, print_json};
use crate::args::CommonOptions;
use crate::picker::RangePicker;
use crate::range::DateRange;
use crate::selection::Boundary;

/// One replayed click.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClickStep {
    pub day: NaiveDate,
    /// `false` when the day was outside the selectable bounds
    pub accepted: bool,
    pub range: DateRange,
    pub boundary: Option<Boundary>,
}

/// Apply each click in order and record the state after it.
pub fn replay_clicks(picker: &mut RangePicker, days: &[NaiveDate]) -> Vec<ClickStep> {
    days.iter()
        .map(|&day| match picker.click(day) {
            Some(result) => ClickStep {
                day,
                accepted: true,
                range: result.range,
                boundary: result.boundary,
            },
            None => ClickStep {
                day,
                accepted: false,
                range: picker.value(),
                boundary: None,
            },
        })
        .collect()
}

/// Handle `rangepick click <DAY>...`.
pub fn handle_click_command(cli: &CommonOptions, days: &[NaiveDate]) -> Result<()> {
    let session = Session::prepare(cli)?;
    let mut picker = session.picker()?;

    let steps = replay_clicks(&mut picker, days);

    if session.is_json() {
        return print_json(&json!({
            "start": session.starting_range,
            "steps": steps,
            "range": picker.value(),
        }));
    }

    log_block_start!("Starting range: {}", describe_range(&session.starting_range));
    if let Some(boundary) = session.options.boundary_to_modify {
        log_indented!("Clicks move the {} boundary", boundary);
    }

    for step in &steps {
        if !step.accepted {
            log_pipe!();
            log_warning!(
                "{} is outside the selectable days ({} to {}), ignored",
                step.day,
                session.options.min_date,
                session.options.max_date
            );
            continue;
        }

        log_block_start!("Click {}", step.day);
        log_decorated!("Range: {}", describe_range(&step.range));
        if let Some(boundary) = step.boundary {
            log_decorated!("Affected boundary: {}", boundary);
            if session.options.boundary_to_modify != Some(boundary) {
                log_debug!("Boundary switched to {} to keep the range ordered", boundary);
            }
        }
    }

    let final_range = picker.value();
    log_block_start!("Final range: {}", describe_range(&final_range));
    if session.options.boundary_to_modify.is_none()
        && !final_range.is_empty()
        && let Some(missing) = final_range.missing_boundary()
    {
        log_indented!("The next click picks the {} day", missing);
    }
    log_end!();
    Ok(())
}

/// Display help for the click command.
pub fn display_help() {
    log_version!();
    log_block_start!("click - Replay day clicks on a range picker");
    log_block_start!("Usage: rangepick [OPTIONS] click <DAY>...");
    log_block_start!("Arguments:");
    log_indented!("DAY  Day to click, as YYYY-MM-DD. Clicks are applied in order.");
    log_block_start!("Behavior:");
    log_indented!("Without --boundary, clicks toggle: the first click starts a range,");
    log_indented!("the second completes it, and clicking a selected end deselects it.");
    log_indented!("With --boundary, each click moves that end of the range and the");
    log_indented!("affected boundary is reported after every click.");
    log_block_start!("Examples:");
    log_indented!("rangepick click 2024-03-14 2024-03-10");
    log_indented!("rangepick --range 2024-03-10..2024-03-18 --boundary start click 2024-03-22");
    log_indented!("rangepick --allow-single-day --json click 2024-03-10 2024-03-10");
    log_end!();
}
