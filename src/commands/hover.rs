//! Hover command: preview what a click would do without committing it.

use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use super::{Session, describe_range, print_json};
use crate::args::CommonOptions;

/// Handle `rangepick hover <DAY>`.
pub fn handle_hover_command(cli: &CommonOptions, day: NaiveDate) -> Result<()> {
    let session = Session::prepare(cli)?;
    let mut picker = session.picker()?;

    let preview = picker.hover(day);

    if session.is_json() {
        return print_json(&json!({
            "day": day,
            "selectable": preview.is_some(),
            "current": picker.value(),
            "in_current": picker.value().contains(day),
            "preview": preview.map(|p| p.range),
            "boundary": preview.and_then(|p| p.boundary),
        }));
    }

    log_block_start!("Current range: {}", describe_range(&picker.value()));

    match preview {
        Some(preview) => {
            log_block_start!("Hovering {}", day);
            if picker.value().contains(day) {
                log_decorated!("Day is part of the current selection");
            }
            log_indented!("Preview: {}", describe_range(&preview.range));
            if let Some(boundary) = preview.boundary {
                log_indented!("Would affect boundary: {}", boundary);
            }
            if preview.range == picker.value() {
                log_debug!("A click here would not change the range");
            }
        }
        None => {
            log_pipe!();
            log_warning!(
                "{} is outside the selectable days ({} to {})",
                day,
                session.options.min_date,
                session.options.max_date
            );
        }
    }

    log_end!();
    Ok(())
}

/// Display help for the hover command.
pub fn display_help() {
    log_version!();
    log_block_start!("hover - Preview the range a click would produce");
    log_block_start!("Usage: rangepick [OPTIONS] hover <DAY>");
    log_block_start!("Arguments:");
    log_indented!("DAY  Day under the pointer, as YYYY-MM-DD");
    log_block_start!("Examples:");
    log_indented!("rangepick --range 2024-03-10.. hover 2024-03-20");
    log_indented!("rangepick --range 2024-03-10..2024-03-18 --boundary end hover 2024-03-04");
    log_end!();
}
