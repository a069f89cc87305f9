//! Shortcuts command: list or apply preset ranges relative to today.

use anyhow::{Context, Result};
use serde_json::json;

use super::{Session, describe_range, print_json};
use crate::args::CommonOptions;
use crate::shortcuts::{default_shortcuts, find_shortcut};

/// Handle `rangepick shortcuts [LABEL]`.
pub fn handle_shortcuts_command(cli: &CommonOptions, apply: Option<&str>) -> Result<()> {
    let session = Session::prepare(cli)?;

    if !session.config.shortcuts_enabled() {
        anyhow::bail!("Shortcuts are disabled in the configuration (shortcuts = false)");
    }

    let shortcuts = default_shortcuts(session.today, session.options.allow_single_day_range);

    let Some(label) = apply else {
        if session.is_json() {
            return print_json(&json!({
                "today": session.today,
                "shortcuts": shortcuts,
            }));
        }

        log_block_start!("Shortcuts for {}", session.today);
        for shortcut in &shortcuts {
            log_indented!("{:<14} {}", shortcut.label, describe_range(&shortcut.range));
        }
        log_end!();
        return Ok(());
    };

    let shortcut = find_shortcut(&shortcuts, label).with_context(|| {
        let labels: Vec<_> = shortcuts.iter().map(|s| s.label.as_str()).collect();
        format!(
            "Unknown shortcut '{label}'. Available: {}",
            labels.join(", ")
        )
    })?;

    let mut picker = session.picker()?;
    let range = picker.apply_shortcut(shortcut)?;

    if session.is_json() {
        return print_json(&json!({
            "label": shortcut.label,
            "range": range,
        }));
    }

    log_block_start!("Applied shortcut: {}", shortcut.label);
    log_indented!("Range: {}", describe_range(&range));
    if range != shortcut.range {
        log_indented!(
            "Clamped to the selectable days ({} to {})",
            session.options.min_date,
            session.options.max_date
        );
    }
    log_end!();
    Ok(())
}

/// Display help for the shortcuts command.
pub fn display_help() {
    log_version!();
    log_block_start!("shortcuts - Preset ranges ending today");
    log_block_start!("Usage: rangepick [OPTIONS] shortcuts [LABEL]");
    log_block_start!("Arguments:");
    log_indented!("LABEL  Preset to apply, e.g. \"Past week\" (case-insensitive)");
    log_indented!("       If omitted, lists every preset");
    log_block_start!("Notes:");
    log_indented!("\"Today\" and \"Yesterday\" are only offered with --allow-single-day.");
    log_indented!("Applied presets are clamped to --min/--max.");
    log_block_start!("Examples:");
    log_indented!("rangepick --today 2024-03-15 shortcuts");
    log_indented!("rangepick shortcuts past 3 months");
    log_end!();
}
