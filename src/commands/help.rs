//! Help command dispatcher.

use anyhow::Result;

/// Run `rangepick help [COMMAND]`.
pub fn run_help_command(command: Option<&str>) -> Result<()> {
    match command {
        None => crate::args::display_help(),
        Some("click") | Some("c") => super::click::display_help(),
        Some("hover") | Some("H") => super::hover::display_help(),
        Some("shortcuts") | Some("s") => super::shortcuts::display_help(),
        Some("help") | Some("h") => display_help_help(),
        Some(unknown) => {
            log_warning_standalone!("Unknown command: {}", unknown);
            crate::args::display_help();
        }
    }
    Ok(())
}

fn display_help_help() {
    log_version!();
    log_block_start!("help - Display help information");
    log_block_start!("Usage: rangepick help [COMMAND]");
    log_block_start!("Examples:");
    log_indented!("rangepick help");
    log_indented!("rangepick help click");
    log_end!();
}
