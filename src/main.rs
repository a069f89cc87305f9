//! Command-line entry point.
//!
//! Parses arguments into a [`CliAction`] and hands off to the matching command
//! handler. Errors from handlers are reported through the logger and turned into a
//! non-zero exit code.

use anyhow::Result;

use rangepick::args::{self, CliAction, ParsedArgs};
use rangepick::commands;
use rangepick::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use rangepick::logger::Log;
use rangepick::{log_end, log_error_exit};

fn run(action: CliAction) -> Result<i32> {
    match action {
        CliAction::ShowVersion => args::display_version_info(),
        CliAction::ShowHelp => args::display_help(),
        CliAction::ShowHelpDueToError => {
            args::display_help();
            return Ok(EXIT_FAILURE);
        }
        CliAction::HelpCommand { command } => {
            commands::help::run_help_command(command.as_deref())?
        }
        CliAction::Click { options, days } => {
            commands::click::handle_click_command(&options, &days)?
        }
        CliAction::Hover { options, day } => commands::hover::handle_hover_command(&options, day)?,
        CliAction::Shortcuts { options, apply } => {
            commands::shortcuts::handle_shortcuts_command(&options, apply.as_deref())?
        }
    }
    Ok(EXIT_SUCCESS)
}

fn main() {
    let parsed_args = ParsedArgs::from_env();

    let code = match run(parsed_args.action) {
        Ok(code) => code,
        Err(e) => {
            // Errors are always shown, even when JSON output silenced the log
            Log::set_enabled(true);
            log_error_exit!("{:#}", e);
            log_end!();
            EXIT_FAILURE
        }
    };

    std::process::exit(code);
}
