//! Command-line argument parsing.
//!
//! Arguments are parsed by hand into a [`CliAction`]. Day, range and boundary
//! values are validated here so that command handlers receive typed values;
//! anything malformed logs a warning and yields [`CliAction::ShowHelpDueToError`].

use chrono::NaiveDate;

use crate::dates::parse_day;
use crate::range::DateRange;
use crate::selection::Boundary;

/// Options shared by every command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonOptions {
    pub debug_enabled: bool,
    pub config_dir: Option<String>,
    /// Starting range (`--range START..END`)
    pub range: Option<DateRange>,
    /// Overrides the configured boundary (`--boundary start|end`)
    pub boundary: Option<Boundary>,
    /// Forces single-day ranges on (`--allow-single-day`)
    pub allow_single_day: bool,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    /// Pins "today" (`--today DAY`)
    pub today: Option<NaiveDate>,
    /// Forces JSON output (`--json`)
    pub json: bool,
    /// Routes log output to a file (`--log PATH`)
    pub log_file: Option<String>,
}

/// Represents the parsed command-line arguments and their intended action.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Replay clicks on each day in order
    Click {
        options: CommonOptions,
        days: Vec<NaiveDate>,
    },
    /// Preview the range a click on `day` would produce
    Hover { options: CommonOptions, day: NaiveDate },
    /// List preset ranges, or apply one by label
    Shortcuts {
        options: CommonOptions,
        apply: Option<String>,
    },
    /// Show detailed help for a command
    HelpCommand { command: Option<String> },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to invalid arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse `args`, where the first item is the program name.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        ParsedArgs {
            action: parse_action(&args_vec).unwrap_or(CliAction::ShowHelpDueToError),
        }
    }

    /// Parse the current process's arguments.
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Parse everything after the program name. `None` means the error was already logged.
fn parse_action(args: &[String]) -> Option<CliAction> {
    // Help and version take precedence over everything else
    if args.iter().any(|arg| arg == "--version" || arg == "-V" || arg == "-v") {
        return Some(CliAction::ShowVersion);
    }
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return Some(CliAction::ShowHelp);
    }

    let mut options = CommonOptions::default();
    let mut positionals: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if !arg.starts_with('-') {
            positionals.push(arg);
            i += 1;
            continue;
        }

        match arg {
            "--debug" | "-d" => options.debug_enabled = true,
            "--json" | "-j" => options.json = true,
            "--allow-single-day" | "-s" => options.allow_single_day = true,
            "--config" | "-c" => options.config_dir = Some(take_value(args, &mut i, arg)?),
            "--log" | "-l" => options.log_file = Some(take_value(args, &mut i, arg)?),
            "--range" | "-r" => {
                let value = take_value(args, &mut i, arg)?;
                options.range = Some(parse_or_warn(&value, |v| v.parse::<DateRange>())?);
            }
            "--boundary" | "-b" => {
                let value = take_value(args, &mut i, arg)?;
                options.boundary = Some(parse_or_warn(&value, |v| v.parse::<Boundary>())?);
            }
            "--min" => {
                let value = take_value(args, &mut i, arg)?;
                options.min_date = Some(parse_or_warn(&value, parse_day)?);
            }
            "--max" => {
                let value = take_value(args, &mut i, arg)?;
                options.max_date = Some(parse_or_warn(&value, parse_day)?);
            }
            "--today" | "-t" => {
                let value = take_value(args, &mut i, arg)?;
                options.today = Some(parse_or_warn(&value, parse_day)?);
            }
            unknown => {
                log_warning!("Unknown option: {}", unknown);
                return None;
            }
        }
        i += 1;
    }

    let Some((&command, rest)) = positionals.split_first() else {
        log_warning!("Missing command");
        return None;
    };

    match command {
        "click" | "c" => {
            if rest.is_empty() {
                log_warning!("Missing days for click. Usage: rangepick click <DAY>...");
                return None;
            }
            let days = rest
                .iter()
                .map(|day| parse_or_warn(day, parse_day))
                .collect::<Option<Vec<_>>>()?;
            Some(CliAction::Click { options, days })
        }
        "hover" | "H" => match rest {
            [day] => Some(CliAction::Hover {
                options,
                day: parse_or_warn(day, parse_day)?,
            }),
            _ => {
                log_warning!("hover takes exactly one day. Usage: rangepick hover <DAY>");
                None
            }
        },
        "shortcuts" | "s" => match rest {
            [] => Some(CliAction::Shortcuts {
                options,
                apply: None,
            }),
            labels => Some(CliAction::Shortcuts {
                options,
                apply: Some(labels.join(" ")),
            }),
        },
        "help" | "h" => match rest {
            [] => Some(CliAction::HelpCommand { command: None }),
            [topic] => Some(CliAction::HelpCommand {
                command: Some(topic.to_string()),
            }),
            _ => {
                log_warning!("help takes at most one command");
                None
            }
        },
        unknown => {
            log_warning!("Unknown command: {}", unknown);
            None
        }
    }
}

/// Consume the value following the flag at `args[*i]`.
fn take_value(args: &[String], i: &mut usize, flag: &str) -> Option<String> {
    match args.get(*i + 1) {
        Some(value) if !value.starts_with('-') => {
            *i += 1;
            Some(value.clone())
        }
        _ => {
            log_warning!("Missing value for {}", flag);
            None
        }
    }
}

fn parse_or_warn<T>(value: &str, parse: impl Fn(&str) -> anyhow::Result<T>) -> Option<T> {
    match parse(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log_warning!("{:#}", e);
            None
        }
    }
}

/// Display version information.
pub fn display_version_info() {
    log_version!();
    log_end!();
}

/// Display general usage.
pub fn display_help() {
    log_version!();
    log_block_start!("Usage: rangepick [OPTIONS] <COMMAND> [ARGS]");
    log_block_start!("Commands:");
    log_indented!("click, c <DAY>...        Replay clicks and show the range after each one");
    log_indented!("hover, H <DAY>           Preview the range a click on DAY would produce");
    log_indented!("shortcuts, s [LABEL]     List preset ranges, or apply the one named LABEL");
    log_indented!("help, h [COMMAND]        Show detailed help for a command");
    log_block_start!("Options:");
    log_indented!("-r, --range <START..END>  Starting range (either side may be empty)");
    log_indented!("-b, --boundary <SIDE>     Direct every click at 'start' or 'end'");
    log_indented!("-s, --allow-single-day    Allow ranges that start and end on the same day");
    log_indented!("    --min <DAY>           Earliest selectable day");
    log_indented!("    --max <DAY>           Latest selectable day");
    log_indented!("-t, --today <DAY>         Pin today's date");
    log_indented!("-j, --json                Print results as JSON");
    log_indented!("-c, --config <DIR>        Use a custom configuration directory");
    log_indented!("-l, --log <PATH>          Write log output to a file");
    log_indented!("-d, --debug               Show detailed selection steps");
    log_indented!("-h, --help                Print help");
    log_indented!("-V, --version             Print version");
    log_pipe!();
    log_info!("Days use the YYYY-MM-DD format.");
    log_end!();
}
