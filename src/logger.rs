//! Structured terminal logging with box-drawing output.
//!
//! Every line goes through [`write_output`], which prints to stdout or, while a
//! [`LoggerGuard`] from [`Log::start_file_logging`] is alive, forwards the line
//! (with ANSI colors stripped) to a background writer thread.
//!
//! ## Conventions
//!
//! - **`log_version!`** opens the output: `┏ rangepick vX.Y.Z ━━╸`.
//! - **`log_block_start!`** starts a new block: an empty `┃` then `┣ message`.
//! - **`log_decorated!`** continues a block: `┣ message`.
//! - **`log_indented!`** nests details under the previous line: `┃   message`.
//! - **`log_pipe!`** inserts a lone `┃` for spacing, typically before a leveled message.
//! - **`log_end!`** closes the output: `╹`.
//! - **`log_info!`, `log_warning!`** print `┣[LEVEL] message`.
//! - **`log_debug!`** is the same but only prints once debug output is enabled.
//! - **`log_error_exit!`** terminates a flow: `┃` then `┗[ERROR] message`.

use std::io::Write;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Sender, channel};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

// Set once when --log is active
static LOG_CHANNEL: OnceLock<Sender<LogMessage>> = OnceLock::new();

enum LogMessage {
    Formatted(String),
    Shutdown,
}

/// Global switches for the logging macros.
pub struct Log;

impl Log {
    /// Enable or disable all output, e.g. to keep `--json` output machine-readable.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Enable or disable `log_debug!` output.
    pub fn set_debug(enabled: bool) {
        DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_debug() -> bool {
        Self::is_enabled() && DEBUG_ENABLED.load(Ordering::SeqCst)
    }

    /// Route all further output to `file_path` until the returned guard drops.
    pub fn start_file_logging(file_path: String) -> anyhow::Result<LoggerGuard> {
        let (tx, rx) = channel();

        LOG_CHANNEL
            .set(tx.clone())
            .map_err(|_| anyhow::anyhow!("Logger channel already initialized"))?;

        let handle = std::thread::spawn(move || {
            let mut file = std::fs::File::create(&file_path)?;

            loop {
                match rx.recv() {
                    Ok(LogMessage::Formatted(text)) => file.write_all(text.as_bytes())?,
                    Ok(LogMessage::Shutdown) | Err(_) => {
                        file.flush()?;
                        break;
                    }
                }
            }

            Ok::<(), anyhow::Error>(())
        });

        Ok(LoggerGuard {
            tx,
            handle: Some(handle),
        })
    }
}

/// Keeps file logging alive; flushes and joins the writer thread on drop.
pub struct LoggerGuard {
    tx: Sender<LogMessage>,
    handle: Option<std::thread::JoinHandle<anyhow::Result<()>>>,
}

impl Drop for LoggerGuard {
    fn drop(&mut self) {
        let _ = self.tx.send(LogMessage::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Remove `ESC [ ... m` color sequences.
pub(crate) fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch == 'm' {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
thread_local! {
    static CAPTURED: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

/// Run `f` with this thread's output collected instead of printed.
#[cfg(test)]
pub(crate) fn capture_output<R>(f: impl FnOnce() -> R) -> (R, String) {
    CAPTURED.with(|cell| *cell.borrow_mut() = Some(String::new()));
    let result = f();
    let output = CAPTURED.with(|cell| cell.borrow_mut().take().unwrap_or_default());
    (result, output)
}

/// Route one formatted chunk of output. Public for macro access.
pub fn write_output(text: &str) {
    #[cfg(test)]
    {
        let captured = CAPTURED.with(|cell| match cell.borrow_mut().as_mut() {
            Some(buffer) => {
                buffer.push_str(text);
                true
            }
            None => false,
        });
        if captured {
            return;
        }
    }

    if let Some(tx) = LOG_CHANNEL.get() {
        let _ = tx.send(LogMessage::Formatted(strip_ansi_codes(text)));
    } else {
        print!("{text}");
        let _ = std::io::stdout().flush();
    }
}

// # Logging Macros

/// Shared body of the line macros: `lead` is written before the message.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_line {
    ($lead:expr, $fmt:literal $($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!("{}{message}\n", $lead));
        }
    }};
    ($lead:expr, $expr:expr) => {{
        if $crate::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::logger::write_output(&format!("{}{expr}\n", $lead));
        }
    }};
}

/// Log a line that continues the current block.
#[macro_export]
macro_rules! log_decorated {
    ($($t:tt)*) => { $crate::__log_line!("┣ ", $($t)*) };
}

/// Log a nested detail line.
#[macro_export]
macro_rules! log_indented {
    ($($t:tt)*) => { $crate::__log_line!("┃   ", $($t)*) };
}

/// Log an empty pipe for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {{
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output("┃\n");
        }
    }};
}

/// Log the first line of a new block.
#[macro_export]
macro_rules! log_block_start {
    ($($t:tt)*) => { $crate::__log_line!("┃\n┣ ", $($t)*) };
}

/// Log the application header.
#[macro_export]
macro_rules! log_version {
    () => {{
        if $crate::logger::Log::is_enabled() {
            let version = env!("CARGO_PKG_VERSION");
            $crate::logger::write_output(&format!("┏ rangepick v{version} ━━╸\n"));
        }
    }};
}

/// Log the termination marker.
#[macro_export]
macro_rules! log_end {
    () => {{
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output("╹\n");
        }
    }};
}

/// Log a warning in yellow.
#[macro_export]
macro_rules! log_warning {
    ($($t:tt)*) => { $crate::__log_line!("┣[\x1b[33mWARNING\x1b[0m] ", $($t)*) };
}

/// Log a warning without the pipe prefix.
#[macro_export]
macro_rules! log_warning_standalone {
    ($($t:tt)*) => { $crate::__log_line!("[\x1b[33mWARNING\x1b[0m] ", $($t)*) };
}

/// Log an error that terminates the current flow.
#[macro_export]
macro_rules! log_error_exit {
    ($($t:tt)*) => { $crate::__log_line!("┃\n┗[\x1b[31mERROR\x1b[0m] ", $($t)*) };
}

/// Log an informational message in green.
#[macro_export]
macro_rules! log_info {
    ($($t:tt)*) => { $crate::__log_line!("┣[\x1b[32mINFO\x1b[0m] ", $($t)*) };
}

/// Log a debug message; silent unless `Log::set_debug(true)` was called.
#[macro_export]
macro_rules! log_debug {
    ($($t:tt)*) => {{
        if $crate::logger::Log::is_debug() {
            $crate::__log_line!("┣[\x1b[32mDEBUG\x1b[0m] ", $($t)*);
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ansi_codes() {
        assert_eq!(
            strip_ansi_codes("┣[\x1b[31mERROR\x1b[0m] boom"),
            "┣[ERROR] boom"
        );
        assert_eq!(strip_ansi_codes("plain"), "plain");
        assert_eq!(strip_ansi_codes("\x1bX"), "\x1bX");
    }

    #[test]
    #[serial_test::serial]
    fn test_capture_output_collects_macro_lines() {
        let (_, output) = capture_output(|| {
            log_decorated!("Range: {}", "2024-03-10..");
            log_indented!("detail");
        });
        assert_eq!(output, "┣ Range: 2024-03-10..\n┃   detail\n");

        Log::set_enabled(false);
        let (_, output) = capture_output(|| log_decorated!("hidden"));
        Log::set_enabled(true);
        assert!(output.is_empty());
    }
}
