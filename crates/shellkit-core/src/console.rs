//! Colored console output for user-facing messages
//!
//! Diagnostics go through `tracing`; these functions are for text the user
//! is meant to read. Callers format with `format!` and pass the result.

use colored::Colorize;

use crate::EXIT_CODE_FAILED;

/// Print an informational message to stdout.
pub fn info(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref());
}

/// Print a debug message to stdout, rendered cyan.
pub fn debug(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref().cyan());
}

/// Print a warning to stderr, rendered yellow.
pub fn warn(msg: impl AsRef<str>) {
    eprintln!("{}", msg.as_ref().yellow());
}

/// Print an error to stderr, rendered red.
pub fn error(msg: impl AsRef<str>) {
    eprintln!("{}", msg.as_ref().red());
}

/// Print an error and terminate the process with the failure exit code.
pub fn die(msg: impl AsRef<str>) -> ! {
    error(msg);
    std::process::exit(EXIT_CODE_FAILED);
}
