//! shellkit sample application
//!
//! Registers the bundled tools into a fresh registry and hands control to
//! the driver. All command semantics live in the tool modules; this file
//! is only bootstrap and exit-code plumbing.

mod tools;

use clap::Command;
use colored::Colorize;

use shellkit_core::EXIT_CODE_FAILED;
use shellkit_tools::ToolRegistry;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    // A second subscriber in the same process is the only failure mode;
    // logging just stays on the first one.
    let _ = shellkit_core::logging::init();

    let mut registry = ToolRegistry::new();
    if let Err(e) = tools::register_all(&mut registry) {
        eprintln!("{}: {}", "error".red().bold(), e);
        return EXIT_CODE_FAILED;
    }

    let command = Command::new("shellkit")
        .about("Flexible CLI tool builder")
        .version(env!("CARGO_PKG_VERSION"));

    match shellkit_tools::run(registry, command, std::env::args_os()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            EXIT_CODE_FAILED
        }
    }
}
