//! Top-level CLI driver
//!
//! Owns the outer argument parser: three global boolean flags, a required
//! sub-command selected from the registry, and exit-code plumbing.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};

use shellkit_core::{EXIT_CODE_FAILED, EXIT_CODE_SUCCESS};

use crate::error::Result;
use crate::registry::ToolRegistry;

/// The global flags every tool can read from its own matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunFlags {
    /// Run the selected tool in clean mode
    pub clean: bool,
    /// Report what would happen without doing it
    pub dryrun: bool,
    /// Proceed even when preconditions fail
    pub force: bool,
}

impl RunFlags {
    /// Decode the global flags from any sub-command's matches.
    pub fn from_matches(args: &ArgMatches) -> Self {
        Self {
            clean: args.get_flag("clean"),
            dryrun: args.get_flag("dryrun"),
            force: args.get_flag("force"),
        }
    }
}

fn global_flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .action(ArgAction::SetTrue)
        .global(true)
}

/// Run the CLI: initialize the registry against `command`, parse `argv`,
/// dispatch the selected tool, and return its exit code.
///
/// `argv` is the full argument vector including the program name. Help
/// and version requests print and return the success code; parse failures
/// (including unknown sub-commands) print clap's usage message and return
/// the failure code. Tool errors propagate to the caller untranslated.
pub fn run<I, T>(mut registry: ToolRegistry, command: Command, argv: I) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let command = command
        .arg(global_flag("clean", "Run the selected tool in clean mode"))
        .arg(global_flag(
            "dryrun",
            "Report what would happen without doing it",
        ))
        .arg(global_flag(
            "force",
            "Start the selected tool even when preconditions fail",
        ))
        .subcommand_required(true)
        .arg_required_else_help(true);

    let mut command = registry.initialize(command)?;

    let matches = match command.try_get_matches_from_mut(argv) {
        Ok(matches) => matches,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_CODE_SUCCESS,
                _ => EXIT_CODE_FAILED,
            };
            let _ = e.print();
            return Ok(code);
        }
    };

    match matches.subcommand() {
        Some((name, sub_matches)) => registry.dispatch(name, sub_matches),
        None => {
            // The parser marks the sub-command required, so this branch is
            // a defensive fallback.
            let _ = command.print_help();
            Ok(EXIT_CODE_FAILED)
        }
    }
}
