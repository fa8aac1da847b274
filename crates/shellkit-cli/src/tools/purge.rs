//! Directory purge tool

use std::path::PathBuf;

use clap::{Arg, ArgMatches};

use shellkit_core::{EXIT_CODE_SUCCESS, console};
use shellkit_tools::{Result, RunFlags, Tool, ToolDescriptor, ToolError, ToolRegistry};

/// Register the `purge` tool.
pub fn register(registry: &mut ToolRegistry) -> Result<()> {
    registry.register(ToolDescriptor::new(
        "purge",
        "Delete a directory tree, clearing read-only entries",
        |cmd| {
            let cmd = cmd.arg(
                Arg::new("path")
                    .help("Directory to delete")
                    .required(true)
                    .value_parser(clap::value_parser!(PathBuf)),
            );
            Ok((cmd, Box::new(PurgeTool) as Box<dyn Tool>))
        },
    ))
}

struct PurgeTool;

impl Tool for PurgeTool {
    fn execute(&self, args: &ArgMatches) -> std::result::Result<i32, ToolError> {
        let flags = RunFlags::from_matches(args);
        let path = args.get_one::<PathBuf>("path").ok_or("missing path")?;

        if !path.is_dir() {
            if flags.force {
                console::warn(format!(
                    "{} does not exist, nothing to purge",
                    path.display()
                ));
                return Ok(EXIT_CODE_SUCCESS);
            }
            return Err(format!("'{}' is not a directory", path.display()).into());
        }

        if flags.dryrun {
            console::info(format!("dryrun: would purge {}", path.display()));
            return Ok(EXIT_CODE_SUCCESS);
        }

        shellkit_fs::io::purge_dir(path)?;
        console::info(format!("purged {}", path.display()));
        Ok(EXIT_CODE_SUCCESS)
    }
}
