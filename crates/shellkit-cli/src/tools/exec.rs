//! External command tool

use std::time::Duration;

use clap::{Arg, ArgMatches};

use shellkit_core::{EXIT_CODE_SUCCESS, console};
use shellkit_proc::Exec;
use shellkit_tools::{Result, RunFlags, Tool, ToolDescriptor, ToolError, ToolRegistry};

/// Register the `exec` tool.
pub fn register(registry: &mut ToolRegistry) -> Result<()> {
    registry.register(ToolDescriptor::new(
        "exec",
        "Run an external command, passing its exit code through",
        |cmd| {
            let cmd = cmd
                .arg(
                    Arg::new("retries")
                        .long("retries")
                        .help("Total attempts before giving up")
                        .value_parser(clap::value_parser!(u32))
                        .default_value("1"),
                )
                .arg(
                    Arg::new("delay-secs")
                        .long("delay-secs")
                        .help("Seconds to wait between attempts")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("1"),
                )
                .arg(
                    Arg::new("command")
                        .help("Program followed by its arguments")
                        .required(true)
                        .num_args(1..)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true),
                );
            Ok((cmd, Box::new(ExecTool) as Box<dyn Tool>))
        },
    ))
}

struct ExecTool;

impl Tool for ExecTool {
    fn execute(&self, args: &ArgMatches) -> std::result::Result<i32, ToolError> {
        let flags = RunFlags::from_matches(args);
        let retries = args.get_one::<u32>("retries").copied().unwrap_or(1);
        let delay = args.get_one::<u64>("delay-secs").copied().unwrap_or(1);
        let mut words = args
            .get_many::<String>("command")
            .ok_or("missing command")?;
        let program = words.next().ok_or("missing command")?;

        let exec = Exec::new(program).args(words.cloned());

        if flags.dryrun {
            console::info(format!("dryrun: would execute {exec}"));
            return Ok(EXIT_CODE_SUCCESS);
        }

        if retries > 1 {
            exec.output_with_retry(retries, Duration::from_secs(delay))?;
            Ok(EXIT_CODE_SUCCESS)
        } else {
            // Single attempt inherits stdio and reports the child's exit
            // code unchanged.
            Ok(exec.status()?)
        }
    }
}
