//! Command execution builder

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

use shellkit_core::ResultExt;
use tracing::info;

use crate::{Error, Result};

/// Builder for one external command invocation.
///
/// The same `Exec` value can be run repeatedly; each run spawns a fresh
/// child process.
#[derive(Debug, Clone)]
pub struct Exec {
    program: String,
    args: Vec<String>,
    env: Option<HashMap<String, String>>,
    cwd: Option<PathBuf>,
    echo: bool,
}

impl Exec {
    /// Start building an invocation of `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: None,
            cwd: None,
            echo: true,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Replace the child's environment entirely with `env`.
    pub fn env(mut self, env: HashMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    /// Run the child in `dir` instead of the current directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Whether captured output is echoed at info level. Defaults to true.
    pub fn echo_output(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(env) = &self.env {
            cmd.env_clear();
            cmd.envs(env);
        }
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Run with captured output. Non-zero exit is an error carrying the
    /// exit code and trimmed stderr. Returns the child's stdout.
    pub fn output(&self) -> Result<String> {
        info!("executing command: {self}");
        let output = self.command().output().map_err(|e| Error::Spawn {
            program: self.program.clone(),
            source: e,
        })?;

        if !output.status.success() {
            return Err(Error::Failed {
                program: self.program.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        if self.echo && !stdout.is_empty() {
            info!("{}", stdout.trim_end());
        }
        Ok(stdout)
    }

    /// Run with inherited stdio, returning the exit code unchanged.
    ///
    /// A non-zero exit is not an error here; the caller decides what the
    /// code means. Death by signal reports as -1.
    pub fn status(&self) -> Result<i32> {
        info!("executing command: {self}");
        let status = self.command().status().map_err(|e| Error::Spawn {
            program: self.program.clone(),
            source: e,
        })?;
        Ok(status.code().unwrap_or(-1))
    }

    /// Like [`Exec::status`], but a spawn failure reports as -1 instead of
    /// an error.
    pub fn status_lenient(&self) -> i32 {
        self.status().unwrap_or_log(-1)
    }

    /// Re-run on failure, waiting `delay` between attempts.
    ///
    /// At least one attempt is always made; the final attempt's error
    /// propagates unchanged.
    pub fn output_with_retry(&self, attempts: u32, delay: Duration) -> Result<String> {
        let attempts = attempts.max(1);
        for attempt in 1..attempts {
            match self.output() {
                Ok(stdout) => return Ok(stdout),
                Err(e) => {
                    info!(
                        "command failed ({e}), retrying in {}s [{attempt}/{attempts}]",
                        delay.as_secs_f64()
                    );
                    std::thread::sleep(delay);
                }
            }
        }
        self.output()
    }
}

impl fmt::Display for Exec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
