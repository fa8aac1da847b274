//! Core types for the tool registry

use std::fmt;

use clap::{ArgMatches, Command};

/// Error type tools fail with; the dispatcher passes it through
/// untranslated.
pub type ToolError = Box<dyn std::error::Error + Send + Sync>;

/// A runnable sub-command implementation.
///
/// Instances are created once by their descriptor's factory during
/// registry initialization and live until process exit.
pub trait Tool {
    /// Run the tool against its parsed arguments, returning the process
    /// exit code. Zero means success; any nonzero value is tool-defined
    /// and reported unchanged.
    fn execute(&self, args: &ArgMatches) -> Result<i32, ToolError>;
}

/// Factory invoked during initialization with the tool's freshly created
/// sub-command (name and help text already set). It augments the
/// sub-command with tool-specific arguments and returns it together with
/// the live instance.
pub type ToolFactory = Box<dyn Fn(Command) -> Result<(Command, Box<dyn Tool>), ToolError>>;

/// One registered tool: unique name, help text, and the factory that
/// produces its instance.
pub struct ToolDescriptor {
    name: String,
    help: String,
    factory: ToolFactory,
}

impl ToolDescriptor {
    /// Create a descriptor.
    pub fn new<F>(name: impl Into<String>, help: impl Into<String>, factory: F) -> Self
    where
        F: Fn(Command) -> Result<(Command, Box<dyn Tool>), ToolError> + 'static,
    {
        Self {
            name: name.into(),
            help: help.into(),
            factory: Box::new(factory),
        }
    }

    /// Machine identifier used as the sub-command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short human-readable description shown in the sub-command menu.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Build the tool's sub-command and instance.
    pub(crate) fn instantiate(&self) -> Result<(Command, Box<dyn Tool>), ToolError> {
        let sub = Command::new(self.name.clone()).about(self.help.clone());
        (self.factory)(sub)
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}
