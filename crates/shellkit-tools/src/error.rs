//! Error types for shellkit-tools

use crate::registry::ToolError;

/// Result type for shellkit-tools operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in registry and dispatch operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Registration under a name that already exists
    #[error("Tool '{name}' already registered")]
    DuplicateTool { name: String },

    /// Registration that violates a descriptor constraint
    #[error("Invalid tool registration: {reason}")]
    InvalidTool { reason: String },

    /// Dispatch against a name with no initialized instance
    #[error("Tool '{name}' not registered")]
    UnknownTool { name: String },

    /// Failure raised by a tool's factory or execute, passed through
    /// untranslated
    #[error(transparent)]
    Tool(#[from] ToolError),
}
