//! Error types for shellkit-proc

/// Result type for shellkit-proc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in shellkit-proc operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The command could not be started at all
    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited non-zero
    #[error("Command '{program}' failed with exit code {code}: {stderr}")]
    Failed {
        program: String,
        code: i32,
        stderr: String,
    },
}
