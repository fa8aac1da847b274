//! Error types for shellkit-core

/// Result type for shellkit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in shellkit-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Interactive prompt failure (terminal unavailable, I/O error)
    #[error("Interactive prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Config lookup resolved to a value rejected by its validator
    #[error("Config key '{key}' with value '{value}' invalid or not found")]
    ConfigInvalid { key: String, value: String },
}
