//! Fallible-call helpers

use std::fmt::Display;

/// Extension for discarding an error in favor of a default value.
pub trait ResultExt<T> {
    /// The Ok value, or `default` with the error logged at debug level.
    fn unwrap_or_log(self, default: T) -> T;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn unwrap_or_log(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!("ignoring error: {e}");
                default
            }
        }
    }
}
