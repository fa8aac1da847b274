//! Path normalization helpers

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Render a path with forward slashes regardless of platform.
pub fn to_unix(path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Canonical absolute form of `path`, without Windows UNC decoration.
pub fn absolute(path: impl AsRef<Path>) -> Result<PathBuf> {
    dunce::canonicalize(path.as_ref()).map_err(|e| Error::io(path.as_ref(), e))
}
