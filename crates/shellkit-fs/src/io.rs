//! File and directory operations

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{Error, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe a partial
/// file. Acquires an advisory lock on the temp file while writing.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file lives in the same directory so the rename stays on one
    // filesystem.
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    fs2::FileExt::lock_exclusive(&temp_file).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    fs2::FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Create `path` and any missing parents. Existing directories are fine.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Copy `src` over `dst`, replacing any existing file.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    // Remove the destination first so a read-only target cannot block the
    // copy.
    let _ = fs::remove_file(dst);
    fs::copy(src, dst).map_err(|e| Error::io(src, e))?;
    Ok(())
}

/// Remove a file if it exists. Absent files are not an error.
pub fn remove_file(path: &Path) -> Result<()> {
    if path.is_file() {
        info!("removing file {}", path.display());
        fs::remove_file(path).map_err(|e| Error::io(path, e))?;
    }
    Ok(())
}

/// Recursively delete a directory tree, clearing read-only attributes on
/// the way down. Missing directories are a no-op.
pub fn purge_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Ok(());
    }
    info!("purging directory {}", path.display());
    remove_tree(path)
}

fn remove_tree(dir: &Path) -> Result<()> {
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let entry_path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| Error::io(&entry_path, e))?;
        if file_type.is_dir() {
            remove_tree(&entry_path)?;
        } else {
            clear_readonly(&entry_path)?;
            fs::remove_file(&entry_path).map_err(|e| Error::io(&entry_path, e))?;
        }
    }
    fs::remove_dir(dir).map_err(|e| Error::io(dir, e))
}

fn clear_readonly(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    let mut perms = metadata.permissions();
    if perms.readonly() {
        perms.set_readonly(false);
        fs::set_permissions(path, perms).map_err(|e| Error::io(path, e))?;
    }
    Ok(())
}

/// Full paths of the immediate subdirectories of `dir`, sorted.
pub fn list_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    list_entries(dir, |p| p.is_dir())
}

/// Full paths of the files directly inside `dir`, sorted.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    list_entries(dir, |p| p.is_file())
}

fn list_entries(dir: &Path, keep: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let entry_path = entry.path();
        if keep(&entry_path) {
            paths.push(entry_path);
        }
    }
    paths.sort();
    Ok(paths)
}
