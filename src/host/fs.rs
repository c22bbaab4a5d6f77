//! Read-only filesystem probes.

use std::path::{Path, PathBuf};

/// Existence and listing probes over a filesystem.
///
/// None of these operations mutate anything. Failures (permission denied,
/// vanished entries) read as "absent" rather than as errors.
pub trait Filesystem {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Immediate children of `path`, files and directories alike.
    ///
    /// Returns an empty list when `path` is missing or unreadable.
    fn list_children(&self, path: &Path) -> Vec<PathBuf>;
}

/// [`Filesystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_children(&self, path: &Path) -> Vec<PathBuf> {
        match std::fs::read_dir(path) {
            Ok(entries) => entries
                .filter_map(std::result::Result::ok)
                .map(|entry| entry.path())
                .collect(),
            Err(e) => {
                tracing::debug!("Cannot list {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }
}
