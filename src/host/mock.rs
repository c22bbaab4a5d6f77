//! In-memory host doubles for testing.
//!
//! `MockFilesystem` models a directory tree as two path sets and records
//! every existence probe, so tests can assert not only what discovery found
//! but also what it looked at. `MockProcessRunner` returns a canned result
//! and records each invocation.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use vsfind::host::{Filesystem, MockFilesystem};
//!
//! let fs = MockFilesystem::new()
//!     .with_file("/vs/VC/Tools/MSVC/14.10/bin/HostX86/x86/dumpbin.exe")
//!     .with_dir("/vs/VC/Tools/MSVC/14.11");
//!
//! assert_eq!(fs.list_children(Path::new("/vs/VC/Tools/MSVC")).len(), 2);
//! assert!(!fs.exists(Path::new("/vs/VC/vcvarsall.bat")));
//! assert!(fs.was_probed(Path::new("/vs/VC/vcvarsall.bat")));
//! ```

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

use super::fs::Filesystem;
use super::process::{CommandResult, ProcessRunner};

/// In-memory [`Filesystem`].
#[derive(Debug, Default)]
pub struct MockFilesystem {
    files: BTreeSet<PathBuf>,
    dirs: BTreeSet<PathBuf>,
    probes: RefCell<Vec<PathBuf>>,
}

impl MockFilesystem {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_file(path);
        self
    }

    /// Add a directory, creating its parent directories.
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_dir(path);
        self
    }

    /// Add a file in place.
    pub fn add_file(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.add_ancestors(&path);
        self.files.insert(path);
    }

    /// Add a directory in place.
    pub fn add_dir(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.add_ancestors(&path);
        self.dirs.insert(path);
    }

    /// Remove a file or an empty-or-not directory entry (children are kept).
    pub fn remove(&mut self, path: impl AsRef<Path>) {
        self.files.remove(path.as_ref());
        self.dirs.remove(path.as_ref());
    }

    /// Every path passed to [`Filesystem::exists`] so far, in call order.
    pub fn probes(&self) -> Vec<PathBuf> {
        self.probes.borrow().clone()
    }

    /// Whether `path` was ever passed to [`Filesystem::exists`].
    pub fn was_probed(&self, path: &Path) -> bool {
        self.probes.borrow().iter().any(|p| p == path)
    }

    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl Filesystem for MockFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.probes.borrow_mut().push(path.to_path_buf());
        self.files.contains(path) || self.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn list_children(&self, path: &Path) -> Vec<PathBuf> {
        self.files
            .iter()
            .chain(self.dirs.iter())
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect()
    }
}

/// [`ProcessRunner`] returning a canned result.
#[derive(Debug, Default)]
pub struct MockProcessRunner {
    result: Option<CommandResult>,
    calls: RefCell<Vec<(PathBuf, Vec<String>)>>,
}

impl MockProcessRunner {
    /// A runner whose program exits 0 and prints `stdout`.
    pub fn succeeding(stdout: &str) -> Self {
        Self {
            result: Some(CommandResult::success(
                stdout.to_string(),
                String::new(),
                Duration::ZERO,
            )),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A runner whose program exits with `code` and prints `output`.
    pub fn exiting(code: i32, output: &str) -> Self {
        Self {
            result: Some(CommandResult::failure(
                Some(code),
                output.to_string(),
                String::new(),
                Duration::ZERO,
            )),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A runner that cannot start any program.
    pub fn unstartable() -> Self {
        Self::default()
    }

    /// Every invocation so far: program path and arguments.
    pub fn calls(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for MockProcessRunner {
    fn run_capture(&self, program: &Path, args: &[&str]) -> Result<CommandResult> {
        self.calls.borrow_mut().push((
            program.to_path_buf(),
            args.iter().map(|a| a.to_string()).collect(),
        ));
        match &self.result {
            Some(result) => Ok(result.clone()),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("cannot start {}", program.display()),
            )
            .into()),
        }
    }
}
