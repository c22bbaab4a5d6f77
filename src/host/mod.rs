//! Host capabilities the discovery pipeline calls through.
//!
//! Discovery never touches the filesystem, spawns processes, or reads the
//! environment directly. It goes through the narrow interfaces defined here
//! so tests can substitute in-memory doubles:
//!
//! - [`Filesystem`] - read-only existence and listing probes
//! - [`ProcessRunner`] - run a program and capture its output
//! - [`EnvLookup`] - environment-variable lookup
//! - [`program_files_32_bit`] - resolve the 32-bit Program Files root
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use vsfind::host::{Filesystem, MockFilesystem};
//!
//! let fs = MockFilesystem::new().with_file("/vs/VC/vcvarsall.bat");
//! assert!(fs.exists(Path::new("/vs/VC/vcvarsall.bat")));
//! assert!(fs.is_dir(Path::new("/vs/VC")));
//! ```

pub mod env;
pub mod fs;
pub mod mock;
pub mod process;

pub use env::{program_files_32_bit, system_env, EnvLookup};
pub use fs::{Filesystem, OsFilesystem};
pub use mock::{MockFilesystem, MockProcessRunner};
pub use process::{CommandResult, ProcessRunner, SystemProcessRunner};

/// The capabilities a discovery run needs, bundled for passing around.
pub struct Host<'a> {
    /// Filesystem probe.
    pub fs: &'a dyn Filesystem,
    /// Process execution.
    pub runner: &'a dyn ProcessRunner,
    /// Environment lookup.
    pub env: &'a EnvLookup,
}

impl<'a> Host<'a> {
    /// Bundle the given capabilities.
    pub fn new(fs: &'a dyn Filesystem, runner: &'a dyn ProcessRunner, env: &'a EnvLookup) -> Self {
        Self { fs, runner, env }
    }
}
