//! vsfind - Locate installed Visual Studio C++ toolsets.
//!
//! vsfind discovers Visual Studio installations on a Windows host, ranks
//! them by preference, and validates which ones carry a usable C++
//! toolset: an environment-setup script, the `dumpbin` inspection tool,
//! and the English language pack.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional YAML configuration
//! - [`discovery`] - The end-to-end discovery pipeline
//! - [`error`] - Error types and result aliases
//! - [`host`] - Filesystem, process, and environment access
//! - [`instance`] - Instance enumeration and ranking
//! - [`report`] - Turning resolution outcomes into results
//! - [`toolset`] - Toolset resolution per directory layout
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::env::VarError;
//! use vsfind::config::Config;
//! use vsfind::discovery::find_toolsets_preferred_first;
//! use vsfind::host::{Host, MockFilesystem, MockProcessRunner};
//! use vsfind::ui::MockUI;
//! use vsfind::VsFindError;
//!
//! let fs = MockFilesystem::new();
//! let runner = MockProcessRunner::unstartable();
//! let env = |key: &str| -> Result<String, VarError> {
//!     match key {
//!         "ProgramFiles(x86)" => Ok("/pf86".to_string()),
//!         _ => Err(VarError::NotPresent),
//!     }
//! };
//! let host = Host::new(&fs, &runner, &env);
//! let mut ui = MockUI::new();
//!
//! let err = find_toolsets_preferred_first(&host, &Config::default(), &mut ui).unwrap_err();
//! assert!(matches!(err, VsFindError::NoToolsetFound { .. }));
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod host;
pub mod instance;
pub mod report;
pub mod toolset;
pub mod ui;

pub use error::{Result, VsFindError};
