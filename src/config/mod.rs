//! Configuration loading for vsfind.
//!
//! Configuration is optional. When present it is a single YAML file that
//! can pin the Program Files root, point at a different installer-query
//! tool, or pick a default output mode.
//!
//! # Example
//!
//! ```
//! use vsfind::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("vsfind.yml");
//! fs::write(&path, "program_files_x86: 'D:\\Program Files (x86)'").unwrap();
//!
//! let config = load_config(Some(&path)).unwrap();
//! assert!(config.program_files_x86.is_some());
//! ```
//!
//! # Location
//!
//! The file is named with `--config <path>` or the `VSFIND_CONFIG`
//! environment variable. With neither, built-in defaults apply.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config};
pub use schema::Config;
