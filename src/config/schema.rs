//! Configuration schema.

use serde::Deserialize;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// Root configuration structure for a vsfind YAML file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overrides the 32-bit Program Files directory taken from the environment.
    pub program_files_x86: Option<PathBuf>,

    /// Overrides the location of the installer-query tool.
    pub query_tool: Option<PathBuf>,

    /// Default output mode: verbose, normal, quiet, silent.
    pub output: Option<OutputMode>,
}
