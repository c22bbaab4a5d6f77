//! Resolved toolset types.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Processor architecture a toolchain runs on or targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CpuArchitecture {
    X86,
    X64,
    Arm,
    Arm64,
}

impl fmt::Display for CpuArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::X86 => "x86",
            Self::X64 => "x64",
            Self::Arm => "arm",
            Self::Arm64 => "arm64",
        };
        f.write_str(s)
    }
}

/// One host/target pair a toolset can set up, backed by its own sub-script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchOption {
    /// Argument the environment-setup script accepts for this pair, e.g. `x86_amd64`.
    pub name: &'static str,
    /// Architecture the compiler runs on.
    pub host: CpuArchitecture,
    /// Architecture the compiler emits code for.
    pub target: CpuArchitecture,
}

impl ArchOption {
    pub const fn new(name: &'static str, host: CpuArchitecture, target: CpuArchitecture) -> Self {
        Self { name, host, target }
    }
}

/// Platform toolset tag understood by build drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ToolsetVersion {
    #[serde(rename = "v120")]
    V120,
    #[serde(rename = "v140")]
    V140,
    #[serde(rename = "v141")]
    V141,
}

impl ToolsetVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V120 => "v120",
            Self::V140 => "v140",
            Self::V141 => "v141",
        }
    }
}

impl fmt::Display for ToolsetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated compiler environment, ready to hand to a build driver.
///
/// The environment-setup script is an opaque descriptor: a path plus extra
/// arguments. Nothing here runs or reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toolset {
    /// Root of the installation the toolset came from.
    pub root_path: PathBuf,
    /// Path of `dumpbin.exe`.
    pub inspection_tool: PathBuf,
    /// Path of `vcvarsall.bat`.
    pub env_script: PathBuf,
    /// Arguments to pass to the env script besides the architecture.
    pub env_script_args: Vec<String>,
    /// Platform toolset tag.
    pub version: ToolsetVersion,
    /// Host/target pairs with a sub-script present, in menu order.
    pub supported_architectures: Vec<ArchOption>,
}

/// Everything a resolution pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Usable toolsets, preferred-first.
    pub found: Vec<Toolset>,
    /// Structurally complete toolsets missing the English language pack.
    pub excluded: Vec<Toolset>,
    /// Env-script and inspection-tool paths probed, in probe order.
    pub examined_paths: Vec<PathBuf>,
}
