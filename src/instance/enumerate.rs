//! Instance enumeration.
//!
//! Candidates come from two independent sources:
//!
//! 1. The installer query tool (`vswhere.exe`), when it is installed. Its XML
//!    output lists every registered product, including previews and
//!    pre-installer-era suites.
//! 2. Legacy probes for the 14.0 suite, which predates the installer: the
//!    `VS140COMNTOOLS` environment variable and the default install path.
//!
//! The result is in discovery order; ranking happens in [`super::rank`].

use std::path::{Path, PathBuf};

use crate::error::{Result, VsFindError};
use crate::host::process::command_line;
use crate::host::Host;

use super::tags::{find_all_enclosed, find_at_most_one_enclosed, find_exactly_one_enclosed};
use super::types::{Instance, ReleaseTier};

/// Arguments asking the query tool for every product, previews and legacy suites included.
pub const QUERY_TOOL_ARGS: &[&str] = &[
    "-prerelease",
    "-legacy",
    "-products",
    "*",
    "-format",
    "xml",
];

/// Environment variable pointing at the 14.0 suite's `Common7\Tools` directory.
pub const LEGACY_TOOLS_ENV_VAR: &str = "VS140COMNTOOLS";

/// Version assigned to instances found by legacy probes.
pub const LEGACY_VERSION: &str = "14.0";

/// Default location of the query tool under the 32-bit Program Files root.
pub fn default_query_tool(program_files: &Path) -> PathBuf {
    program_files
        .join("Microsoft Visual Studio")
        .join("Installer")
        .join("vswhere.exe")
}

/// Default install root of the 14.0 suite under the 32-bit Program Files root.
pub fn legacy_default_root(program_files: &Path) -> PathBuf {
    program_files.join("Microsoft Visual Studio 14.0")
}

/// Discovers raw installation candidates.
///
/// # Example
///
/// ```
/// use std::env::VarError;
/// use vsfind::host::{Host, MockFilesystem, MockProcessRunner};
/// use vsfind::instance::InstanceEnumerator;
///
/// let fs = MockFilesystem::new();
/// let runner = MockProcessRunner::unstartable();
/// let env = |_: &str| -> Result<String, VarError> { Err(VarError::NotPresent) };
/// let host = Host::new(&fs, &runner, &env);
///
/// let instances = InstanceEnumerator::new(&host, "/pf").enumerate().unwrap();
/// assert!(instances.is_empty());
/// ```
pub struct InstanceEnumerator<'a> {
    host: &'a Host<'a>,
    program_files: PathBuf,
    query_tool: PathBuf,
}

impl<'a> InstanceEnumerator<'a> {
    /// Create an enumerator rooted at the given 32-bit Program Files directory.
    pub fn new(host: &'a Host<'a>, program_files: impl Into<PathBuf>) -> Self {
        let program_files = program_files.into();
        let query_tool = default_query_tool(&program_files);
        Self {
            host,
            program_files,
            query_tool,
        }
    }

    /// Use a query tool at a non-default location.
    pub fn with_query_tool(mut self, query_tool: impl Into<PathBuf>) -> Self {
        self.query_tool = query_tool.into();
        self
    }

    /// Collect instances from every source, unordered.
    ///
    /// Fails only when the query tool exists but cannot be run successfully
    /// or reports something outside its documented format.
    pub fn enumerate(&self) -> Result<Vec<Instance>> {
        let mut instances = self.from_query_tool()?;

        // The variable names Common7\Tools; the root is two levels up, or
        // three when the value ends in a separator. Try both.
        if let Ok(tools_dir) = (self.host.env)(LEGACY_TOOLS_ENV_VAR) {
            let tools_dir = PathBuf::from(tools_dir);
            let two_up = tools_dir.parent().and_then(Path::parent);
            let three_up = two_up.and_then(Path::parent);
            for root in [two_up, three_up].into_iter().flatten() {
                self.append_if_has_compiler(root.to_path_buf(), &mut instances);
            }
        }

        self.append_if_has_compiler(legacy_default_root(&self.program_files), &mut instances);

        tracing::debug!("Enumerated {} instance(s)", instances.len());
        Ok(instances)
    }

    fn from_query_tool(&self) -> Result<Vec<Instance>> {
        if !self.host.fs.exists(&self.query_tool) {
            tracing::debug!("No query tool at {}", self.query_tool.display());
            return Ok(Vec::new());
        }

        let command = command_line(&self.query_tool, QUERY_TOOL_ARGS);
        let result = self
            .host
            .runner
            .run_capture(&self.query_tool, QUERY_TOOL_ARGS)
            .map_err(|e| VsFindError::QueryToolFailed {
                command: command.clone(),
                code: None,
                output: e.to_string(),
            })?;

        tracing::debug!("Query tool finished in {:?}", result.duration);

        if !result.success {
            return Err(VsFindError::QueryToolFailed {
                command,
                code: result.exit_code,
                output: result.combined_output(),
            });
        }

        parse_query_output(&result.stdout)
    }

    fn append_if_has_compiler(&self, root: PathBuf, instances: &mut Vec<Instance>) {
        let vc = root.join("VC");
        let compiler = vc.join("bin").join("cl.exe");
        let env_script = vc.join("vcvarsall.bat");

        if self.host.fs.exists(&compiler) && self.host.fs.exists(&env_script) {
            tracing::debug!("Found legacy instance at {}", root.display());
            instances.push(Instance::new(root, LEGACY_VERSION, ReleaseTier::Legacy));
        }
    }
}

/// Parse the query tool's XML output into instances, in document order.
pub fn parse_query_output(output: &str) -> Result<Vec<Instance>> {
    find_all_enclosed(output, "<instance>", "</instance>")
        .into_iter()
        .map(|record| -> Result<Instance> {
            let flag = find_at_most_one_enclosed(record, "<isPrerelease>", "</isPrerelease>")?;
            let tier = ReleaseTier::from_prerelease_flag(flag)?;
            let root =
                find_exactly_one_enclosed(record, "<installationPath>", "</installationPath>")?;
            let version = find_exactly_one_enclosed(
                record,
                "<installationVersion>",
                "</installationVersion>",
            )?;

            tracing::debug!("Query tool reported {} {} ({})", root, version, tier);
            Ok(Instance::new(root, version, tier))
        })
        .collect()
}
