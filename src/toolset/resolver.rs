//! Toolset resolution.
//!
//! Walks ranked instances and applies the directory layout rules of each
//! generation:
//!
//! - **Modern** (15.x): `VC/Auxiliary/Build/vcvarsall.bat`, architecture
//!   sub-scripts beside it, and one or more toolchain versions under
//!   `VC/Tools/MSVC/<version>`. The newest version carrying
//!   `bin/HostX86/x86/dumpbin.exe` is chosen. When a 14.x instance is also
//!   installed, the same env script can select the older compiler through
//!   `-vcvars_ver=14.0`, so a second `v140` toolset is emitted.
//! - **Legacy** (14.x and 12.x): `VC/vcvarsall.bat` and `VC/bin/dumpbin.exe`
//!   directly under the root, architecture sub-scripts under `VC/bin`.
//!
//! Either way the toolset is usable only if the English language pack
//! (`1033`) sits next to `dumpbin.exe`; otherwise it is excluded.

use std::path::{Path, PathBuf};

use crate::host::Filesystem;
use crate::instance::{Generation, Instance};

use super::arch::{legacy_architectures, modern_architectures};
use super::types::{Outcome, Toolset, ToolsetVersion};

/// Name of the English language pack directory.
pub const ENGLISH_LANGUAGE_PACK: &str = "1033";

/// Env-script argument selecting the 14.0 compiler in a modern installation.
pub const V140_ENV_SCRIPT_ARG: &str = "-vcvars_ver=14.0";

/// Whether resolution moves on after an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanControl {
    /// Go on to the next ranked instance.
    Continue,
    /// Stop resolving; later instances are not examined.
    ///
    /// Returned only when a legacy instance has every file except the
    /// English language pack. Modern instances in the same situation
    /// return [`ScanControl::Continue`].
    Halt,
}

/// Turns ranked instances into toolsets.
pub struct ToolsetResolver<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> ToolsetResolver<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Resolve every instance in order, stopping early on a legacy exclusion.
    pub fn resolve(&self, ranked: &[Instance]) -> Outcome {
        let v140_available = ranked
            .iter()
            .any(|instance| instance.generation() == Generation::LegacyMid);

        let mut outcome = Outcome::default();

        for instance in ranked {
            let control = match instance.generation() {
                Generation::ModernMultiToolchain => {
                    self.resolve_modern(instance, v140_available, &mut outcome)
                }
                Generation::LegacyMid | Generation::LegacyOld => {
                    self.resolve_legacy(instance, &mut outcome)
                }
                Generation::Unknown => {
                    tracing::debug!(
                        "Skipping {} (unsupported version {})",
                        instance.root_path().display(),
                        instance.version()
                    );
                    ScanControl::Continue
                }
            };

            if control == ScanControl::Halt {
                tracing::debug!(
                    "Stopping after {}: legacy instance lacks the English language pack",
                    instance.root_path().display()
                );
                break;
            }
        }

        tracing::debug!(
            "Resolved {} toolset(s), excluded {}, examined {} path(s)",
            outcome.found.len(),
            outcome.excluded.len(),
            outcome.examined_paths.len()
        );
        outcome
    }

    /// Apply the modern layout; always continues the scan.
    pub fn resolve_modern(
        &self,
        instance: &Instance,
        v140_available: bool,
        outcome: &mut Outcome,
    ) -> ScanControl {
        let vc_dir = instance.root_path().join("VC");
        let build_dir = vc_dir.join("Auxiliary").join("Build");
        let env_script = build_dir.join("vcvarsall.bat");

        outcome.examined_paths.push(env_script.clone());
        if !self.fs.exists(&env_script) {
            tracing::debug!("No env script at {}", env_script.display());
            return ScanControl::Continue;
        }

        let supported_architectures = modern_architectures(self.fs, &build_dir);

        let Some(inspection_tool) = self.newest_inspection_tool(&vc_dir, outcome) else {
            tracing::debug!(
                "No toolchain version with dumpbin under {}",
                instance.root_path().display()
            );
            return ScanControl::Continue;
        };

        let v141 = Toolset {
            root_path: instance.root_path().to_path_buf(),
            inspection_tool,
            env_script,
            env_script_args: Vec::new(),
            version: ToolsetVersion::V141,
            supported_architectures,
        };

        if !self.has_language_pack(&v141.inspection_tool) {
            tracing::debug!("Excluding {}: no language pack", v141.root_path.display());
            outcome.excluded.push(v141);
            return ScanControl::Continue;
        }

        let v140 = v140_available.then(|| Toolset {
            env_script_args: vec![V140_ENV_SCRIPT_ARG.to_string()],
            version: ToolsetVersion::V140,
            ..v141.clone()
        });

        tracing::debug!("Found v141 toolset at {}", v141.root_path.display());
        outcome.found.push(v141);
        if let Some(v140) = v140 {
            tracing::debug!("Found v140 toolset at {}", v140.root_path.display());
            outcome.found.push(v140);
        }

        ScanControl::Continue
    }

    /// Apply the legacy layout; halts the scan on a language-pack exclusion.
    pub fn resolve_legacy(&self, instance: &Instance, outcome: &mut Outcome) -> ScanControl {
        let vc_dir = instance.root_path().join("VC");
        let env_script = vc_dir.join("vcvarsall.bat");

        outcome.examined_paths.push(env_script.clone());
        if !self.fs.exists(&env_script) {
            tracing::debug!("No env script at {}", env_script.display());
            return ScanControl::Continue;
        }

        let bin_dir = vc_dir.join("bin");
        let inspection_tool = bin_dir.join("dumpbin.exe");
        outcome.examined_paths.push(inspection_tool.clone());

        let supported_architectures = legacy_architectures(self.fs, &bin_dir);

        if !self.fs.exists(&inspection_tool) {
            tracing::debug!("No dumpbin at {}", inspection_tool.display());
            return ScanControl::Continue;
        }

        let version = match instance.generation() {
            Generation::LegacyOld => ToolsetVersion::V120,
            _ => ToolsetVersion::V140,
        };

        let toolset = Toolset {
            root_path: instance.root_path().to_path_buf(),
            inspection_tool,
            env_script,
            env_script_args: Vec::new(),
            version,
            supported_architectures,
        };

        if !self.has_language_pack(&toolset.inspection_tool) {
            tracing::debug!("Excluding {}: no language pack", toolset.root_path.display());
            outcome.excluded.push(toolset);
            return ScanControl::Halt;
        }

        tracing::debug!("Found {} toolset at {}", version, toolset.root_path.display());
        outcome.found.push(toolset);
        ScanControl::Continue
    }

    /// First `dumpbin.exe` across toolchain versions, newest name first.
    ///
    /// Version directory names are compared as text, like instance versions.
    fn newest_inspection_tool(&self, vc_dir: &Path, outcome: &mut Outcome) -> Option<PathBuf> {
        let msvc_dir = vc_dir.join("Tools").join("MSVC");

        let mut versions: Vec<PathBuf> = self
            .fs
            .list_children(&msvc_dir)
            .into_iter()
            .filter(|path| self.fs.is_dir(path))
            .collect();
        versions.sort_by(|left, right| right.file_name().cmp(&left.file_name()));

        versions.iter().find_map(|version_dir| {
            let dumpbin = version_dir
                .join("bin")
                .join("HostX86")
                .join("x86")
                .join("dumpbin.exe");
            outcome.examined_paths.push(dumpbin.clone());
            self.fs.exists(&dumpbin).then_some(dumpbin)
        })
    }

    fn has_language_pack(&self, inspection_tool: &Path) -> bool {
        self.fs
            .exists(&inspection_tool.with_file_name(ENGLISH_LANGUAGE_PACK))
    }
}
