//! Architecture menus.
//!
//! Each supported host/target pair is backed by a dedicated sub-script next
//! to (modern layout) or below (legacy layout) the environment-setup script.
//! A pair is offered only when its sub-script exists.

use std::path::Path;

use crate::host::Filesystem;

use super::types::ArchOption;

use super::types::CpuArchitecture::{Arm, Arm64, X64, X86};

/// An architecture option and the sub-script path proving it is installed.
struct ArchScript {
    option: ArchOption,
    /// Path components relative to the menu's base directory.
    script: &'static [&'static str],
}

/// Sub-scripts in `VC/Auxiliary/Build` of a modern installation.
const MODERN_MENU: &[ArchScript] = &[
    ArchScript {
        option: ArchOption::new("x86", X86, X86),
        script: &["vcvars32.bat"],
    },
    ArchScript {
        option: ArchOption::new("amd64", X64, X64),
        script: &["vcvars64.bat"],
    },
    ArchScript {
        option: ArchOption::new("x86_amd64", X86, X64),
        script: &["vcvarsx86_amd64.bat"],
    },
    ArchScript {
        option: ArchOption::new("x86_arm", X86, Arm),
        script: &["vcvarsx86_arm.bat"],
    },
    ArchScript {
        option: ArchOption::new("x86_arm64", X86, Arm64),
        script: &["vcvarsx86_arm64.bat"],
    },
    ArchScript {
        option: ArchOption::new("amd64_x86", X64, X86),
        script: &["vcvarsamd64_x86.bat"],
    },
    ArchScript {
        option: ArchOption::new("amd64_arm", X64, Arm),
        script: &["vcvarsamd64_arm.bat"],
    },
    ArchScript {
        option: ArchOption::new("amd64_arm64", X64, Arm64),
        script: &["vcvarsamd64_arm64.bat"],
    },
];

/// Sub-scripts under `VC/bin` of a legacy installation.
const LEGACY_MENU: &[ArchScript] = &[
    ArchScript {
        option: ArchOption::new("x86", X86, X86),
        script: &["vcvars32.bat"],
    },
    ArchScript {
        option: ArchOption::new("x64", X64, X64),
        script: &["amd64", "vcvars64.bat"],
    },
    ArchScript {
        option: ArchOption::new("x86_amd64", X86, X64),
        script: &["x86_amd64", "vcvarsx86_amd64.bat"],
    },
    ArchScript {
        option: ArchOption::new("x86_arm", X86, Arm),
        script: &["x86_arm", "vcvarsx86_arm.bat"],
    },
    ArchScript {
        option: ArchOption::new("amd64_x86", X64, X86),
        script: &["amd64_x86", "vcvarsamd64_x86.bat"],
    },
    ArchScript {
        option: ArchOption::new("amd64_arm", X64, Arm),
        script: &["amd64_arm", "vcvarsamd64_arm.bat"],
    },
];

/// Architectures available in a modern installation's `VC/Auxiliary/Build`.
pub fn modern_architectures(fs: &dyn Filesystem, build_dir: &Path) -> Vec<ArchOption> {
    available(fs, build_dir, MODERN_MENU)
}

/// Architectures available under a legacy installation's `VC/bin`.
pub fn legacy_architectures(fs: &dyn Filesystem, bin_dir: &Path) -> Vec<ArchOption> {
    available(fs, bin_dir, LEGACY_MENU)
}

fn available(fs: &dyn Filesystem, base: &Path, menu: &[ArchScript]) -> Vec<ArchOption> {
    menu.iter()
        .filter(|entry| {
            let script = entry
                .script
                .iter()
                .fold(base.to_path_buf(), |path, part| path.join(part));
            fs.exists(&script)
        })
        .map(|entry| entry.option.clone())
        .collect()
}
