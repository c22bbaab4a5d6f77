//! Instance and tier types.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, VsFindError};

/// Release channel of an installation; the primary ranking key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseTier {
    /// A released product reported by the installer with `isPrerelease=0`.
    Stable,
    /// A preview product reported with `isPrerelease=1`.
    Prerelease,
    /// An installation without a prerelease flag, or one found by legacy probes.
    Legacy,
}

impl ReleaseTier {
    /// Ranking weight; higher is preferred.
    pub fn preference_weight(self) -> u8 {
        match self {
            Self::Stable => 3,
            Self::Prerelease => 2,
            Self::Legacy => 1,
        }
    }

    /// Map the installer's optional `isPrerelease` flag to a tier.
    ///
    /// The installer only ever writes `0` or `1`; anything else is a broken
    /// contract and is reported as [`VsFindError::InternalConsistency`].
    pub fn from_prerelease_flag(flag: Option<&str>) -> Result<Self> {
        match flag {
            None => Ok(Self::Legacy),
            Some("0") => Ok(Self::Stable),
            Some("1") => Ok(Self::Prerelease),
            Some(other) => Err(VsFindError::InternalConsistency {
                message: format!("isPrerelease must be 0 or 1, got '{}'", other),
            }),
        }
    }
}

impl fmt::Display for ReleaseTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Stable => "stable",
            Self::Prerelease => "prerelease",
            Self::Legacy => "legacy",
        };
        f.write_str(s)
    }
}

/// Directory layout family of an installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Generation {
    /// Major version 15: several toolchain versions side by side under `VC/Tools/MSVC`.
    ModernMultiToolchain,
    /// Major version 14: single toolchain directly under `VC`.
    LegacyMid,
    /// Major version 12: same layout as [`Generation::LegacyMid`].
    LegacyOld,
    /// Any other major version; never resolved.
    Unknown,
}

impl Generation {
    /// Classify a major version tag.
    pub fn from_major_tag(tag: &str) -> Self {
        match tag {
            "15" => Self::ModernMultiToolchain,
            "14" => Self::LegacyMid,
            "12" => Self::LegacyOld,
            _ => Self::Unknown,
        }
    }
}

/// A discovered installation that has not been validated yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instance {
    root_path: PathBuf,
    version: String,
    tier: ReleaseTier,
    generation: Generation,
}

impl Instance {
    /// Create an instance; the generation is derived here and never again.
    pub fn new(root_path: impl Into<PathBuf>, version: impl Into<String>, tier: ReleaseTier) -> Self {
        let version = version.into();
        let generation = Generation::from_major_tag(&major_version_tag(&version));
        Self {
            root_path: root_path.into(),
            version,
            tier,
            generation,
        }
    }

    /// Installation root directory.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Version text as reported, e.g. `15.9.28307.1300`.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn tier(&self) -> ReleaseTier {
        self.tier
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// First two characters of the version text.
    ///
    /// This is a textual convention, not a parsed number: `"9.0"` yields
    /// `"9."` and a three-digit major would be truncated.
    pub fn major_version_tag(&self) -> String {
        major_version_tag(&self.version)
    }
}

fn major_version_tag(version: &str) -> String {
    version.chars().take(2).collect()
}
