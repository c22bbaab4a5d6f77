//! Toolset validation and materialization.
//!
//! # Modules
//!
//! - [`types`] - [`Toolset`], [`ArchOption`] and the resolution [`Outcome`]
//! - [`arch`] - per-generation architecture menus
//! - [`resolver`] - layout rules turning ranked instances into toolsets

pub mod arch;
pub mod resolver;
pub mod types;

pub use resolver::{ScanControl, ToolsetResolver, ENGLISH_LANGUAGE_PACK, V140_ENV_SCRIPT_ARG};
pub use types::{ArchOption, CpuArchitecture, Outcome, Toolset, ToolsetVersion};
