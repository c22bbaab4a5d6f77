//! End-to-end discovery.
//!
//! Wires the pipeline together: resolve the Program Files root, enumerate
//! instances, rank them, resolve toolsets, and report.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::host::{program_files_32_bit, Host};
use crate::instance::{rank_instances, Instance, InstanceEnumerator};
use crate::report::report;
use crate::toolset::{Toolset, ToolsetResolver};
use crate::ui::UserInterface;

/// The 32-bit Program Files root: the configured override, else the environment.
pub fn resolve_program_files(host: &Host, config: &Config) -> Result<PathBuf> {
    match &config.program_files_x86 {
        Some(path) => Ok(path.clone()),
        None => program_files_32_bit(host.env),
    }
}

/// Every installed instance, preferred first.
pub fn find_instances_preferred_first(host: &Host, config: &Config) -> Result<Vec<Instance>> {
    let program_files = resolve_program_files(host, config)?;
    tracing::debug!("Using Program Files root {}", program_files.display());

    let mut enumerator = InstanceEnumerator::new(host, program_files);
    if let Some(query_tool) = &config.query_tool {
        enumerator = enumerator.with_query_tool(query_tool);
    }

    Ok(rank_instances(enumerator.enumerate()?))
}

/// Every usable toolset, preferred first.
///
/// Instances lacking the English language pack are reported through
/// `ui` as a warning. Fails with `NoToolsetFound` when nothing is usable.
pub fn find_toolsets_preferred_first(
    host: &Host,
    config: &Config,
    ui: &mut dyn UserInterface,
) -> Result<Vec<Toolset>> {
    let instances = find_instances_preferred_first(host, config)?;
    let outcome = ToolsetResolver::new(host.fs).resolve(&instances);
    report(outcome, ui)
}
