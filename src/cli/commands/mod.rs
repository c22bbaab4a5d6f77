//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`vsfind list`, `vsfind instances`)
//! - Host capabilities and configuration resolved once in `main`
//! - Consistent global flag handling

pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod instances;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
