//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// vsfind - Locate installed Visual Studio C++ toolsets.
#[derive(Debug, Parser)]
#[command(name = "vsfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, global = true, env = "VSFIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// 32-bit Program Files directory (overrides config and environment)
    #[arg(long, global = true, value_name = "DIR")]
    pub program_files: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List usable toolsets, preferred first (default if no command specified)
    List(ListArgs),

    /// List installed instances, preferred first
    Instances(InstancesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `instances` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstancesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["vsfind"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn list_json_parses() {
        let cli = Cli::try_parse_from(["vsfind", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List(ListArgs { json: true }))));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vsfind",
            "instances",
            "--program-files",
            "/pf86",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.program_files, Some(PathBuf::from("/pf86")));
        assert!(cli.debug);
        assert!(matches!(cli.command, Some(Commands::Instances(_))));
    }

    #[test]
    fn completions_requires_known_shell() {
        assert!(Cli::try_parse_from(["vsfind", "completions", "cmd"]).is_err());
        assert!(Cli::try_parse_from(["vsfind", "completions", "powershell"]).is_ok());
    }
}
