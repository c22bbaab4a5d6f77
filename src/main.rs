//! vsfind CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vsfind::cli::{Cli, CommandDispatcher};
use vsfind::config::{load_config, Config};
use vsfind::host::{system_env, Host, OsFilesystem, SystemProcessRunner};
use vsfind::ui::{OutputMode, TerminalUI, UserInterface};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout is reserved for results.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("vsfind=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vsfind=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// CLI flags win over the config file; Normal otherwise.
fn output_mode(cli: &Cli, config: &Config) -> OutputMode {
    if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        config.output.unwrap_or_default()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("vsfind starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let mut ui = TerminalUI::new(output_mode(&cli, &Config::default()));
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };
    if let Some(program_files) = &cli.program_files {
        config.program_files_x86 = Some(program_files.clone());
    }

    let mut ui = TerminalUI::new(output_mode(&cli, &config));

    let fs = OsFilesystem;
    let runner = SystemProcessRunner;
    let host = Host::new(&fs, &runner, &system_env);

    let dispatcher = CommandDispatcher::new(&host, config);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
