//! List command implementation.
//!
//! The `vsfind list` command runs full discovery and prints every usable
//! toolset, preferred first.

use crate::cli::args::ListArgs;
use crate::config::Config;
use crate::discovery::find_toolsets_preferred_first;
use crate::error::Result;
use crate::host::Host;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{list_theme, show_toolset};

/// The list command implementation.
pub struct ListCommand<'a> {
    host: &'a Host<'a>,
    config: &'a Config,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(host: &'a Host<'a>, config: &'a Config, args: ListArgs) -> Self {
        Self { host, config, args }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let toolsets = find_toolsets_preferred_first(self.host, self.config, ui)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&toolsets).map_err(anyhow::Error::from)?;
            ui.result(&json);
            return Ok(CommandResult::success());
        }

        let theme = list_theme();
        ui.show_header("Toolsets (preferred first)");
        for toolset in &toolsets {
            show_toolset(ui, &theme, toolset);
        }
        ui.success(&format!("Found {} toolset(s)", toolsets.len()));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VsFindError;
    use crate::host::{MockFilesystem, MockProcessRunner};
    use crate::ui::{MockUI, OutputMode};
    use std::env::VarError;
    use std::path::PathBuf;

    fn no_env(_: &str) -> std::result::Result<String, VarError> {
        Err(VarError::NotPresent)
    }

    fn legacy_install() -> MockFilesystem {
        let root = "/pf86/Microsoft Visual Studio 14.0";
        MockFilesystem::new()
            .with_file(format!("{}/VC/bin/cl.exe", root))
            .with_file(format!("{}/VC/vcvarsall.bat", root))
            .with_file(format!("{}/VC/bin/dumpbin.exe", root))
            .with_file(format!("{}/VC/bin/amd64/vcvars64.bat", root))
            .with_dir(format!("{}/VC/bin/1033", root))
    }

    fn config() -> Config {
        Config {
            program_files_x86: Some(PathBuf::from("/pf86")),
            ..Default::default()
        }
    }

    #[test]
    fn lists_found_toolsets() {
        let fs = legacy_install();
        let runner = MockProcessRunner::unstartable();
        let host = Host::new(&fs, &runner, &no_env);
        let config = config();
        let mut ui = MockUI::new();

        let result = ListCommand::new(&host, &config, ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.headers(), ["Toolsets (preferred first)"]);
        assert_eq!(ui.messages().len(), 1);
        assert!(ui.messages()[0].contains("v140"));
        assert!(ui.messages()[0].contains("/pf86/Microsoft Visual Studio 14.0"));
        assert!(ui.has_success("Found 1 toolset(s)"));
    }

    #[test]
    fn json_output_is_an_array_of_toolsets() {
        let fs = legacy_install();
        let runner = MockProcessRunner::unstartable();
        let host = Host::new(&fs, &runner, &no_env);
        let config = config();
        let mut ui = MockUI::new();

        ListCommand::new(&host, &config, ListArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        assert!(ui.messages().is_empty());
        assert_eq!(ui.results().len(), 1);
        let parsed: serde_json::Value = serde_json::from_str(&ui.results()[0]).unwrap();
        let toolsets = parsed.as_array().unwrap();
        assert_eq!(toolsets.len(), 1);
        assert_eq!(toolsets[0]["version"], "v140");
        assert_eq!(
            toolsets[0]["supported_architectures"][0]["name"],
            serde_json::Value::from("x64")
        );
        assert!(ui.successes().is_empty());
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn json_output_is_written_in_silent_mode() {
        let fs = legacy_install();
        let runner = MockProcessRunner::unstartable();
        let host = Host::new(&fs, &runner, &no_env);
        let config = config();
        let mut ui = MockUI::with_mode(OutputMode::Silent);

        ListCommand::new(&host, &config, ListArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.results().len(), 1);
        assert!(ui.results()[0].contains("v140"));
    }

    #[test]
    fn nothing_found_propagates_error() {
        let fs = MockFilesystem::new();
        let runner = MockProcessRunner::unstartable();
        let host = Host::new(&fs, &runner, &no_env);
        let config = config();
        let mut ui = MockUI::new();

        let err = ListCommand::new(&host, &config, ListArgs::default())
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, VsFindError::NoToolsetFound { .. }));
    }
}
