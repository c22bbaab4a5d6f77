//! Instances command implementation.
//!
//! The `vsfind instances` command enumerates and ranks installations
//! without resolving toolsets.

use crate::cli::args::InstancesArgs;
use crate::config::Config;
use crate::discovery::find_instances_preferred_first;
use crate::error::Result;
use crate::host::Host;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{instance_line, list_theme};

/// The instances command implementation.
pub struct InstancesCommand<'a> {
    host: &'a Host<'a>,
    config: &'a Config,
    args: InstancesArgs,
}

impl<'a> InstancesCommand<'a> {
    /// Create a new instances command.
    pub fn new(host: &'a Host<'a>, config: &'a Config, args: InstancesArgs) -> Self {
        Self { host, config, args }
    }
}

impl Command for InstancesCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let instances = find_instances_preferred_first(self.host, self.config)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&instances).map_err(anyhow::Error::from)?;
            ui.result(&json);
        } else if !instances.is_empty() {
            let theme = list_theme();
            ui.show_header("Instances (preferred first)");
            for instance in &instances {
                ui.message(&instance_line(&theme, instance));
            }
        }

        if instances.is_empty() {
            ui.warning("No Visual Studio instances found");
            return Ok(CommandResult::failure(1));
        }

        Ok(CommandResult::success())
    }
}
