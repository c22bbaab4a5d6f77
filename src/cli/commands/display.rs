//! Shared display helpers for toolsets and instances.
//!
//! Used by `list` and `instances` so both render paths and versions the
//! same way.

use crate::instance::Instance;
use crate::toolset::Toolset;
use crate::ui::{should_use_colors, UserInterface, VsFindTheme};

/// The theme for list output, plain when colors are off.
pub fn list_theme() -> VsFindTheme {
    if should_use_colors() {
        VsFindTheme::new()
    } else {
        VsFindTheme::plain()
    }
}

/// One-line summary of a toolset: version, root, and any env-script arguments.
pub fn toolset_line(theme: &VsFindTheme, toolset: &Toolset) -> String {
    let mut line = format!(
        "  {} {}",
        theme.highlight.apply_to(toolset.version),
        toolset.root_path.display()
    );
    if !toolset.env_script_args.is_empty() {
        line.push_str(&format!(
            " {}",
            theme
                .dim
                .apply_to(format!("({})", toolset.env_script_args.join(" ")))
        ));
    }
    line
}

/// Print a toolset, with paths and architectures when details are shown.
pub fn show_toolset(ui: &mut dyn UserInterface, theme: &VsFindTheme, toolset: &Toolset) {
    ui.message(&toolset_line(theme, toolset));

    if ui.output_mode().shows_details() {
        ui.message(&format!("      env script: {}", toolset.env_script.display()));
        ui.message(&format!(
            "      dumpbin:    {}",
            toolset.inspection_tool.display()
        ));
        let names: Vec<&str> = toolset
            .supported_architectures
            .iter()
            .map(|arch| arch.name)
            .collect();
        ui.message(&format!("      archs:      {}", names.join(", ")));
    }
}

/// One-line summary of an instance: tier, version, root.
pub fn instance_line(theme: &VsFindTheme, instance: &Instance) -> String {
    format!(
        "  {} {} {}",
        theme.dim.apply_to(format!("[{}]", instance.tier())),
        theme.highlight.apply_to(instance.version()),
        instance.root_path().display()
    )
}
