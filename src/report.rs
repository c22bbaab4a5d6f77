//! Turning a resolution [`Outcome`] into a result.
//!
//! Exclusions are advisory: they produce a warning and nothing else. An
//! empty `found` list is the one fatal outcome and carries every examined
//! path so the user can see where discovery looked.

use crate::error::{Result, VsFindError};
use crate::toolset::{Outcome, Toolset};
use crate::ui::UserInterface;

/// Warn about exclusions, then return the found toolsets or fail.
pub fn report(outcome: Outcome, ui: &mut dyn UserInterface) -> Result<Vec<Toolset>> {
    if !outcome.excluded.is_empty() {
        let mut warning = String::from(
            "The following VS instances are excluded because the English language pack is unavailable.",
        );
        for toolset in &outcome.excluded {
            warning.push_str(&format!("\n    {}", toolset.root_path.display()));
        }
        warning.push_str("\nPlease install the English language pack.");
        ui.warning(&warning);
    }

    if outcome.found.is_empty() {
        return Err(VsFindError::NoToolsetFound {
            examined: outcome.examined_paths,
        });
    }

    Ok(outcome.found)
}
