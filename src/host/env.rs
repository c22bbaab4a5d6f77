//! Environment lookup and the Program Files resolver.

use std::env::VarError;
use std::path::PathBuf;

use crate::error::{Result, VsFindError};

/// Environment-variable lookup.
///
/// Mirrors the signature of [`std::env::var`] so the real environment and
/// test maps are interchangeable.
pub type EnvLookup = dyn Fn(&str) -> std::result::Result<String, VarError>;

/// Look up a variable in the process environment.
pub fn system_env(key: &str) -> std::result::Result<String, VarError> {
    std::env::var(key)
}

/// Resolve the 32-bit Program Files root.
///
/// Checks `ProgramFiles(x86)` first (present on 64-bit Windows), then
/// `ProgramFiles` (32-bit Windows, where the two coincide). Empty values
/// count as unset.
pub fn program_files_32_bit(env: &EnvLookup) -> Result<PathBuf> {
    ["ProgramFiles(x86)", "ProgramFiles"]
        .iter()
        .filter_map(|key| env(key).ok())
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
        .ok_or(VsFindError::ProgramFilesUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_env(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> std::result::Result<String, VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn prefers_x86_program_files() {
        let env = make_env(&[
            ("ProgramFiles(x86)", r"C:\Program Files (x86)"),
            ("ProgramFiles", r"C:\Program Files"),
        ]);
        assert_eq!(
            program_files_32_bit(&env).unwrap(),
            PathBuf::from(r"C:\Program Files (x86)")
        );
    }

    #[test]
    fn falls_back_to_program_files() {
        let env = make_env(&[("ProgramFiles", r"C:\Program Files")]);
        assert_eq!(
            program_files_32_bit(&env).unwrap(),
            PathBuf::from(r"C:\Program Files")
        );
    }

    #[test]
    fn empty_value_counts_as_unset() {
        let env = make_env(&[("ProgramFiles(x86)", ""), ("ProgramFiles", "/pf")]);
        assert_eq!(program_files_32_bit(&env).unwrap(), PathBuf::from("/pf"));
    }

    #[test]
    fn missing_both_is_an_error() {
        let env = make_env(&[]);
        assert!(matches!(
            program_files_32_bit(&env),
            Err(VsFindError::ProgramFilesUnavailable)
        ));
    }
}
