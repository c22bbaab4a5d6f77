//! Configuration file loading.

use crate::config::schema::Config;
use crate::error::{Result, VsFindError};
use std::fs;
use std::path::Path;

/// Load configuration from an explicitly named file, or defaults when none is named.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the named file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config_file(path),
        None => {
            tracing::debug!("No config file named, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load a single config file and parse it into [`Config`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VsFindError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VsFindError::Io(e)
        }
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into [`Config`].
///
/// An empty or whitespace-only file yields the defaults.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(content).map_err(|e| VsFindError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn no_explicit_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_config_file_parses_valid_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vsfind.yml");
        fs::write(&path, "program_files_x86: /pf86\noutput: verbose\n").unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.program_files_x86, Some(PathBuf::from("/pf86")));
        assert_eq!(config.output, Some(OutputMode::Verbose));
        assert!(config.query_tool.is_none());
    }

    #[test]
    fn load_config_file_returns_not_found_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");

        let err = load_config(Some(&path)).unwrap_err();

        assert!(matches!(err, VsFindError::ConfigNotFound { path: p } if p == path));
    }

    #[test]
    fn parse_config_returns_parse_error_for_invalid_yaml() {
        let err = parse_config("program_files_x86: [unclosed", Path::new("bad.yml")).unwrap_err();
        match err {
            VsFindError::ConfigParseError { path, .. } => assert_eq!(path, PathBuf::from("bad.yml")),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn load_config_file_handles_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vsfind.yml");
        fs::write(&path, "  \n").unwrap();

        let config = load_config_file(&path).unwrap();

        assert_eq!(config, Config::default());
    }
}
