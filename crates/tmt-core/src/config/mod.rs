//! Configuration management for tmt
//!
//! The desired state lives in a single document (JSON by default, TOML
//! when the file name ends in `.toml`) with a `SessionData` list at the
//! top level. Loading distinguishes two failure classes: a file that cannot
//! be opened is fatal, while a file that fails to decode still yields
//! every session it could recover.

mod base_dir;
mod decode;
mod model;
mod serde_utils;

pub use base_dir::{BaseDir, HOME_PLACEHOLDER};
pub use model::{effective_windows, Configuration, SessionSpec, WindowSpec, DEFAULT_WINDOW_NAME};

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// File name of the configuration looked up in the base directory
pub const DEFAULT_CONFIG_FILE: &str = "tmt.json";

/// Get the default configuration file path for a base directory
pub fn default_configuration_path(base_dir: &BaseDir) -> PathBuf {
    base_dir.as_path().join(DEFAULT_CONFIG_FILE)
}

/// Supported on-disk configuration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Result of loading a configuration file
#[derive(Debug)]
pub struct LoadedConfiguration {
    /// Path the configuration was read from
    pub path: PathBuf,
    /// Sessions recovered from the document
    pub configuration: Configuration,
    /// Decode error, if the document was only partially understood
    pub decode_error: Option<ConfigError>,
}

impl LoadedConfiguration {
    /// Whether the whole document decoded cleanly
    pub fn is_complete(&self) -> bool {
        self.decode_error.is_none()
    }
}

/// Load a configuration file
///
/// Returns an error only when the file cannot be opened. Decode failures
/// are carried in [`LoadedConfiguration::decode_error`] next to the
/// partially populated configuration.
pub fn load_configuration(path: &Path) -> Result<LoadedConfiguration, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let (configuration, decode_error) = parse_configuration(&content, ConfigFormat::from_path(path));
    tracing::debug!(
        "Loaded {} session(s) from {:?}",
        configuration.sessions.len(),
        path
    );

    Ok(LoadedConfiguration {
        path: path.to_path_buf(),
        configuration,
        decode_error,
    })
}

/// Decode configuration text, keeping whatever decoded before an error
pub fn parse_configuration(
    content: &str,
    format: ConfigFormat,
) -> (Configuration, Option<ConfigError>) {
    let document: serde_json::Value = match format {
        ConfigFormat::Json => match serde_json::from_str(content) {
            Ok(value) => value,
            Err(e) => return (Configuration::default(), Some(e.into())),
        },
        ConfigFormat::Toml => {
            let table: toml::Table = match toml::from_str(content) {
                Ok(table) => table,
                Err(e) => return (Configuration::default(), Some(e.into())),
            };
            match serde_json::to_value(table) {
                Ok(value) => value,
                Err(e) => return (Configuration::default(), Some(e.into())),
            }
        }
    };

    decode::decode_document(document)
}

/// Sample configuration written by `tmt config init`
pub fn render_template() -> String {
    let sample = Configuration {
        sessions: vec![
            SessionSpec {
                name: "work".to_string(),
                path: format!("{}/src", HOME_PLACEHOLDER),
                windows: vec![
                    WindowSpec::new("editor", format!("{}/src", HOME_PLACEHOLDER)),
                    WindowSpec::new("shell", ""),
                ],
            },
            SessionSpec {
                name: "scratch".to_string(),
                path: String::new(),
                windows: vec![],
            },
        ],
    };

    // Serializing plain strings and lists cannot fail
    serde_json::to_string_pretty(&sample).unwrap_or_default() + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "SessionData": [
                {"Name": "work", "Path": "$HOME/src", "Windows": [
                    {"Name": "editor", "Path": "$HOME/src/app"},
                    {"Name": "logs"}
                ]},
                {"Name": "scratch"}
            ]
        }"#;

        let (config, error) = parse_configuration(json, ConfigFormat::Json);
        assert!(error.is_none());
        assert_eq!(config.sessions.len(), 2);
        assert_eq!(config.sessions[0].name, "work");
        assert_eq!(config.sessions[0].windows[1].name, "logs");
        assert_eq!(config.sessions[0].windows[1].path, "");
        assert!(config.sessions[1].windows.is_empty());
        assert_eq!(config.sessions[1].path, "");
    }

    #[test]
    fn test_parse_lowercase_keys() {
        let json = r#"{"SessionData": [{"name": "dev", "path": "/tmp", "windows": [{"name": "a"}]}]}"#;
        let (config, error) = parse_configuration(json, ConfigFormat::Json);
        assert!(error.is_none());
        assert_eq!(config.sessions[0].name, "dev");
        assert_eq!(config.sessions[0].path, "/tmp");
        assert_eq!(config.sessions[0].windows[0].name, "a");
    }

    #[test]
    fn test_parse_null_fields() {
        let json = r#"{"SessionData": [{"Name": "dev", "Path": null, "Windows": null}]}"#;
        let (config, error) = parse_configuration(json, ConfigFormat::Json);
        assert!(error.is_none());
        assert_eq!(config.sessions[0].path, "");
        assert!(config.sessions[0].windows.is_empty());
    }

    #[test]
    fn test_missing_session_data_is_empty() {
        let (config, error) = parse_configuration("{}", ConfigFormat::Json);
        assert!(error.is_none());
        assert!(config.sessions.is_empty());
    }

    #[test]
    fn test_syntax_error_yields_empty_configuration() {
        let (config, error) = parse_configuration("{\"SessionData\": [", ConfigFormat::Json);
        assert!(config.sessions.is_empty());
        assert!(matches!(error, Some(ConfigError::Json(_))));
    }

    #[test]
    fn test_malformed_entry_keeps_later_sessions() {
        let json = r#"{"SessionData": [
            {"Name": "first"},
            {"Name": "second", "Windows": "oops"},
            {"Name": "third"}
        ]}"#;
        let (config, error) = parse_configuration(json, ConfigFormat::Json);
        assert!(error.is_some());
        assert_eq!(config.sessions.len(), 3);
        assert_eq!(config.sessions[1].name, "second");
        assert!(config.sessions[1].windows.is_empty());
        assert_eq!(config.sessions[2].name, "third");
    }

    #[test]
    fn test_session_data_wrong_type() {
        let (config, error) = parse_configuration(r#"{"SessionData": "nope"}"#, ConfigFormat::Json);
        assert!(config.sessions.is_empty());
        assert!(matches!(error, Some(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_toml_document() {
        let toml = r#"
[[SessionData]]
Name = "work"
Path = "$HOME/src"

[[SessionData.Windows]]
Name = "editor"

[[SessionData]]
Name = "scratch"
"#;
        let (config, error) = parse_configuration(toml, ConfigFormat::Toml);
        assert!(error.is_none());
        assert_eq!(config.sessions.len(), 2);
        assert_eq!(config.sessions[0].windows[0].name, "editor");
        assert_eq!(config.sessions[1].name, "scratch");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a/tmt.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a/tmt.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("tmt")), ConfigFormat::Json);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_configuration(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_malformed_file_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tmt.json");
        std::fs::write(&path, "not json").unwrap();

        let loaded = load_configuration(&path).unwrap();
        assert!(!loaded.is_complete());
        assert!(loaded.configuration.sessions.is_empty());
    }

    #[test]
    fn test_template_parses() {
        let (config, error) = parse_configuration(&render_template(), ConfigFormat::Json);
        assert!(error.is_none());
        assert_eq!(config.sessions.len(), 2);
        assert_eq!(config.sessions[0].windows.len(), 2);
    }

    #[test]
    fn test_default_configuration_path() {
        let base = BaseDir::new("/home/me");
        assert_eq!(
            default_configuration_path(&base),
            PathBuf::from("/home/me/tmt.json")
        );
    }
}
