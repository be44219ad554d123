//! Core error types for tmt

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a multiplexer control implementation
#[derive(Error, Debug)]
pub enum MuxError {
    /// The multiplexer program could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The multiplexer ran but rejected the command
    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// Target session does not exist
    #[error("Session not found: {0}")]
    SessionNotFound(String),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    /// Config file exists but could not be read
    #[error("Could not open config file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON decode error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML decode error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid configuration
    #[error("Invalid config: {0}")]
    Invalid(String),
}
