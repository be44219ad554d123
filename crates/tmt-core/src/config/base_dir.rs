//! Working directory resolution

use std::fmt;
use std::path::Path;

/// Placeholder replaced by the base directory in configured paths
pub const HOME_PLACEHOLDER: &str = "$HOME";

/// Directory used for unset paths and `$HOME` substitution
///
/// Resolved once by the caller and handed to the provisioning engine, so
/// the engine never consults the process environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDir(String);

impl BaseDir {
    /// Create a base directory from an explicit value
    pub fn new(dir: impl Into<String>) -> Self {
        Self(dir.into())
    }

    /// Detect the current user's home directory
    ///
    /// Uses the platform lookup first and falls back to `$HOME`.
    pub fn detect() -> Option<Self> {
        dirs::home_dir()
            .map(|p| p.to_string_lossy().into_owned())
            .or_else(|| std::env::var("HOME").ok())
            .filter(|home| !home.is_empty())
            .map(Self)
    }

    /// Get the raw directory string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the directory as a path
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Resolve a configured path to the directory handed to the multiplexer
    ///
    /// Empty paths become the base directory. Otherwise every occurrence of
    /// `$HOME` is replaced; nothing else is expanded.
    pub fn resolve(&self, path: &str) -> String {
        if path.is_empty() {
            self.0.clone()
        } else {
            path.replace(HOME_PLACEHOLDER, &self.0)
        }
    }
}

impl fmt::Display for BaseDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&Path> for BaseDir {
    fn from(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }
}
