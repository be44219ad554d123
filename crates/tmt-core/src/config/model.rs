//! Desired-state model

use serde::{Deserialize, Serialize};

use super::serde_utils::null_as_default;

/// Name of the window synthesized for sessions that list none
pub const DEFAULT_WINDOW_NAME: &str = "default";

/// Complete desired state, in provisioning order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(
        rename = "SessionData",
        default,
        deserialize_with = "null_as_default"
    )]
    pub sessions: Vec<SessionSpec>,
}

/// A session that should exist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSpec {
    /// Multiplexer session identifier
    #[serde(rename = "Name", default)]
    pub name: String,

    /// Working directory; empty means the base directory
    #[serde(
        rename = "Path",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub path: String,

    /// Windows in creation order
    #[serde(
        rename = "Windows",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub windows: Vec<WindowSpec>,
}

impl SessionSpec {
    /// Create a session without windows
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            windows: Vec::new(),
        }
    }

    /// Add a window (builder style)
    pub fn with_window(mut self, window: WindowSpec) -> Self {
        self.windows.push(window);
        self
    }
}

/// A window that should exist inside a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    #[serde(rename = "Name", default)]
    pub name: String,

    #[serde(
        rename = "Path",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub path: String,
}

impl WindowSpec {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Windows to reconcile for a session
///
/// A session without windows gets a single `"default"` window sharing the
/// session's (unresolved) path. The session itself is left untouched.
pub fn effective_windows(session: &SessionSpec) -> Vec<WindowSpec> {
    if session.windows.is_empty() {
        vec![WindowSpec::new(DEFAULT_WINDOW_NAME, session.path.clone())]
    } else {
        session.windows.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_windows_synthesizes_default() {
        let session = SessionSpec::new("work", "$HOME/work");
        let windows = effective_windows(&session);

        assert_eq!(windows, vec![WindowSpec::new("default", "$HOME/work")]);
        assert!(session.windows.is_empty());
    }

    #[test]
    fn test_effective_windows_keeps_declared_order() {
        let session = SessionSpec::new("work", "")
            .with_window(WindowSpec::new("b", ""))
            .with_window(WindowSpec::new("a", "/tmp"));
        let names: Vec<_> = effective_windows(&session)
            .into_iter()
            .map(|w| w.name)
            .collect();

        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let session = SessionSpec::new("work", "");
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, r#"{"Name":"work"}"#);
    }
}
