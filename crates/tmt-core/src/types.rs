//! Core domain types

use std::fmt;

/// What the session reconciler did for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Session was missing and has been created
    Created,
    /// Session was missing and creation was attempted but rejected
    CreateFailed,
    /// Session was already running
    AlreadyRunning,
}

impl SessionOutcome {
    /// Whether the session should be treated as newly created
    ///
    /// A failed creation attempt still counts, so the driver attempts the
    /// initial-window cleanup for it as well.
    pub fn freshly_created(&self) -> bool {
        matches!(self, SessionOutcome::Created | SessionOutcome::CreateFailed)
    }
}

/// What the window reconciler did for one window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowOutcome {
    Created,
    CreateFailed,
    AlreadyExists,
}

/// Status line emitted while provisioning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionEvent {
    /// Session is missing and about to be created
    SessionCreating { session: String },
    /// Session creation was rejected
    SessionCreateFailed { session: String, error: String },
    /// Session already exists and is left alone
    SessionRunning { session: String },
    /// Windows of a session could not be listed
    WindowListUnavailable { session: String, error: String },
    /// Window is missing and about to be created
    WindowCreating { session: String, window: String },
    /// Window creation was rejected
    WindowCreateFailed {
        session: String,
        window: String,
        error: String,
    },
    /// Window already exists and is left alone
    WindowExists { session: String, window: String },
}

impl ProvisionEvent {
    /// Whether the event concerns a window rather than the session itself
    pub fn is_window_event(&self) -> bool {
        matches!(
            self,
            ProvisionEvent::WindowListUnavailable { .. }
                | ProvisionEvent::WindowCreating { .. }
                | ProvisionEvent::WindowCreateFailed { .. }
                | ProvisionEvent::WindowExists { .. }
        )
    }

    /// Whether the event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ProvisionEvent::SessionCreateFailed { .. }
                | ProvisionEvent::WindowListUnavailable { .. }
                | ProvisionEvent::WindowCreateFailed { .. }
        )
    }
}

impl fmt::Display for ProvisionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisionEvent::SessionCreating { session } => {
                write!(f, "Session '{}' is not running yet... creating", session)
            }
            ProvisionEvent::SessionCreateFailed { session, error } => {
                write!(f, "Could not create session '{}', error {}", session, error)
            }
            ProvisionEvent::SessionRunning { session } => {
                write!(f, "Session '{}' already running", session)
            }
            ProvisionEvent::WindowListUnavailable { session, .. } => {
                write!(f, "Could not retrieve window list from session '{}'", session)
            }
            ProvisionEvent::WindowCreating { window, .. } => {
                write!(f, "Creating window '{}'", window)
            }
            ProvisionEvent::WindowCreateFailed { window, .. } => {
                write!(f, "Could not create window '{}'", window)
            }
            ProvisionEvent::WindowExists { window, .. } => {
                write!(f, "Window '{}' already exists", window)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_creation_counts_as_fresh() {
        assert!(SessionOutcome::Created.freshly_created());
        assert!(SessionOutcome::CreateFailed.freshly_created());
        assert!(!SessionOutcome::AlreadyRunning.freshly_created());
    }

    #[test]
    fn test_event_lines() {
        let event = ProvisionEvent::SessionRunning {
            session: "work".into(),
        };
        assert_eq!(event.to_string(), "Session 'work' already running");

        let event = ProvisionEvent::WindowExists {
            session: "work".into(),
            window: "editor".into(),
        };
        assert_eq!(event.to_string(), "Window 'editor' already exists");
        assert!(event.is_window_event());
    }

    #[test]
    fn test_failure_classification() {
        let event = ProvisionEvent::WindowCreateFailed {
            session: "s".into(),
            window: "w".into(),
            error: "boom".into(),
        };
        assert!(event.is_failure());
        assert!(!ProvisionEvent::SessionCreating { session: "s".into() }.is_failure());
    }
}
