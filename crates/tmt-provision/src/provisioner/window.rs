//! Window reconciliation

use tmt_core::config::WindowSpec;
use tmt_core::traits::{MuxControl, ProvisionReporter};
use tmt_core::types::{ProvisionEvent, WindowOutcome};

use super::Provisioner;

/// Check whether any descriptor line mentions a window name
///
/// This is a substring test on the whole line, not a comparison against
/// the window's name field: `"foo"` matches a window called `"foobar"`,
/// and short names can match the index or pane count.
pub(crate) fn listing_mentions<I>(lines: I, name: &str) -> bool
where
    I: IntoIterator<Item = String>,
{
    lines.into_iter().any(|line| line.contains(name))
}

impl<M: MuxControl, R: ProvisionReporter> Provisioner<M, R> {
    /// Make sure a window exists in a session
    ///
    /// A window whose listing cannot be read is treated as missing. Creation
    /// failures are reported and not retried.
    pub fn reconcile_window(&mut self, session_name: &str, window: &WindowSpec) -> WindowOutcome {
        let exists = match self.mux.list_windows(session_name) {
            Ok(lines) => listing_mentions(lines, &window.name),
            Err(e) => {
                tracing::warn!("Failed to list windows of '{}': {}", session_name, e);
                self.report(ProvisionEvent::WindowListUnavailable {
                    session: session_name.to_string(),
                    error: e.to_string(),
                });
                false
            }
        };

        if exists {
            self.report(ProvisionEvent::WindowExists {
                session: session_name.to_string(),
                window: window.name.clone(),
            });
            return WindowOutcome::AlreadyExists;
        }

        self.report(ProvisionEvent::WindowCreating {
            session: session_name.to_string(),
            window: window.name.clone(),
        });

        let dir = self.base_dir.resolve(&window.path);
        match self.mux.create_window(session_name, &window.name, &dir) {
            Ok(()) => {
                tracing::info!(
                    "Created window '{}' in session '{}' ({})",
                    window.name,
                    session_name,
                    dir
                );
                WindowOutcome::Created
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to create window '{}' in session '{}': {}",
                    window.name,
                    session_name,
                    e
                );
                self.report(ProvisionEvent::WindowCreateFailed {
                    session: session_name.to_string(),
                    window: window.name.clone(),
                    error: e.to_string(),
                });
                WindowOutcome::CreateFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tmt_core::config::BaseDir;

    use super::*;
    use crate::memory::{MemoryMux, MuxCall};

    fn base() -> BaseDir {
        BaseDir::new("/home/me")
    }

    #[test]
    fn test_listing_mentions_is_substring_match() {
        let lines = vec!["0: bash (1 panes)".to_string(), "1: foobar (1 panes)".to_string()];
        assert!(listing_mentions(lines.clone(), "foo"));
        assert!(listing_mentions(lines.clone(), "bar"));
        assert!(!listing_mentions(lines, "baz"));
    }

    #[test]
    fn test_missing_window_is_created() {
        let mut mux = MemoryMux::new().with_session("work", "/w");
        let mut events: Vec<ProvisionEvent> = Vec::new();
        let mut provisioner = Provisioner::new(&mut mux, base(), &mut events);

        let outcome = provisioner.reconcile_window("work", &WindowSpec::new("editor", "$HOME/src"));

        assert_eq!(outcome, WindowOutcome::Created);
        assert_eq!(
            mux.calls(),
            &[MuxCall::CreateWindow {
                session: "work".into(),
                window: "editor".into(),
                dir: "/home/me/src".into(),
            }]
        );
        assert_eq!(events[0].to_string(), "Creating window 'editor'");
    }

    #[test]
    fn test_substring_counts_as_existing() {
        let mut mux = MemoryMux::new()
            .with_session("work", "/w")
            .with_window("work", "foobar");
        let mut events: Vec<ProvisionEvent> = Vec::new();
        let mut provisioner = Provisioner::new(&mut mux, base(), &mut events);

        let outcome = provisioner.reconcile_window("work", &WindowSpec::new("foo", ""));

        assert_eq!(outcome, WindowOutcome::AlreadyExists);
        assert!(mux.calls().is_empty());
        assert_eq!(events[0].to_string(), "Window 'foo' already exists");
    }

    #[test]
    fn test_listing_failure_attempts_creation() {
        let mut mux = MemoryMux::new()
            .with_session("work", "/w")
            .with_window("work", "editor")
            .failing_listing();
        let mut events: Vec<ProvisionEvent> = Vec::new();
        let mut provisioner = Provisioner::new(&mut mux, base(), &mut events);

        let outcome = provisioner.reconcile_window("work", &WindowSpec::new("editor", ""));

        assert_eq!(outcome, WindowOutcome::Created);
        assert!(matches!(
            events[0],
            ProvisionEvent::WindowListUnavailable { .. }
        ));
        assert!(matches!(events[1], ProvisionEvent::WindowCreating { .. }));
    }

    #[test]
    fn test_creation_failure_is_reported() {
        let mut mux = MemoryMux::new()
            .with_session("work", "/w")
            .failing_window("editor");
        let mut events: Vec<ProvisionEvent> = Vec::new();
        let mut provisioner = Provisioner::new(&mut mux, base(), &mut events);

        let outcome = provisioner.reconcile_window("work", &WindowSpec::new("editor", ""));

        assert_eq!(outcome, WindowOutcome::CreateFailed);
        assert_eq!(mux.creation_count(), 1);
        assert_eq!(events[1].to_string(), "Could not create window 'editor'");
    }
}
