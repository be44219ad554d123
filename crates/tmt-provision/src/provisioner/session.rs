//! Session reconciliation

use tmt_core::config::SessionSpec;
use tmt_core::traits::{MuxControl, ProvisionReporter};
use tmt_core::types::{ProvisionEvent, SessionOutcome};

use super::Provisioner;

impl<M: MuxControl, R: ProvisionReporter> Provisioner<M, R> {
    /// Make sure a session is running
    ///
    /// Creates the session when the multiplexer does not report it. The
    /// outcome of a failed creation is still "fresh" (see
    /// [`SessionOutcome::freshly_created`]).
    pub fn reconcile_session(&mut self, session: &SessionSpec) -> SessionOutcome {
        if self.mux.session_exists(&session.name) {
            tracing::debug!("Session '{}' already running", session.name);
            self.report(ProvisionEvent::SessionRunning {
                session: session.name.clone(),
            });
            return SessionOutcome::AlreadyRunning;
        }

        self.report(ProvisionEvent::SessionCreating {
            session: session.name.clone(),
        });

        let dir = self.base_dir.resolve(&session.path);
        match self.mux.create_session(&session.name, &dir) {
            Ok(()) => {
                tracing::info!("Created session '{}' in {}", session.name, dir);
                SessionOutcome::Created
            }
            Err(e) => {
                tracing::warn!("Failed to create session '{}': {}", session.name, e);
                self.report(ProvisionEvent::SessionCreateFailed {
                    session: session.name.clone(),
                    error: e.to_string(),
                });
                SessionOutcome::CreateFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tmt_core::config::BaseDir;
    use tmt_core::traits::NullReporter;

    use super::*;
    use crate::memory::{MemoryMux, MuxCall};

    fn base() -> BaseDir {
        BaseDir::new("/home/me")
    }

    #[test]
    fn test_missing_session_is_created_fresh() {
        let mut mux = MemoryMux::new();
        let mut events: Vec<ProvisionEvent> = Vec::new();
        let mut provisioner = Provisioner::new(&mut mux, base(), &mut events);

        let outcome = provisioner.reconcile_session(&SessionSpec::new("work", "$HOME/w"));

        assert_eq!(outcome, SessionOutcome::Created);
        assert!(outcome.freshly_created());
        assert_eq!(
            mux.calls(),
            &[MuxCall::CreateSession {
                name: "work".into(),
                dir: "/home/me/w".into(),
            }]
        );
        assert_eq!(
            events,
            vec![ProvisionEvent::SessionCreating {
                session: "work".into()
            }]
        );
    }

    #[test]
    fn test_empty_path_uses_base_dir() {
        let mut mux = MemoryMux::new();
        let mut provisioner = Provisioner::new(&mut mux, base(), NullReporter);

        provisioner.reconcile_session(&SessionSpec::new("work", ""));

        assert_eq!(mux.session_dir("work"), Some("/home/me"));
    }

    #[test]
    fn test_running_session_is_left_alone() {
        let mut mux = MemoryMux::new().with_session("work", "/elsewhere");
        let mut events: Vec<ProvisionEvent> = Vec::new();
        let mut provisioner = Provisioner::new(&mut mux, base(), &mut events);

        let outcome = provisioner.reconcile_session(&SessionSpec::new("work", "/w"));

        assert_eq!(outcome, SessionOutcome::AlreadyRunning);
        assert!(!outcome.freshly_created());
        assert!(mux.calls().is_empty());
        assert_eq!(mux.session_dir("work"), Some("/elsewhere"));
        assert_eq!(events[0].to_string(), "Session 'work' already running");
    }

    #[test]
    fn test_failed_creation_still_fresh() {
        let mut mux = MemoryMux::new().failing_session("work");
        let mut events: Vec<ProvisionEvent> = Vec::new();
        let mut provisioner = Provisioner::new(&mut mux, base(), &mut events);

        let outcome = provisioner.reconcile_session(&SessionSpec::new("work", ""));

        assert_eq!(outcome, SessionOutcome::CreateFailed);
        assert!(outcome.freshly_created());
        assert!(matches!(
            events.last(),
            Some(ProvisionEvent::SessionCreateFailed { session, .. }) if session == "work"
        ));
    }
}
