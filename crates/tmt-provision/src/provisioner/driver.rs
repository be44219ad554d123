//! Provisioning driver

use tmt_core::config::{effective_windows, Configuration, SessionSpec};
use tmt_core::traits::{MuxControl, ProvisionReporter};

use super::{Provisioner, RunSummary};

/// Window removed from freshly created sessions
///
/// tmux gives every new session an initial window; with the default
/// `base-index` of 0 that window sits at index 0. The window is targeted
/// by position, so a server configured with another `base-index` gets the
/// wrong window (or none) removed.
pub const INITIAL_WINDOW_ID: &str = "0";

impl<M: MuxControl, R: ProvisionReporter> Provisioner<M, R> {
    /// Provision every session of a configuration, in order
    ///
    /// Failures are reported per item and never stop the run.
    pub fn run(&mut self, configuration: &Configuration) -> RunSummary {
        let mut summary = RunSummary::default();
        for session in &configuration.sessions {
            self.provision_session(session, &mut summary);
        }
        tracing::info!("Provisioning finished: {}", summary);
        summary
    }

    fn provision_session(&mut self, session: &SessionSpec, summary: &mut RunSummary) {
        let outcome = self.reconcile_session(session);
        summary.record_session(&outcome);

        for window in effective_windows(session) {
            let window_outcome = self.reconcile_window(&session.name, &window);
            summary.record_window(&window_outcome);
        }

        if outcome.freshly_created() {
            if let Err(e) = self.mux.kill_window(&session.name, INITIAL_WINDOW_ID) {
                tracing::debug!(
                    "Ignoring failed removal of initial window in '{}': {}",
                    session.name,
                    e
                );
            }
        }
    }
}
