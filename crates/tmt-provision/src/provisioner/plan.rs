//! Dry-run planning

use std::fmt;

use tmt_core::config::{effective_windows, Configuration, SessionSpec};
use tmt_core::traits::{MuxControl, ProvisionReporter};

use super::window::listing_mentions;
use super::{Provisioner, INITIAL_WINDOW_ID};

/// A change a provisioning run would make
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedAction {
    CreateSession {
        session: String,
        dir: String,
    },
    CreateWindow {
        session: String,
        window: String,
        dir: String,
    },
    KillInitialWindow {
        session: String,
    },
}

impl PlannedAction {
    /// Short verb describing the action
    pub fn verb(&self) -> &'static str {
        match self {
            PlannedAction::CreateSession { .. } => "create session",
            PlannedAction::CreateWindow { .. } => "create window",
            PlannedAction::KillInitialWindow { .. } => "kill window",
        }
    }

    /// Target of the action as tmux would address it
    pub fn target(&self) -> String {
        match self {
            PlannedAction::CreateSession { session, .. } => session.clone(),
            PlannedAction::CreateWindow {
                session, window, ..
            } => format!("{}:{}", session, window),
            PlannedAction::KillInitialWindow { session } => {
                format!("{}:{}", session, INITIAL_WINDOW_ID)
            }
        }
    }

    /// Working directory, for creations
    pub fn dir(&self) -> Option<&str> {
        match self {
            PlannedAction::CreateSession { dir, .. } | PlannedAction::CreateWindow { dir, .. } => {
                Some(dir.as_str())
            }
            PlannedAction::KillInitialWindow { .. } => None,
        }
    }
}

impl fmt::Display for PlannedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dir() {
            Some(dir) => write!(f, "{} {} in {}", self.verb(), self.target(), dir),
            None => write!(f, "{} {}", self.verb(), self.target()),
        }
    }
}

impl<M: MuxControl, R: ProvisionReporter> Provisioner<M, R> {
    /// Work out what [`Provisioner::run`] would change, without changing it
    ///
    /// Only queries reach the multiplexer. A session that does not exist
    /// yet is matched against the multiplexer's expected initial-window
    /// line, which is exact for [`crate::MemoryMux`] and a close guess for
    /// tmux.
    pub fn plan(&self, configuration: &Configuration) -> Vec<PlannedAction> {
        let mut actions = Vec::new();
        for session in &configuration.sessions {
            self.plan_session(session, &mut actions);
        }
        actions
    }

    fn plan_session(&self, session: &SessionSpec, actions: &mut Vec<PlannedAction>) {
        let fresh = !self.mux.session_exists(&session.name);

        let listing: Vec<String> = if fresh {
            actions.push(PlannedAction::CreateSession {
                session: session.name.clone(),
                dir: self.base_dir.resolve(&session.path),
            });
            vec![self.mux.initial_window_line()]
        } else {
            match self.mux.list_windows(&session.name) {
                Ok(lines) => lines.collect(),
                Err(e) => {
                    tracing::debug!("Planning '{}' without a window list: {}", session.name, e);
                    Vec::new()
                }
            }
        };

        let mut planned: Vec<String> = Vec::new();
        for window in effective_windows(session) {
            let present = listing_mentions(listing.iter().cloned(), &window.name)
                || listing_mentions(planned.iter().cloned(), &window.name);
            if present {
                continue;
            }
            actions.push(PlannedAction::CreateWindow {
                session: session.name.clone(),
                window: window.name.clone(),
                dir: self.base_dir.resolve(&window.path),
            });
            planned.push(window.name);
        }

        if fresh {
            actions.push(PlannedAction::KillInitialWindow {
                session: session.name.clone(),
            });
        }
    }
}
