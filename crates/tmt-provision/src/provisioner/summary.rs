//! Per-run counters

use std::fmt;

use tmt_core::types::{SessionOutcome, WindowOutcome};

/// Tally of what a provisioning run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sessions_created: usize,
    pub sessions_running: usize,
    pub sessions_failed: usize,
    pub windows_created: usize,
    pub windows_existing: usize,
    pub windows_failed: usize,
}

impl RunSummary {
    pub fn record_session(&mut self, outcome: &SessionOutcome) {
        match outcome {
            SessionOutcome::Created => self.sessions_created += 1,
            SessionOutcome::AlreadyRunning => self.sessions_running += 1,
            SessionOutcome::CreateFailed => self.sessions_failed += 1,
        }
    }

    pub fn record_window(&mut self, outcome: &WindowOutcome) {
        match outcome {
            WindowOutcome::Created => self.windows_created += 1,
            WindowOutcome::AlreadyExists => self.windows_existing += 1,
            WindowOutcome::CreateFailed => self.windows_failed += 1,
        }
    }

    /// Total sessions and windows created
    pub fn creations(&self) -> usize {
        self.sessions_created + self.windows_created
    }

    /// Total sessions and windows that could not be created
    pub fn failures(&self) -> usize {
        self.sessions_failed + self.windows_failed
    }

    /// Whether every creation attempt succeeded
    pub fn is_clean(&self) -> bool {
        self.failures() == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sessions: {} created, {} already running; windows: {} created, {} already present",
            self.sessions_created, self.sessions_running, self.windows_created, self.windows_existing
        )?;
        if !self.is_clean() {
            write!(f, "; {} failed", self.failures())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_failures_only_when_present() {
        let mut summary = RunSummary::default();
        summary.record_session(&SessionOutcome::Created);
        summary.record_window(&WindowOutcome::Created);
        summary.record_window(&WindowOutcome::AlreadyExists);
        assert_eq!(
            summary.to_string(),
            "sessions: 1 created, 0 already running; windows: 1 created, 1 already present"
        );

        summary.record_window(&WindowOutcome::CreateFailed);
        assert!(summary.to_string().ends_with("; 1 failed"));
        assert_eq!(summary.creations(), 2);
    }
}
