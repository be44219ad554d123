//! Session and window reconciliation
//!
//! [`Provisioner`] ties a multiplexer, the base directory and a status
//! reporter together. Its behavior is split by concern:
//!
//! - `session`: create a session when it is not running
//! - `window`: create a window when no listed window matches its name
//! - `driver`: walk the configuration, synthesize the default window and
//!   remove the initial window of fresh sessions
//! - `plan`: the same decisions, computed without touching the multiplexer

mod driver;
mod plan;
mod session;
mod summary;
mod window;

pub use driver::INITIAL_WINDOW_ID;
pub use plan::PlannedAction;
pub use summary::RunSummary;

use tmt_core::config::BaseDir;
use tmt_core::traits::{MuxControl, ProvisionReporter};
use tmt_core::types::ProvisionEvent;

/// Converges a multiplexer toward a configuration
pub struct Provisioner<M, R> {
    mux: M,
    base_dir: BaseDir,
    reporter: R,
}

impl<M: MuxControl, R: ProvisionReporter> Provisioner<M, R> {
    /// Create a provisioner
    ///
    /// `base_dir` replaces empty paths and `$HOME` in the configuration.
    pub fn new(mux: M, base_dir: BaseDir, reporter: R) -> Self {
        Self {
            mux,
            base_dir,
            reporter,
        }
    }

    fn report(&mut self, event: ProvisionEvent) {
        self.reporter.report(event);
    }
}
