//! tmt-provision: Reconciliation engine for tmt
//!
//! Queries the multiplexer for what already exists, creates only the
//! sessions and windows that are missing, and removes the initial window
//! tmux attaches to every new session. Two control implementations ship
//! with the engine: [`TmuxControl`] drives the real `tmux` binary and
//! [`MemoryMux`] keeps an in-memory multiplexer for tests.

pub mod memory;
pub mod provisioner;
pub mod tmux;

pub use memory::{MemoryMux, MuxCall};
pub use provisioner::{PlannedAction, Provisioner, RunSummary, INITIAL_WINDOW_ID};
pub use tmux::TmuxControl;
