//! Core trait definitions

mod mux;
mod reporter;

pub use mux::MuxControl;
pub use reporter::{NullReporter, ProvisionReporter};
