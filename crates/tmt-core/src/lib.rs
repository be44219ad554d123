//! tmt-core: Core abstractions and configuration for tmt
//!
//! This crate provides the desired-state data model, the multiplexer
//! control trait and the status reporting types shared by the
//! provisioning engine and the CLI.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{BaseDir, Configuration, SessionSpec, WindowSpec};
pub use error::{ConfigError, MuxError};
pub use types::{ProvisionEvent, SessionOutcome, WindowOutcome};
