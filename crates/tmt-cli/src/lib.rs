//! tmt: Command-line interface for declarative tmux provisioning
//!
//! Provides the `tmt` CLI, which reads a session configuration and
//! creates whatever sessions and windows are missing.

pub mod commands;
pub mod output;
