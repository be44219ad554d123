//! CLI command implementations

mod apply;
mod config;
mod plan;

pub use apply::apply_command;
pub use config::{config_init, config_path, config_show};
pub use plan::plan_command;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tmt_core::config::{self as core_config, BaseDir, LoadedConfiguration};
use tmt_provision::TmuxControl;

use crate::output::print_warning;

/// Settings shared by every command, resolved from flags and environment
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Configuration file to read
    pub config_path: PathBuf,
    /// Directory substituted for empty paths and `$HOME`
    pub base_dir: BaseDir,
    /// Multiplexer to provision
    pub tmux: TmuxControl,
    /// Suppress per-item status lines
    pub quiet: bool,
}

impl RunContext {
    /// Build a context, falling back to `<base>/tmt.json` for the config
    pub fn new(config_path: Option<PathBuf>, base_dir: BaseDir, tmux: TmuxControl) -> Self {
        let config_path =
            config_path.unwrap_or_else(|| core_config::default_configuration_path(&base_dir));
        Self {
            config_path,
            base_dir,
            tmux,
            quiet: false,
        }
    }

    /// Set quiet mode (builder style)
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

/// Load the configuration, treating only an unreadable file as fatal
fn load_for_run(ctx: &RunContext) -> Result<LoadedConfiguration> {
    let loaded = core_config::load_configuration(&ctx.config_path)
        .with_context(|| format!("Could not open config file {}", ctx.config_path.display()))?;

    if let Some(e) = &loaded.decode_error {
        tracing::warn!("Config {:?} only partially decoded: {}", loaded.path, e);
        print_warning(&format!("Could not parse session data: {}", e));
    }

    Ok(loaded)
}
