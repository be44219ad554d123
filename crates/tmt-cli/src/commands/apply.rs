//! Apply command implementation

use anyhow::Result;
use tmt_core::traits::NullReporter;
use tmt_provision::{Provisioner, RunSummary};

use super::{load_for_run, RunContext};
use crate::output::{print_info, print_success, print_warning, TerminalReporter};

/// Create every missing session and window described by the config
///
/// Fails only when the configuration file cannot be opened. Individual
/// creation failures are printed and the run carries on.
pub fn apply_command(ctx: &RunContext) -> Result<RunSummary> {
    if !ctx.quiet {
        print_info(&format!("Using config file {}", ctx.config_path.display()));
    }

    let loaded = load_for_run(ctx)?;
    let configuration = &loaded.configuration;

    let summary = if ctx.quiet {
        Provisioner::new(ctx.tmux.clone(), ctx.base_dir.clone(), NullReporter).run(configuration)
    } else {
        Provisioner::new(ctx.tmux.clone(), ctx.base_dir.clone(), TerminalReporter)
            .run(configuration)
    };

    if summary.is_clean() {
        if !ctx.quiet {
            print_success(&format!("Done: {}", summary));
        }
    } else {
        print_warning(&format!("Finished with errors: {}", summary));
    }

    Ok(summary)
}
