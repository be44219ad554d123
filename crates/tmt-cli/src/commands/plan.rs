//! Plan command implementation

use anyhow::Result;
use tmt_core::traits::NullReporter;
use tmt_provision::{PlannedAction, Provisioner};

use super::{load_for_run, RunContext};
use crate::output::{format_plan, print_info};

/// Show what `apply` would change without touching tmux
pub fn plan_command(ctx: &RunContext) -> Result<Vec<PlannedAction>> {
    if !ctx.quiet {
        print_info(&format!("Using config file {}", ctx.config_path.display()));
    }

    let loaded = load_for_run(ctx)?;
    let actions = Provisioner::new(ctx.tmux.clone(), ctx.base_dir.clone(), NullReporter)
        .plan(&loaded.configuration);

    println!("{}", format_plan(&actions));
    Ok(actions)
}
