//! Config command implementations

use anyhow::{Context, Result};

use super::RunContext;
use crate::output::{print_error, print_info, print_success, print_warning};
use tmt_core::config;

/// Print the configuration file path in use
pub fn config_path(ctx: &RunContext) -> Result<()> {
    println!("{}", ctx.config_path.display());
    Ok(())
}

/// Show current configuration
pub fn config_show(ctx: &RunContext) -> Result<()> {
    let path = &ctx.config_path;

    if !path.exists() {
        print_warning(&format!("No configuration file found at {}", path.display()));
        print_info("Run 'tmt config init' to create one");
        return Ok(());
    }

    print_info(&format!("Configuration file: {}", path.display()));
    println!();

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    println!("{}", content);

    Ok(())
}

/// Write a sample configuration
pub fn config_init(ctx: &RunContext, force: bool) -> Result<()> {
    let path = &ctx.config_path;

    if path.exists() && !force {
        print_error(&format!("Config file already exists: {}", path.display()));
        print_info("Use --force to overwrite");
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
    }

    std::fs::write(path, config::render_template())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    print_success(&format!("Created configuration file: {}", path.display()));
    Ok(())
}
