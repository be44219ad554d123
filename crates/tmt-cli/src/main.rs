//! tmt CLI
//!
//! Reads a session file and brings tmux in line with it:
//! - apply: create missing sessions and windows (default)
//! - plan: show what apply would do
//! - config: locate, show, or scaffold the session file

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tmt::commands::{self, RunContext};
use tmt_core::config::BaseDir;
use tmt_provision::TmuxControl;

#[derive(Parser)]
#[command(name = "tmt")]
#[command(author, version, about = "Declarative tmux session provisioning")]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (defaults to <home>/tmt.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory used for empty paths and `$HOME` in the config
    #[arg(long, global = true, env = "TMT_HOME")]
    home: Option<PathBuf>,

    /// tmux executable to run
    #[arg(long, global = true, env = "TMT_TMUX", default_value = "tmux")]
    tmux: String,

    /// tmux server socket name (tmux -L)
    #[arg(short = 'L', long, global = true, env = "TMT_SOCKET")]
    socket_name: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create missing sessions and windows (default)
    Apply,

    /// Show what apply would change
    Plan,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Show current configuration
    Show,
    /// Write a sample configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Name tmux gives a new session's first window: the login shell's file name
fn shell_window_name() -> Option<String> {
    let shell = std::env::var("SHELL").ok()?;
    Path::new(&shell)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Status lines already cover what happened; logs are for -v
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "error",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let base_dir = match cli.home {
        Some(home) => BaseDir::from(home.as_path()),
        None => BaseDir::detect().context("Could not determine home directory; pass --home")?,
    };
    tracing::debug!("Using base directory {}", base_dir);

    let mut tmux = TmuxControl::new()
        .with_program(cli.tmux)
        .with_socket_name(cli.socket_name);
    if let Some(shell) = shell_window_name() {
        tmux = tmux.with_shell_name(shell);
    }

    let ctx = RunContext::new(cli.config, base_dir, tmux).quiet(cli.quiet);

    match cli.command.unwrap_or(Commands::Apply) {
        Commands::Apply => {
            commands::apply_command(&ctx)?;
        }

        Commands::Plan => {
            commands::plan_command(&ctx)?;
        }

        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config_path(&ctx)?,
            ConfigAction::Show => commands::config_show(&ctx)?,
            ConfigAction::Init { force } => commands::config_init(&ctx, force)?,
        },
    }

    Ok(())
}
