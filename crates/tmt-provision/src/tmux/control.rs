//! Blocking tmux command runner

use std::process::{Command, Output, Stdio};

use tmt_core::error::MuxError;
use tmt_core::traits::MuxControl;

use super::lines::WindowLines;

/// Program invoked when no other tmux binary is configured
pub const DEFAULT_TMUX_PROGRAM: &str = "tmux";

/// Window name tmux uses for a new session's shell when none is configured
pub const DEFAULT_SHELL_NAME: &str = "bash";

/// stderr fragments tmux prints when a kill target is already gone
const MISSING_WINDOW_MARKERS: &[&str] = &[
    "can't find window",
    "window not found",
    "no such window",
    "can't find session",
];

/// Multiplexer control backed by the `tmux` binary
///
/// Each operation spawns one tmux client process and waits for it. No
/// timeout is applied; a hung tmux hangs the caller.
#[derive(Debug, Clone)]
pub struct TmuxControl {
    program: String,
    socket_name: Option<String>,
    shell_name: String,
}

impl TmuxControl {
    /// Control the default tmux server through `tmux` on `PATH`
    pub fn new() -> Self {
        Self {
            program: DEFAULT_TMUX_PROGRAM.to_string(),
            socket_name: None,
            shell_name: DEFAULT_SHELL_NAME.to_string(),
        }
    }

    /// Use a different tmux executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Talk to the server on a named socket (`tmux -L <name>`)
    pub fn with_socket_name(mut self, socket_name: Option<String>) -> Self {
        self.socket_name = socket_name;
        self
    }

    /// Name tmux gives the initial window (the default shell's file name)
    pub fn with_shell_name(mut self, shell_name: impl Into<String>) -> Self {
        self.shell_name = shell_name.into();
        self
    }

    /// Configured executable
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Configured socket name, if any
    pub fn socket_name(&self) -> Option<&str> {
        self.socket_name.as_deref()
    }

    /// Build a tmux invocation with the server selection applied
    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(socket) = &self.socket_name {
            cmd.arg("-L").arg(socket);
        }
        cmd.args(args).stdin(Stdio::null());
        cmd
    }

    /// Human-readable form of an invocation, for logs and errors
    fn describe(&self, args: &[&str]) -> String {
        let mut parts = vec![self.program.as_str()];
        if let Some(socket) = &self.socket_name {
            parts.push("-L");
            parts.push(socket.as_str());
        }
        parts.extend_from_slice(args);
        parts.join(" ")
    }

    fn spawn_error(&self, source: std::io::Error) -> MuxError {
        MuxError::Spawn {
            program: self.program.clone(),
            source,
        }
    }

    fn output(&self, args: &[&str]) -> Result<Output, MuxError> {
        tracing::debug!("Running {}", self.describe(args));
        self.command(args)
            .output()
            .map_err(|e| self.spawn_error(e))
    }

    /// Run a command and turn a non-zero exit into an error
    fn run(&self, args: &[&str]) -> Result<(), MuxError> {
        let output = self.output(args)?;
        if output.status.success() {
            Ok(())
        } else {
            Err(MuxError::CommandFailed {
                command: self.describe(args),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl Default for TmuxControl {
    fn default() -> Self {
        Self::new()
    }
}

impl MuxControl for TmuxControl {
    type WindowLines = WindowLines;

    fn session_exists(&self, name: &str) -> bool {
        match self.output(&["has-session", "-t", name]) {
            Ok(output) => output.status.success(),
            Err(e) => {
                tracing::debug!("Treating session '{}' as absent: {}", name, e);
                false
            }
        }
    }

    fn create_session(&mut self, name: &str, dir: &str) -> Result<(), MuxError> {
        self.run(&["new-session", "-d", "-s", name, "-c", dir])
    }

    fn list_windows(&self, session: &str) -> Result<WindowLines, MuxError> {
        let args = ["list-windows", "-t", session];
        tracing::debug!("Running {}", self.describe(&args));

        let child = self
            .command(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        Ok(WindowLines::new(child))
    }

    fn initial_window_line(&self) -> String {
        // tmux's default list-windows format; layout and id are not known yet
        format!(
            "0: {}* (1 panes) [80x24] [layout] @0 (active)",
            self.shell_name
        )
    }

    fn create_window(&mut self, session: &str, window: &str, dir: &str) -> Result<(), MuxError> {
        self.run(&["new-window", "-n", window, "-t", session, "-c", dir])
    }

    fn kill_window(&mut self, session: &str, window_id: &str) -> Result<(), MuxError> {
        let target = format!("{}:{}", session, window_id);
        match self.run(&["kill-window", "-t", target.as_str()]) {
            Err(MuxError::CommandFailed { stderr, .. }) if is_missing_window(&stderr) => {
                tracing::debug!("Window {} already gone", target);
                Ok(())
            }
            other => other,
        }
    }
}

/// Check whether tmux stderr says the kill target does not exist
fn is_missing_window(stderr: &str) -> bool {
    let stderr = stderr.to_ascii_lowercase();
    MISSING_WINDOW_MARKERS
        .iter()
        .any(|marker| stderr.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_includes_socket() {
        let tmux = TmuxControl::new().with_socket_name(Some("tmt-test".to_string()));
        assert_eq!(
            tmux.describe(&["has-session", "-t", "work"]),
            "tmux -L tmt-test has-session -t work"
        );
    }

    #[test]
    fn test_describe_custom_program() {
        let tmux = TmuxControl::new().with_program("/opt/bin/tmux");
        assert_eq!(tmux.describe(&["ls"]), "/opt/bin/tmux ls");
        assert_eq!(tmux.program(), "/opt/bin/tmux");
        assert_eq!(tmux.socket_name(), None);
        assert!(tmux.initial_window_line().starts_with("0: bash* (1 panes)"));
    }

    #[test]
    fn test_missing_window_detection() {
        assert!(is_missing_window("can't find window: 0"));
        assert!(is_missing_window("Can't find session: work"));
        assert!(!is_missing_window("server exited unexpectedly"));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let mut tmux = TmuxControl::new().with_program("/nonexistent/tmt-no-such-tmux");

        assert!(!tmux.session_exists("work"));
        assert!(matches!(
            tmux.create_session("work", "/tmp"),
            Err(MuxError::Spawn { .. })
        ));
        assert!(matches!(
            tmux.list_windows("work"),
            Err(MuxError::Spawn { .. })
        ));
        assert!(matches!(
            tmux.kill_window("work", "0"),
            Err(MuxError::Spawn { .. })
        ));
    }
}
