//! In-memory multiplexer
//!
//! Behaves like a freshly started tmux server: a new session gets an
//! initial window at index 0, later windows take the next free index, and
//! `list_windows` prints lines shaped like tmux's default format. Every
//! mutating call is recorded so tests can assert on exactly what the
//! engine asked for.

use std::collections::{BTreeMap, HashSet};

use tmt_core::error::MuxError;
use tmt_core::traits::MuxControl;

use crate::tmux::DEFAULT_SHELL_NAME;

/// A mutating call received by [`MemoryMux`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MuxCall {
    CreateSession {
        name: String,
        dir: String,
    },
    CreateWindow {
        session: String,
        window: String,
        dir: String,
    },
    KillWindow {
        session: String,
        window_id: String,
    },
}

impl MuxCall {
    /// Whether the call asks for a new session or window
    pub fn is_creation(&self) -> bool {
        !matches!(self, MuxCall::KillWindow { .. })
    }
}

#[derive(Debug, Clone)]
struct Window {
    index: usize,
    name: String,
    dir: String,
}

#[derive(Debug, Clone)]
struct Session {
    dir: String,
    windows: Vec<Window>,
}

impl Session {
    fn new(dir: &str, initial_window: &str) -> Self {
        Self {
            dir: dir.to_string(),
            windows: vec![Window {
                index: 0,
                name: initial_window.to_string(),
                dir: dir.to_string(),
            }],
        }
    }

    fn next_index(&self) -> usize {
        self.windows.iter().map(|w| w.index + 1).max().unwrap_or(0)
    }

    fn push_window(&mut self, name: &str, dir: &str) {
        let index = self.next_index();
        self.windows.push(Window {
            index,
            name: name.to_string(),
            dir: dir.to_string(),
        });
    }
}

fn descriptor_line(index: usize, name: &str) -> String {
    format!("{}: {} (1 panes) [80x24]", index, name)
}

/// Multiplexer state kept in memory
#[derive(Debug, Clone)]
pub struct MemoryMux {
    sessions: BTreeMap<String, Session>,
    initial_window: String,
    calls: Vec<MuxCall>,
    failing_sessions: HashSet<String>,
    failing_windows: HashSet<String>,
    listing_fails: bool,
}

impl MemoryMux {
    /// Create an empty multiplexer
    pub fn new() -> Self {
        Self {
            sessions: BTreeMap::new(),
            initial_window: DEFAULT_SHELL_NAME.to_string(),
            calls: Vec::new(),
            failing_sessions: HashSet::new(),
            failing_windows: HashSet::new(),
            listing_fails: false,
        }
    }

    /// Name given to the window every new session starts with
    pub fn with_initial_window(mut self, name: impl Into<String>) -> Self {
        self.initial_window = name.into();
        self
    }

    /// Seed a running session (not recorded as a call)
    pub fn with_session(mut self, name: &str, dir: &str) -> Self {
        self.sessions
            .insert(name.to_string(), Session::new(dir, &self.initial_window));
        self
    }

    /// Seed a window in a seeded session (not recorded as a call)
    pub fn with_window(mut self, session: &str, window: &str) -> Self {
        if let Some(s) = self.sessions.get_mut(session) {
            let dir = s.dir.clone();
            s.push_window(window, &dir);
        }
        self
    }

    /// Make creation of the named session fail
    pub fn failing_session(mut self, name: &str) -> Self {
        self.failing_sessions.insert(name.to_string());
        self
    }

    /// Make creation of windows with this name fail
    pub fn failing_window(mut self, name: &str) -> Self {
        self.failing_windows.insert(name.to_string());
        self
    }

    /// Make every `list_windows` call fail
    pub fn failing_listing(mut self) -> Self {
        self.listing_fails = true;
        self
    }

    /// All mutating calls received so far, in order
    pub fn calls(&self) -> &[MuxCall] {
        &self.calls
    }

    /// Number of session and window creation calls received
    pub fn creation_count(&self) -> usize {
        self.calls.iter().filter(|c| c.is_creation()).count()
    }

    /// Forget recorded calls, keeping state
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Names of running sessions
    pub fn session_names(&self) -> Vec<String> {
        self.sessions.keys().cloned().collect()
    }

    /// Start directory of a running session
    pub fn session_dir(&self, name: &str) -> Option<&str> {
        self.sessions.get(name).map(|s| s.dir.as_str())
    }

    /// Window names of a session, ordered by index
    pub fn window_names(&self, session: &str) -> Vec<String> {
        self.sessions
            .get(session)
            .map(|s| s.windows.iter().map(|w| w.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Start directory of a window, looked up by name
    pub fn window_dir(&self, session: &str, window: &str) -> Option<&str> {
        self.sessions
            .get(session)?
            .windows
            .iter()
            .find(|w| w.name == window)
            .map(|w| w.dir.as_str())
    }

    fn rejected(command: String, stderr: &str) -> MuxError {
        MuxError::CommandFailed {
            command,
            stderr: stderr.to_string(),
        }
    }
}

impl Default for MemoryMux {
    fn default() -> Self {
        Self::new()
    }
}

impl MuxControl for MemoryMux {
    type WindowLines = std::vec::IntoIter<String>;

    fn session_exists(&self, name: &str) -> bool {
        self.sessions.contains_key(name)
    }

    fn create_session(&mut self, name: &str, dir: &str) -> Result<(), MuxError> {
        self.calls.push(MuxCall::CreateSession {
            name: name.to_string(),
            dir: dir.to_string(),
        });

        if self.failing_sessions.contains(name) {
            return Err(Self::rejected(
                format!("new-session -s {}", name),
                "rejected by test",
            ));
        }
        if self.sessions.contains_key(name) {
            return Err(Self::rejected(
                format!("new-session -s {}", name),
                &format!("duplicate session: {}", name),
            ));
        }

        self.sessions
            .insert(name.to_string(), Session::new(dir, &self.initial_window));
        Ok(())
    }

    fn list_windows(&self, session: &str) -> Result<Self::WindowLines, MuxError> {
        if self.listing_fails {
            return Err(Self::rejected(
                format!("list-windows -t {}", session),
                "rejected by test",
            ));
        }

        let session = self
            .sessions
            .get(session)
            .ok_or_else(|| MuxError::SessionNotFound(session.to_string()))?;

        let lines: Vec<String> = session
            .windows
            .iter()
            .map(|w| descriptor_line(w.index, &w.name))
            .collect();
        Ok(lines.into_iter())
    }

    fn initial_window_line(&self) -> String {
        descriptor_line(0, &self.initial_window)
    }

    fn create_window(&mut self, session: &str, window: &str, dir: &str) -> Result<(), MuxError> {
        self.calls.push(MuxCall::CreateWindow {
            session: session.to_string(),
            window: window.to_string(),
            dir: dir.to_string(),
        });

        if self.failing_windows.contains(window) {
            return Err(Self::rejected(
                format!("new-window -n {} -t {}", window, session),
                "rejected by test",
            ));
        }

        let target = self
            .sessions
            .get_mut(session)
            .ok_or_else(|| MuxError::SessionNotFound(session.to_string()))?;
        target.push_window(window, dir);
        Ok(())
    }

    fn kill_window(&mut self, session: &str, window_id: &str) -> Result<(), MuxError> {
        self.calls.push(MuxCall::KillWindow {
            session: session.to_string(),
            window_id: window_id.to_string(),
        });

        if let Some(s) = self.sessions.get_mut(session) {
            // Targets resolve by index first, then by exact name
            let position = s
                .windows
                .iter()
                .position(|w| w.index.to_string() == window_id)
                .or_else(|| s.windows.iter().position(|w| w.name == window_id));
            if let Some(position) = position {
                s.windows.remove(position);
            }
            if s.windows.is_empty() {
                self.sessions.remove(session);
            }
        }
        Ok(())
    }
}
