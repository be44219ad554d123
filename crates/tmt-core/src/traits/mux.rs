//! Multiplexer control trait

use crate::error::MuxError;

/// Control surface of a terminal multiplexer
///
/// Every call blocks until the multiplexer has answered. Implementations
/// may shell out to a binary, talk to a control socket, or keep state in
/// memory.
pub trait MuxControl {
    /// Descriptor lines produced by [`MuxControl::list_windows`]
    type WindowLines: Iterator<Item = String>;

    /// Check whether a session is running
    ///
    /// Must not have side effects. Any failure to answer is reported as
    /// `false`.
    fn session_exists(&self, name: &str) -> bool;

    /// Create a detached session rooted at `dir`
    fn create_session(&mut self, name: &str, dir: &str) -> Result<(), MuxError>;

    /// List the windows of a session, one descriptor line per window
    ///
    /// Lines are produced lazily; callers may stop early.
    fn list_windows(&self, session: &str) -> Result<Self::WindowLines, MuxError>;

    /// Descriptor line expected for the initial window of a new session
    ///
    /// Stands in for the listing of a session that does not exist yet, so
    /// a plan matches window names the same way a run will.
    fn initial_window_line(&self) -> String;

    /// Create a named window in an existing session
    fn create_window(&mut self, session: &str, window: &str, dir: &str) -> Result<(), MuxError>;

    /// Remove the window `session:window_id`
    ///
    /// Removing a window that is already gone is not an error.
    fn kill_window(&mut self, session: &str, window_id: &str) -> Result<(), MuxError>;
}

impl<M: MuxControl + ?Sized> MuxControl for &mut M {
    type WindowLines = M::WindowLines;

    fn session_exists(&self, name: &str) -> bool {
        (**self).session_exists(name)
    }

    fn create_session(&mut self, name: &str, dir: &str) -> Result<(), MuxError> {
        (**self).create_session(name, dir)
    }

    fn list_windows(&self, session: &str) -> Result<Self::WindowLines, MuxError> {
        (**self).list_windows(session)
    }

    fn initial_window_line(&self) -> String {
        (**self).initial_window_line()
    }

    fn create_window(&mut self, session: &str, window: &str, dir: &str) -> Result<(), MuxError> {
        (**self).create_window(session, window, dir)
    }

    fn kill_window(&mut self, session: &str, window_id: &str) -> Result<(), MuxError> {
        (**self).kill_window(session, window_id)
    }
}
