//! Streaming reader over `tmux list-windows` output

use std::io::{BufRead, BufReader, Lines};
use std::process::{Child, ChildStdout};

/// Window descriptor lines read from a running `tmux list-windows`
///
/// Lines are read as tmux writes them. Dropping the iterator early kills
/// and reaps the child process.
pub struct WindowLines {
    child: Option<Child>,
    lines: Option<Lines<BufReader<ChildStdout>>>,
}

impl WindowLines {
    pub(crate) fn new(mut child: Child) -> Self {
        let lines = child.stdout.take().map(|out| BufReader::new(out).lines());
        Self {
            child: Some(child),
            lines,
        }
    }

    /// Reap the child once output is exhausted
    fn finish(&mut self) {
        self.lines = None;
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.wait() {
                tracing::debug!("Failed to wait for tmux list-windows: {}", e);
            }
        }
    }
}

impl Iterator for WindowLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.lines.as_mut()?.next() {
            Some(Ok(line)) => Some(line),
            Some(Err(e)) => {
                tracing::debug!("Stopped reading window list: {}", e);
                self.finish();
                None
            }
            None => {
                self.finish();
                None
            }
        }
    }
}

impl Drop for WindowLines {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            self.lines = None;
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::process::{Command, Stdio};

    fn spawn_printf(text: &str) -> Child {
        Command::new("printf")
            .arg(text)
            .stdout(Stdio::piped())
            .spawn()
            .unwrap()
    }

    #[test]
    fn test_reads_all_lines() {
        let lines: Vec<String> = WindowLines::new(spawn_printf("0: bash\n1: editor\n")).collect();
        assert_eq!(lines, vec!["0: bash", "1: editor"]);
    }

    #[test]
    fn test_early_drop_reaps_child() {
        let mut lines = WindowLines::new(spawn_printf("0: bash\n1: editor\n"));
        assert_eq!(lines.next().as_deref(), Some("0: bash"));
        drop(lines);
    }

    #[test]
    fn test_exhausted_iterator_stays_empty() {
        let mut lines = WindowLines::new(spawn_printf(""));
        assert!(lines.next().is_none());
        assert!(lines.next().is_none());
    }
}
