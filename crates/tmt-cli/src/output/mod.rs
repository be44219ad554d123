//! Output formatting utilities for the CLI
//!
//! Colored status messages, the terminal reporter used during `apply`,
//! and the table printed by `plan`.

use tabled::{settings::Style, Table, Tabled};

use tmt_core::traits::ProvisionReporter;
use tmt_core::types::ProvisionEvent;
use tmt_provision::PlannedAction;

/// Format planned actions as an ASCII table
///
/// Returns "Nothing to do" when the multiplexer already matches the
/// configuration.
pub fn format_plan(actions: &[PlannedAction]) -> String {
    if actions.is_empty() {
        return "Nothing to do".to_string();
    }

    #[derive(Tabled)]
    struct PlanRow {
        #[tabled(rename = "ACTION")]
        action: String,
        #[tabled(rename = "TARGET")]
        target: String,
        #[tabled(rename = "DIRECTORY")]
        dir: String,
    }

    let rows: Vec<PlanRow> = actions
        .iter()
        .map(|a| PlanRow {
            action: a.verb().to_string(),
            target: a.target(),
            dir: a.dir().unwrap_or("-").to_string(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Prints provisioning events as they happen
///
/// Session lines are flush left, window lines are indented beneath the
/// session they belong to.
#[derive(Debug, Default)]
pub struct TerminalReporter;

impl ProvisionReporter for TerminalReporter {
    fn report(&mut self, event: ProvisionEvent) {
        let line = if event.is_window_event() {
            format!("  {}", event)
        } else {
            event.to_string()
        };

        match event {
            ProvisionEvent::SessionCreating { .. } | ProvisionEvent::WindowCreating { .. } => {
                print_success(&line)
            }
            ProvisionEvent::SessionRunning { .. } | ProvisionEvent::WindowExists { .. } => {
                print_unchanged(&line)
            }
            ProvisionEvent::WindowListUnavailable { .. } => print_warning(&line),
            ProvisionEvent::SessionCreateFailed { .. } | ProvisionEvent::WindowCreateFailed { .. } => {
                print_error(&line)
            }
        }
    }
}

/// Print a success message in green with a checkmark prefix
///
/// Outputs to stdout with green coloring for positive feedback to the user.
pub fn print_success(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stdout = std::io::stdout();
    let _ = crossterm::execute!(
        stdout,
        SetForegroundColor(Color::Green),
        Print("✓ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

/// Print a message about something left as it was, in grey
pub fn print_unchanged(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stdout = std::io::stdout();
    let _ = crossterm::execute!(
        stdout,
        SetForegroundColor(Color::DarkGrey),
        Print("= "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

/// Print an error message in red with an X prefix
///
/// Outputs to stderr with red coloring for error feedback to the user.
pub fn print_error(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stderr = std::io::stderr();
    let _ = crossterm::execute!(
        stderr,
        SetForegroundColor(Color::Red),
        Print("✗ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

/// Print a warning message in yellow with a warning symbol prefix
///
/// Outputs to stderr with yellow coloring for cautionary feedback to the user.
pub fn print_warning(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stderr = std::io::stderr();
    let _ = crossterm::execute!(
        stderr,
        SetForegroundColor(Color::Yellow),
        Print("⚠ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

/// Print an informational message in cyan with an info symbol prefix
pub fn print_info(msg: &str) {
    use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

    let mut stdout = std::io::stdout();
    let _ = crossterm::execute!(
        stdout,
        SetForegroundColor(Color::Cyan),
        Print("ℹ "),
        ResetColor,
        Print(msg),
        Print("\n")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_plan() {
        assert_eq!(format_plan(&[]), "Nothing to do");
    }

    #[test]
    fn test_plan_table_lists_every_action() {
        let table = format_plan(&[
            PlannedAction::CreateSession {
                session: "work".into(),
                dir: "/home/me".into(),
            },
            PlannedAction::KillInitialWindow {
                session: "work".into(),
            },
        ]);

        assert!(table.contains("ACTION"));
        assert!(table.contains("create session"));
        assert!(table.contains("/home/me"));
        assert!(table.contains("work:0"));
    }
}
