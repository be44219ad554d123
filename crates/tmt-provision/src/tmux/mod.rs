//! tmux control through the `tmux` command line client

mod control;
mod lines;

pub use control::{TmuxControl, DEFAULT_SHELL_NAME, DEFAULT_TMUX_PROGRAM};
pub use lines::WindowLines;
