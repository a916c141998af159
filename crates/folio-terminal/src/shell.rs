//! Expanded/collapsed state for the terminal UI shell.
//!
//! `Collapsed` is both the initial state and re-enterable at any time:
//! explicit close, Escape, backdrop dismissal, and the auto-collapse
//! timer all funnel through [`ShellState::collapse`]. No state is
//! unrecoverable; transcript and history live in the session and
//! survive collapse/expand cycles.

/// Whether the terminal UI is in its focused/interactive state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellState {
    #[default]
    Collapsed,
    Expanded,
}

impl ShellState {
    pub fn is_expanded(self) -> bool {
        self == ShellState::Expanded
    }

    /// Enter the expanded state. Returns true if the state changed.
    pub fn expand(&mut self) -> bool {
        let changed = *self == ShellState::Collapsed;
        *self = ShellState::Expanded;
        changed
    }

    /// Enter the collapsed state. Returns true if the state changed.
    pub fn collapse(&mut self) -> bool {
        let changed = *self == ShellState::Expanded;
        *self = ShellState::Collapsed;
        changed
    }

    /// Flip between the two states (global keyboard shortcut).
    pub fn toggle(&mut self) {
        *self = match *self {
            ShellState::Collapsed => ShellState::Expanded,
            ShellState::Expanded => ShellState::Collapsed,
        };
    }
}
