//! Terminal session engine for the folio portfolio site.
//!
//! The terminal is a registry-based dispatch system. Commands implement
//! the `Command` trait and are registered by name. The session parses
//! input lines, resolves the command name (falling back to fuzzy
//! matching on a miss), dispatches `execute()`, and folds the result
//! into an append-only transcript of styled lines.

mod commands;
mod fuzzy;
pub mod host;
mod interpreter;
mod session;
mod shell;
pub mod test_utils;
mod timer;
mod transcript;

/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// Levenshtein edit distance and candidate selection.
pub use fuzzy::{closest, levenshtein};
/// Side-effect collaborator interface provided by the host page.
pub use host::HostServices;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, styled lines, signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Read-only environment passed to every command.
pub use interpreter::Environment;
/// One terminal instance: transcript, history, navigation state.
pub use session::Session;
/// Expanded/collapsed UI shell state machine.
pub use shell::ShellState;
/// One-shot timer scheduler and its actions.
pub use timer::{Scheduler, TimerAction};
/// Transcript line types.
pub use transcript::{LineKind, OutputLine, Transcript};
