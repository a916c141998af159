//! Command trait, registry, and dispatch logic.
//!
//! Commands are looked up case-insensitively by their first token.
//! `help` is intercepted by the registry itself because individual
//! commands cannot see the registry they live in.

use std::collections::HashMap;

use folio_types::config::ProfileLinks;
use folio_types::error::{FolioError, Result};

use crate::transcript::LineKind;

/// Output produced by a command.
///
/// Side-effect variants are signals: the command declares the effect
/// and the session applies it, so the session stays the single writer
/// of navigation state and the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain informational text (may span multiple lines).
    Text(String),
    /// Styled lines, used by commands whose output mixes kinds.
    Report(Vec<(LineKind, String)>),
    /// Command produced no visible output.
    None,
    /// Signal to empty the transcript.
    Clear,
    /// Signal to scroll the host page to a section.
    Navigate { section: String },
    /// Signal to open a web URL in a new tab.
    OpenUrl { url: String },
    /// Signal to hand an address to the mail client.
    OpenMail { address: String },
    /// Signal to show the resume preview.
    ShowResume,
    /// Signal to mount the game surface, maximized.
    OpenGame,
}

/// Read-only environment passed to every command.
pub struct Environment<'a> {
    /// Navigable section ids, in display order.
    pub sections: &'a [String],
    /// The section the page is currently scrolled to.
    pub current_section: &'a str,
    /// Social/contact targets for the link commands.
    pub profile: &'a ProfileLinks,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "cd \<section\>").
    fn usage(&self) -> &str;

    /// Command category for grouping in `help` output.
    fn category(&self) -> &str {
        "utility"
    }

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput>;
}

/// Fixed display order of help categories.
const CATEGORY_ORDER: [&str; 4] = ["navigation", "social", "utility", "fun"];

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same
    /// name. Names are stored lowercased.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_ascii_lowercase(), cmd);
    }

    /// All registered command names, sorted. Used for autocompletion
    /// and as fuzzy-match candidates.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|k| k.as_str()).collect();
        names.push("help");
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Whether `name` resolves to a command (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        let lower = name.to_ascii_lowercase();
        lower == "help" || self.commands.contains_key(&lower)
    }

    /// Parse and execute a command line.
    ///
    /// The line is case-folded before tokenizing, matching the page's
    /// behavior: `CD PROJECTS` navigates the same as `cd projects`.
    pub fn execute(&self, line: &str, env: &Environment<'_>) -> Result<CommandOutput> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(CommandOutput::None);
        }

        let lowered = trimmed.to_lowercase();
        let mut tokens = lowered.split_whitespace();
        let name = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();

        if name == "help" {
            return self.execute_help(&args);
        }

        match self.commands.get(name) {
            Some(cmd) => {
                log::debug!("dispatching '{name}' with {} args", args.len());
                cmd.execute(&args, env)
            },
            None => Err(FolioError::UnknownCommand(name.to_string())),
        }
    }

    /// Built-in help with access to the registry.
    ///
    /// `help` lists everything grouped by category; `help <command>`
    /// shows one command's description and usage.
    fn execute_help(&self, args: &[&str]) -> Result<CommandOutput> {
        if let Some(&name) = args.first() {
            return match self.commands.get(name) {
                Some(cmd) => Ok(CommandOutput::Report(vec![
                    (
                        LineKind::Info,
                        format!("{} ({})", cmd.name(), cmd.category()),
                    ),
                    (LineKind::Info, format!("  {}", cmd.description())),
                    (LineKind::Info, format!("  Usage: {}", cmd.usage())),
                ])),
                None => Err(FolioError::UnknownCommand(name.to_string())),
            };
        }

        let mut by_category: HashMap<&str, Vec<(&str, &str, &str)>> = HashMap::new();
        for cmd in self.commands.values() {
            by_category.entry(cmd.category()).or_default().push((
                cmd.name(),
                cmd.usage(),
                cmd.description(),
            ));
        }
        by_category.entry("utility").or_default().push((
            "help",
            "help",
            "Show this help message",
        ));

        let mut lines = vec![(LineKind::Info, "Available commands:".to_string())];
        for cat in CATEGORY_ORDER {
            let Some(cmds) = by_category.get_mut(cat) else {
                continue;
            };
            cmds.sort_by_key(|(name, _, _)| *name);
            lines.push((LineKind::Success, format!("[{cat}]")));
            for (_, usage, desc) in cmds.iter() {
                lines.push((LineKind::Info, format!("  {usage:<16} {desc}")));
            }
        }
        lines.push((
            LineKind::Warning,
            "Tip: Tab auto-completes, Up/Down recall history".to_string(),
        ));
        Ok(CommandOutput::Report(lines))
    }
}
