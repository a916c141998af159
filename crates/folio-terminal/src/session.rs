//! One terminal instance: transcript, input buffer, history recall,
//! navigation state, and the UI shell machine.
//!
//! The session is the single writer of its own state. Commands only
//! signal effects; the session applies them, appends the styled lines,
//! and owns the fuzzy error recovery for misses. Everything here is
//! synchronous with respect to the event that triggered it.

use folio_types::config::TerminalConfig;
use folio_types::error::FolioError;
use folio_types::input::KeyEvent;

use crate::fuzzy;
use crate::host::HostServices;
use crate::interpreter::{CommandOutput, CommandRegistry, Environment};
use crate::shell::ShellState;
use crate::timer::{Scheduler, TimerAction};
use crate::transcript::{LineKind, OutputLine, Transcript};

/// A terminal session. One per rendered terminal instance; state lives
/// in memory only and dies with the value.
pub struct Session {
    registry: CommandRegistry,
    config: TerminalConfig,
    transcript: Transcript,
    input_buffer: String,
    input_history: Vec<String>,
    history_cursor: Option<usize>,
    current_section: String,
    shell: ShellState,
    scheduler: Scheduler,
    scroll_pending: bool,
    focus_pending: bool,
}

impl Session {
    /// Create a session seeded with the welcome banner.
    pub fn new(config: TerminalConfig, registry: CommandRegistry) -> Self {
        let current_section = config.initial_section().to_string();
        let mut transcript = Transcript::new();
        transcript.push(LineKind::Success, "Welcome to my portfolio!");
        transcript.push(
            LineKind::Info,
            "Type \"help\" to see all available commands.",
        );
        Self {
            registry,
            config,
            transcript,
            input_buffer: String::new(),
            input_history: Vec::new(),
            history_cursor: None,
            current_section,
            shell: ShellState::default(),
            scheduler: Scheduler::new(),
            scroll_pending: false,
            focus_pending: false,
        }
    }

    // -- Accessors --

    pub fn transcript(&self) -> &[OutputLine] {
        self.transcript.lines()
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn input_history(&self) -> &[String] {
        &self.input_history
    }

    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    pub fn is_expanded(&self) -> bool {
        self.shell.is_expanded()
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// True once per batch of transcript appends; the host drains this
    /// to scroll its output view to the bottom on the next render tick.
    pub fn take_pending_scroll(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }

    /// True after the post-expand focus timer fires; the host drains
    /// this to focus its input field.
    pub fn take_pending_focus(&mut self) -> bool {
        std::mem::take(&mut self.focus_pending)
    }

    // -- Input pipeline --

    /// Handle one key event while the terminal has focus.
    pub fn handle_key(&mut self, key: KeyEvent, host: &mut dyn HostServices) {
        match key {
            KeyEvent::Char(ch) => self.input_buffer.push(ch),
            KeyEvent::Backspace => {
                self.input_buffer.pop();
            },
            KeyEvent::Enter => {
                let line = std::mem::take(&mut self.input_buffer);
                self.submit(&line, host);
            },
            KeyEvent::ArrowUp => self.recall_prev(),
            KeyEvent::ArrowDown => self.recall_next(),
            KeyEvent::Tab => self.autocomplete(),
            KeyEvent::Escape => {
                self.collapse();
            },
        }
    }

    /// Execute one submitted line.
    ///
    /// Empty (after trimming) input is a complete no-op: no echo, no
    /// history entry. Otherwise exactly one command-echo line precedes
    /// all other output for this submission.
    pub fn submit(&mut self, raw: &str, host: &mut dyn HostServices) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }

        self.push_line(
            LineKind::CommandEcho,
            format!("{} {trimmed}", self.config.prompt),
        );

        // Every submission is recallable, failed commands included.
        self.input_history.push(trimmed.to_string());
        if self.input_history.len() > self.config.max_history {
            self.input_history.remove(0);
        }
        self.history_cursor = None;

        let result = {
            let env = Environment {
                sections: &self.config.sections,
                current_section: &self.current_section,
                profile: &self.config.profile,
            };
            self.registry.execute(trimmed, &env)
        };

        match result {
            Ok(output) => self.apply_output(output, host),
            Err(err) => self.recover(err),
        }
    }

    fn apply_output(&mut self, output: CommandOutput, host: &mut dyn HostServices) {
        match output {
            CommandOutput::Text(text) => {
                for line in text.lines() {
                    self.push_line(LineKind::Info, line.to_string());
                }
            },
            CommandOutput::Report(lines) => {
                for (kind, text) in lines {
                    self.push_line(kind, text);
                }
            },
            CommandOutput::None => {},
            CommandOutput::Clear => {
                self.transcript.clear();
            },
            CommandOutput::Navigate { section } => {
                host.scroll_to_section(&section, self.config.header_offset);
                log::info!("navigated to section '{section}'");
                self.push_line(LineKind::Success, format!("Navigated to {section}"));
                self.current_section = section;
                self.schedule_collapse();
            },
            CommandOutput::OpenUrl { url } => {
                self.push_line(LineKind::Success, format!("Opening {url}"));
                host.open_url(&url);
                self.schedule_collapse();
            },
            CommandOutput::OpenMail { address } => {
                self.push_line(LineKind::Success, "Opening email client...");
                host.open_mail(&address);
                self.schedule_collapse();
            },
            CommandOutput::ShowResume => {
                self.push_line(LineKind::Success, "Opening resume preview...");
                host.show_resume();
                self.schedule_collapse();
            },
            CommandOutput::OpenGame => {
                self.push_line(LineKind::Success, "Opening the game hub...");
                host.open_game();
                self.schedule_collapse();
            },
        }
    }

    /// Turn a command failure into transcript lines. Never fatal.
    fn recover(&mut self, err: FolioError) {
        match err {
            FolioError::MissingArgument { what, usage } => {
                self.push_line(LineKind::Error, format!("Error: missing {what}"));
                self.push_line(LineKind::Warning, format!("Usage: {usage}"));
            },
            FolioError::UnknownSection(name) => {
                self.push_line(LineKind::Error, format!("Section \"{name}\" not found"));
                let candidates = self.config.sections.iter().map(|s| s.as_str());
                match fuzzy::closest(&name, candidates) {
                    Some(section) => {
                        let hint = format!("Did you mean \"cd {section}\"?");
                        self.push_line(LineKind::Warning, hint);
                    },
                    None => {
                        let listing =
                            format!("Available sections: {}", self.config.sections.join(", "));
                        self.push_line(LineKind::Warning, listing);
                        self.push_line(LineKind::Warning, "Try \"ls\" to see all sections");
                    },
                }
            },
            FolioError::UnknownCommand(name) => self.recover_unknown_command(&name),
            other => {
                self.push_line(LineKind::Error, format!("Error: {other}"));
            },
        }
    }

    /// Recovery chain for an unrecognized first token:
    /// exact section id, then closest command, then closest section,
    /// then a generic not-found hint.
    fn recover_unknown_command(&mut self, name: &str) {
        if self.config.sections.iter().any(|s| s == name) {
            // Bare section names are an implied navigation shortcut.
            self.push_line(LineKind::Warning, format!("Did you mean \"cd {name}\"?"));
            return;
        }

        let suggestion = fuzzy::closest(name, self.registry.names())
            .map(|cmd| format!("Did you mean \"{cmd}\"?"))
            .or_else(|| {
                let sections = self.config.sections.iter().map(|s| s.as_str());
                fuzzy::closest(name, sections).map(|s| format!("Did you mean \"cd {s}\"?"))
            });

        self.push_line(LineKind::Error, format!("Command not found: {name}"));
        match suggestion {
            Some(hint) => self.push_line(LineKind::Warning, hint),
            None => self.push_line(
                LineKind::Warning,
                "Type \"help\" to see available commands",
            ),
        }
    }

    fn push_line(&mut self, kind: LineKind, text: impl Into<String>) {
        self.transcript.push(kind, text);
        self.scroll_pending = true;
    }

    // -- History recall --

    /// ArrowUp: step toward older entries, clamped at the oldest.
    fn recall_prev(&mut self) {
        if self.input_history.is_empty() {
            return;
        }
        let index = match self.history_cursor {
            None => self.input_history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_cursor = Some(index);
        self.input_buffer = self.input_history[index].clone();
    }

    /// ArrowDown: step toward newer entries; past the newest, clear
    /// the buffer and drop the cursor.
    fn recall_next(&mut self) {
        let Some(index) = self.history_cursor else {
            return;
        };
        let next = index + 1;
        if next >= self.input_history.len() {
            self.history_cursor = None;
            self.input_buffer.clear();
        } else {
            self.history_cursor = Some(next);
            self.input_buffer = self.input_history[next].clone();
        }
    }

    // -- Autocomplete --

    /// Tab: complete a unique command-name prefix, or a unique section
    /// prefix after `cd `. Ambiguous or zero matches are a silent
    /// no-op.
    fn autocomplete(&mut self) {
        let buf = self.input_buffer.trim().to_lowercase();
        if buf.is_empty() {
            return;
        }

        let names = self.registry.names();
        let matches: Vec<&str> = names
            .iter()
            .copied()
            .filter(|n| n.starts_with(&buf))
            .collect();
        if let [only] = matches.as_slice() {
            self.input_buffer = format!("{only} ");
            return;
        }

        if let Some(partial) = buf.strip_prefix("cd ") {
            let partial = partial.trim_start();
            let matches: Vec<&String> = self
                .config
                .sections
                .iter()
                .filter(|s| s.starts_with(partial))
                .collect();
            if let [only] = matches.as_slice() {
                self.input_buffer = format!("cd {only}");
            }
        }
    }

    // -- Shell state --

    /// Expand the terminal (click or global shortcut). Schedules the
    /// deferred input-focus request.
    pub fn expand(&mut self) {
        if self.shell.expand() {
            self.scheduler
                .schedule(TimerAction::FocusInput, self.config.focus_delay_ms);
        }
    }

    /// Collapse the terminal. Transcript and history are kept.
    pub fn collapse(&mut self) {
        self.shell.collapse();
    }

    /// Global shortcut: flip between expanded and collapsed.
    pub fn toggle(&mut self) {
        if self.shell.is_expanded() {
            self.collapse();
        } else {
            self.expand();
        }
    }

    fn schedule_collapse(&mut self) {
        self.scheduler
            .schedule(TimerAction::Collapse, self.config.auto_collapse_ms);
    }

    /// Advance the session's timers by `dt_ms` and apply whatever came
    /// due. Called by the host from its render loop.
    pub fn tick(&mut self, dt_ms: u32) {
        for action in self.scheduler.tick(dt_ms) {
            match action {
                TimerAction::Collapse => {
                    self.shell.collapse();
                },
                TimerAction::FocusInput => {
                    self.focus_pending = true;
                },
            }
        }
    }

    /// Cancel every pending timer. Dropping the session has the same
    /// effect; this exists for hosts that keep the session alive but
    /// want no further deferred mutations.
    pub fn shutdown(&mut self) {
        self.scheduler.clear();
    }
}
