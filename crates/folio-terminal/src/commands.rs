//! Built-in commands for the folio terminal.

use folio_types::error::{FolioError, Result};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::transcript::LineKind;

/// Register all built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(SectionsCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(ResumeCmd));
    reg.register(Box::new(GithubCmd));
    reg.register(Box::new(LinkedinCmd));
    reg.register(Box::new(EmailCmd));
    reg.register(Box::new(GameCmd));
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Navigate to a section"
    }
    fn usage(&self) -> &str {
        "cd <section>"
    }
    fn category(&self) -> &str {
        "navigation"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let Some(&target) = args.first() else {
            return Err(FolioError::MissingArgument {
                what: "section name".to_string(),
                usage: "cd <section>".to_string(),
            });
        };
        if env.sections.iter().any(|s| s == target) {
            Ok(CommandOutput::Navigate {
                section: target.to_string(),
            })
        } else {
            Err(FolioError::UnknownSection(target.to_string()))
        }
    }
}

// ---------------------------------------------------------------------------
// ls / sections
// ---------------------------------------------------------------------------

/// Shared body of `ls` and its `sections` alias.
fn list_sections(env: &Environment<'_>) -> CommandOutput {
    let mut lines = vec![(LineKind::Info, "Available sections:".to_string())];
    for section in env.sections {
        let marker = if section == env.current_section {
            '*'
        } else {
            ' '
        };
        lines.push((LineKind::Info, format!("  {marker} {section}")));
    }
    lines.push((
        LineKind::Info,
        "Use \"cd <section>\" to navigate".to_string(),
    ));
    CommandOutput::Report(lines)
}

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List all available sections"
    }
    fn usage(&self) -> &str {
        "ls"
    }
    fn category(&self) -> &str {
        "navigation"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(list_sections(env))
    }
}

struct SectionsCmd;
impl Command for SectionsCmd {
    fn name(&self) -> &str {
        "sections"
    }
    fn description(&self) -> &str {
        "List all available sections (alias for ls)"
    }
    fn usage(&self) -> &str {
        "sections"
    }
    fn category(&self) -> &str {
        "navigation"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(list_sections(env))
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Show current section"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn category(&self) -> &str {
        "navigation"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(format!(
            "Current section: {}",
            env.current_section
        )))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear terminal history"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display information about the portfolio owner"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Report(vec![
            (
                LineKind::Info,
                "Full-stack developer building modern web apps".to_string(),
            ),
            (
                LineKind::Info,
                "Into architecture planning, API design, and smooth UX".to_string(),
            ),
            (
                LineKind::Info,
                "Want to connect? Try \"cd contact\"".to_string(),
            ),
        ]))
    }
}

// ---------------------------------------------------------------------------
// resume
// ---------------------------------------------------------------------------

struct ResumeCmd;
impl Command for ResumeCmd {
    fn name(&self) -> &str {
        "resume"
    }
    fn description(&self) -> &str {
        "Open resume preview"
    }
    fn usage(&self) -> &str {
        "resume"
    }
    fn category(&self) -> &str {
        "social"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::ShowResume)
    }
}

// ---------------------------------------------------------------------------
// github / linkedin / email
// ---------------------------------------------------------------------------

struct GithubCmd;
impl Command for GithubCmd {
    fn name(&self) -> &str {
        "github"
    }
    fn description(&self) -> &str {
        "Open GitHub profile"
    }
    fn usage(&self) -> &str {
        "github"
    }
    fn category(&self) -> &str {
        "social"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::OpenUrl {
            url: env.profile.github_url.clone(),
        })
    }
}

struct LinkedinCmd;
impl Command for LinkedinCmd {
    fn name(&self) -> &str {
        "linkedin"
    }
    fn description(&self) -> &str {
        "Open LinkedIn profile"
    }
    fn usage(&self) -> &str {
        "linkedin"
    }
    fn category(&self) -> &str {
        "social"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::OpenUrl {
            url: env.profile.linkedin_url.clone(),
        })
    }
}

struct EmailCmd;
impl Command for EmailCmd {
    fn name(&self) -> &str {
        "email"
    }
    fn description(&self) -> &str {
        "Send an email"
    }
    fn usage(&self) -> &str {
        "email"
    }
    fn category(&self) -> &str {
        "social"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::OpenMail {
            address: env.profile.email.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// game
// ---------------------------------------------------------------------------

struct GameCmd;
impl Command for GameCmd {
    fn name(&self) -> &str {
        "game"
    }
    fn description(&self) -> &str {
        "Open the game hub"
    }
    fn usage(&self) -> &str {
        "game"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::OpenGame)
    }
}
