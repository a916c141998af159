//! Terminal configuration.
//!
//! Loaded from a TOML file by the host, or built from `Default` which
//! carries the canonical portfolio values. Every field has a serde
//! default so a partial config file only overrides what it names.

use serde::Deserialize;

use crate::error::Result;

/// External profile targets for the social/contact commands.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfileLinks {
    /// Opened in a new tab by `github`.
    pub github_url: String,
    /// Opened in a new tab by `linkedin`.
    pub linkedin_url: String,
    /// Handed to the mail client by `email`.
    pub email: String,
}

impl Default for ProfileLinks {
    fn default() -> Self {
        Self {
            github_url: "https://github.com/HakkanShah".to_string(),
            linkedin_url: "https://www.linkedin.com/in/hakkan".to_string(),
            email: "hakkanparbej@gmail.com".to_string(),
        }
    }
}

/// Configuration for one terminal instance.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt marker prefixed to echoed commands.
    pub prompt: String,
    /// Scroll offset so a navigated section is not hidden under the
    /// host page's fixed header, in pixels.
    pub header_offset: i32,
    /// Delay before the terminal auto-collapses after navigation and
    /// link-opening commands, in milliseconds.
    pub auto_collapse_ms: u32,
    /// Delay before the input field is focused after expanding, in
    /// milliseconds.
    pub focus_delay_ms: u32,
    /// Maximum retained input-history entries.
    pub max_history: usize,
    /// Navigable section ids, in display order. The first entry is the
    /// initial current section.
    pub sections: Vec<String>,
    /// Social/contact targets.
    pub profile: ProfileLinks,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "$".to_string(),
            header_offset: 100,
            auto_collapse_ms: 1000,
            focus_delay_ms: 100,
            max_history: 100,
            sections: [
                "home",
                "about",
                "skills",
                "projects",
                "experience",
                "education",
                "certifications",
                "contact",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            profile: ProfileLinks::default(),
        }
    }
}

impl TerminalConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(text)?;
        log::debug!(
            "parsed terminal config: {} sections, prompt '{}'",
            cfg.sections.len(),
            cfg.prompt
        );
        Ok(cfg)
    }

    /// The initial current section (first configured section, or
    /// "home" if the section list is empty).
    pub fn initial_section(&self) -> &str {
        self.sections.first().map_or("home", |s| s.as_str())
    }
}
