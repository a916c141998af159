//! Error types for the folio terminal.
//!
//! Every variant here is recoverable: the session renders it into
//! transcript lines and keeps accepting input. Nothing in the terminal
//! has a fatal error path.

use std::io;

/// Errors produced by the folio terminal engine.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// A command was invoked without a required argument.
    #[error("missing {what}")]
    MissingArgument {
        /// What was missing (e.g. "section name").
        what: String,
        /// Example invocation shown as a usage hint.
        usage: String,
    },

    /// The first token of the input matched no registered command.
    #[error("command not found: {0}")]
    UnknownCommand(String),

    /// `cd` was given a target that is not a known section id.
    #[error("section \"{0}\" not found")]
    UnknownSection(String),

    /// Generic command failure.
    #[error("command error: {0}")]
    Command(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_display() {
        let e = FolioError::MissingArgument {
            what: "section name".into(),
            usage: "cd <section>".into(),
        };
        assert_eq!(format!("{e}"), "missing section name");
    }

    #[test]
    fn unknown_command_display() {
        let e = FolioError::UnknownCommand("halp".into());
        assert_eq!(format!("{e}"), "command not found: halp");
    }

    #[test]
    fn unknown_section_display() {
        let e = FolioError::UnknownSection("projcts".into());
        assert_eq!(format!("{e}"), "section \"projcts\" not found");
    }

    #[test]
    fn command_error_display() {
        let e = FolioError::Command("boom".into());
        assert_eq!(format!("{e}"), "command error: boom");
    }

    #[test]
    fn config_error_display() {
        let e = FolioError::Config("missing key".into());
        assert_eq!(format!("{e}"), "config error: missing key");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: FolioError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: FolioError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: FolioError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn error_is_debug() {
        let e = FolioError::UnknownSection("x".into());
        assert!(format!("{e:?}").contains("UnknownSection"));
    }

    #[test]
    fn result_alias_ok() {
        let r: Result<i32> = Ok(42);
        assert_eq!(r.unwrap(), 42);
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(FolioError::Command("oops".into()));
        assert!(r.is_err());
    }
}
