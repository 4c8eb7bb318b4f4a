//! Miette-based error diagnostics for CLI error presentation.
//!
//! Provides rich error types with source code context, labels, and help
//! suggestions for improved user experience when errors occur.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError as AppConfigError, Error};

/// Configuration error with source location context.
///
/// Displays the configuration file content with a labeled span pointing
/// to the problematic location, along with an optional help message.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(alternates::config))]
pub struct ConfigError {
    /// Human-readable error message.
    pub message: String,

    /// Source content (typically the configuration file).
    #[source_code]
    pub src: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigError {
    /// Create a new configuration error with source location.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Error from a grouping command.
///
/// Storage failures are shown with the end-user message and the underlying
/// cause as help, so the operator sees both.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(alternates::command))]
pub struct CommandError {
    /// Human-readable error message.
    pub message: String,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl CommandError {
    /// Create a new command error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
        }
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Convert an application error into a rendered diagnostic.
///
/// `config_toml` is the text the command parsed, used to point at TOML
/// syntax errors.
#[must_use]
pub fn report(error: Error, config_toml: Option<&str>) -> miette::Report {
    match error {
        Error::Config(AppConfigError::Parse(parse)) => {
            let message = parse.message().to_string();
            match (config_toml, parse.span()) {
                (Some(src), Some(span)) => ConfigError::new(
                    format!("invalid configuration: {message}"),
                    src,
                    span.start,
                    span.end.saturating_sub(span.start),
                )
                .with_help("run `alternates config init` to write a documented template")
                .into(),
                _ => CommandError::new(format!("invalid configuration: {message}")).into(),
            }
        }
        Error::Config(other) => CommandError::new(other.to_string())
            .with_help("run `alternates config validate` to check the file")
            .into(),
        Error::Storage(cause) => {
            let message = Error::Storage(cause.clone()).user_message();
            CommandError::new(message).with_help(cause).into()
        }
        Error::NotFound { entity, .. } if entity == "group" => CommandError::new(error.to_string())
            .with_help("run `alternates groups` to list existing groups")
            .into(),
        other => CommandError::new(other.to_string()).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_show_user_message() {
        let report = report(Error::Storage("database is locked".to_string()), None);
        assert_eq!(report.to_string(), "could not update alternatives, try again");
        assert_eq!(
            report.help().map(|h| h.to_string()).as_deref(),
            Some("database is locked")
        );
    }

    #[test]
    fn toml_errors_point_into_source() {
        let src = "database = ";
        let parse = toml::from_str::<toml::Value>(src).unwrap_err();
        let report = report(Error::Config(AppConfigError::Parse(parse)), Some(src));
        assert!(report.to_string().starts_with("invalid configuration"));
        assert!(report.labels().is_some());
    }

    #[test]
    fn invalid_operations_pass_through() {
        let report = report(Error::InvalidOperation("nope".to_string()), None);
        assert_eq!(report.to_string(), "invalid operation: nope");
    }
}
