// Primer error types
//
// Everything that can go wrong before the UI is up: reading and parsing the
// config file, and resolving concept keys given on the command line.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced to the user as diagnostics.
#[derive(Debug, Error, Diagnostic)]
pub enum PrimerError {
    #[error("failed to read config file: {path}")]
    #[diagnostic(
        code(primer::config::read),
        help("Check that the file exists and is readable, or drop --config to use the defaults.")
    )]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigParse(#[from] kdl::KdlError),

    #[error("invalid value for `{key}`: {reason}")]
    #[diagnostic(code(primer::config::invalid_setting))]
    InvalidSetting { key: String, reason: String },

    #[error("unknown concept: \"{key}\"")]
    #[diagnostic(
        code(primer::catalog::unknown_concept),
        help("Valid concepts are: {valid}")
    )]
    UnknownConcept { key: String, valid: String },
}

impl PrimerError {
    pub fn invalid_setting(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for configuration and catalog lookups
pub type PrimerResult<T> = Result<T, PrimerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PrimerError::invalid_setting("frame_rate", "must be between 1 and 120");
        assert_eq!(
            err.to_string(),
            "invalid value for `frame_rate`: must be between 1 and 120"
        );

        let err = PrimerError::UnknownConcept {
            key: "robots".to_string(),
            valid: "ai, input".to_string(),
        };
        assert!(err.to_string().contains("robots"));
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = PrimerError::invalid_setting("color", "expected a boolean");
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("primer::config::invalid_setting"));
    }
}
