//! Comprehensive error handling for Plane CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::path::PathBuf;
use std::{error::Error, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use plane_core::error::PlaneError;

// Re-export so callers only need `use crate::error::*`.
pub use plane_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// The compose file is already present and `--overwrite` was not given.
    #[error("Compose file already exists at {path}")]
    ComposeFileExists { path: PathBuf },

    /// `plane publish` was asked for a part it does not know.
    ///
    /// Validated eagerly for the whole part list — no part is processed when
    /// any name is unrecognized.
    #[error("Unknown part '{part}'")]
    UnknownPart { part: String },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `plane-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error without touching core internals.
    #[error("{0}")]
    Core(#[from] PlaneError),

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ComposeFileExists { path } => vec![
                format!("'{}' is already present", path.display()),
                "Pass --overwrite to replace it".into(),
                format!("Or remove it first: rm {}", path.display()),
            ],

            Self::UnknownPart { part } => vec![
                format!("'{part}' is not a publishable part"),
                "Available parts:".into(),
                "  \u{2022} bin     - the Plane executable".into(),
                "  \u{2022} docker  - the docker runtime files".into(),
                "Example: plane publish --parts bin,docker".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Check your config file, or pass --config <FILE>".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Error                         | Code |
    /// |-------------------------------|------|
    /// | Unknown publish part          |  2   |
    /// | Everything else               |  1   |
    ///
    /// Argument-parse failures also exit 2, handled by clap in `main`.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownPart { .. } => 2,
            _ => 1,
        }
    }

    /// Render the error with ANSI colors for terminal display.
    pub fn format_colored(&self) -> String {
        self.render(true)
    }

    /// Render the error without ANSI codes (stderr is not a TTY).
    pub fn format_plain(&self) -> String {
        self.render(false)
    }

    fn render(&self, colored: bool) -> String {
        let mut out = String::new();

        if colored {
            let _ = write!(out, "\n{} {}\n\n", "✗".red().bold(), "Error:".red().bold());
            let _ = writeln!(out, "  {}", self.to_string().red());
        } else {
            let _ = writeln!(out, "\nError: {self}");
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            if colored {
                let _ = write!(out, "\n{}\n", "Suggestions:".yellow().bold());
            } else {
                out.push_str("\nSuggestions:\n");
            }
            for suggestion in suggestions {
                let _ = writeln!(out, "  {suggestion}");
            }
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self {
            Self::ComposeFileExists { .. } | Self::UnknownPart { .. } => {
                tracing::warn!("User error: {}", self)
            }
            Self::Core(core) => match core.category() {
                CoreCategory::Internal => tracing::error!("Operation failed: {}", self),
                _ => tracing::warn!("Operation failed: {}", self),
            },
            Self::ConfigError { .. } => tracing::error!("Configuration error: {}", self),
            Self::IoError { .. } => tracing::error!("I/O error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plane_core::application::ApplicationError;
    use plane_core::domain::DomainError;
    use std::io;

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn compose_exists_suggests_overwrite() {
        let err = CliError::ComposeFileExists {
            path: PathBuf::from("docker-compose.yml"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--overwrite")));
    }

    #[test]
    fn unknown_part_lists_available_parts() {
        let err = CliError::UnknownPart {
            part: "everything".into(),
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("bin")));
        assert!(suggestions.iter().any(|s| s.contains("docker")));
    }

    #[test]
    fn invalid_runtime_suggestions_list_supported_versions() {
        let err = CliError::Core(
            DomainError::InvalidRuntime {
                requested: "7.4".into(),
            }
            .into(),
        );
        assert!(err.suggestions().iter().any(|s| s.contains("8.2")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_unknown_part_is_usage_error() {
        assert_eq!(CliError::UnknownPart { part: "x".into() }.exit_code(), 2);
    }

    #[test]
    fn exit_code_operation_failures() {
        assert_eq!(
            CliError::ComposeFileExists {
                path: PathBuf::from("x")
            }
            .exit_code(),
            1
        );
        assert_eq!(
            CliError::Core(
                ApplicationError::UnknownFragment { key: "x".into() }.into()
            )
            .exit_code(),
            1
        );
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::ComposeFileExists {
            path: PathBuf::from("/tmp/x"),
        };
        let s = err.format_plain();
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }
}
