use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Application layer errors - orchestration and port failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A requested service has no resolvable stub fragment.
    ///
    /// Aborts assembly; nothing is partially written.
    #[error("no stub fragment found for '{key}'")]
    UnknownFragment { key: String },

    /// An overwrite guard tripped: the target file is already present.
    ///
    /// Raised before the write call ever happens.
    #[error("destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// A filesystem operation failed.
    #[error("filesystem operation failed on '{path}': {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// A stub source could not be read at all.
    #[error("stub source unavailable: {reason}")]
    StubLoad { reason: String },

    /// A bundled asset could not be resolved.
    #[error("asset source unavailable: {reason}")]
    AssetLoad { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownFragment { key } => vec![
                format!("No stub fragment named '{key}.stub' could be resolved"),
                "Known services: mailhog, postgres, redis".into(),
                "Set PLANE_STUBS_DIR to a directory providing custom stubs".into(),
            ],
            Self::DestinationExists { path } => vec![
                format!("'{}' is already present", path.display()),
                "Pass --overwrite to replace it".into(),
            ],
            Self::Filesystem { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
                "Check available disk space".into(),
            ],
            Self::StubLoad { .. } => vec![
                "The stub source could not be read".into(),
                "If PLANE_STUBS_DIR is set, verify it points at a readable directory".into(),
            ],
            Self::AssetLoad { .. } => vec![
                "The bundled assets could not be resolved".into(),
                "If PLANE_RUNTIMES_DIR is set, verify it points at a readable directory".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownFragment { .. } => ErrorCategory::NotFound,
            Self::DestinationExists { .. } => ErrorCategory::Conflict,
            Self::Filesystem { .. } | Self::StubLoad { .. } | Self::AssetLoad { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
