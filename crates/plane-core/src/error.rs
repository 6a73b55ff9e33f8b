//! Unified error type for Plane Core.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Convenient result type alias.
pub type PlaneResult<T> = Result<T, PlaneError>;

/// Any failure a plane-core operation can produce.
///
/// Layer errors are wrapped rather than flattened so callers can still match
/// on the concrete variant (`PlaneError::Application(ApplicationError::…)`)
/// when they care, while generic handling goes through [`suggestions`] and
/// [`category`].
///
/// [`suggestions`]: PlaneError::suggestions
/// [`category`]: PlaneError::category
#[derive(Debug, Error, Clone)]
pub enum PlaneError {
    /// Validation failures from the domain layer.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Orchestration and port failures from the application layer.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// A bug, not a user mistake.
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

/// Coarse classification used by the CLI to pick log severity and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

impl PlaneError {
    /// User-actionable hints for fixing this error, one line each.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Plane".into(),
                "Please report this issue at: https://github.com/plane-dev/plane/issues".into(),
            ],
        }
    }

    /// Which [`ErrorCategory`] this error falls into.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}
