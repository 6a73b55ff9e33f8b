use thiserror::Error;

use super::runtime::RuntimeVersion;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Actionable (the unified error type derives suggestions from them)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested runtime version is outside the allowed set.
    ///
    /// Raised before assembly begins; no side effect has happened yet.
    #[error("unsupported runtime '{requested}'")]
    InvalidRuntime { requested: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidRuntime { requested } => {
                let mut out = vec![
                    format!("'{requested}' is not a supported runtime version"),
                    "Supported runtimes:".into(),
                ];
                for version in RuntimeVersion::all() {
                    out.push(format!("  \u{2022} {version}"));
                }
                out.push("Example: plane install --runtime 8.2".into());
                out
            }
        }
    }
}
