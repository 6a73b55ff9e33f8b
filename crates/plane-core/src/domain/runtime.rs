//! Runtime version allow-list.

use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// A selectable runtime version.
///
/// The set is fixed at build time; parsing is the single validation point.
/// Every variant corresponds to a `runtimes/<version>/` build context shipped
/// with Plane and to the `{{runtime}}` token in the base compose template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeVersion {
    V81,
    #[default]
    V82,
    V83,
}

impl RuntimeVersion {
    /// All supported versions, oldest first.
    pub fn all() -> &'static [RuntimeVersion] {
        &[Self::V81, Self::V82, Self::V83]
    }

    /// The dotted form used in template substitution and asset paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V81 => "8.1",
            Self::V82 => "8.2",
            Self::V83 => "8.3",
        }
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuntimeVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "8.1" => Ok(Self::V81),
            "8.2" => Ok(Self::V82),
            "8.3" => Ok(Self::V83),
            other => Err(DomainError::InvalidRuntime {
                requested: other.to_string(),
            }),
        }
    }
}
