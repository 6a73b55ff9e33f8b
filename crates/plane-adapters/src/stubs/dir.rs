//! Filesystem-backed stub source.
//!
//! Reads `<key>.stub` files from a single directory:
//!
//! ```text
//! stubs/
//! ├── docker-compose.stub   ← base template (required)
//! ├── mailhog.stub
//! ├── postgres.stub
//! └── redis.stub
//! ```

use std::path::PathBuf;

use tracing::debug;

use plane_core::{
    application::{ApplicationError, ports::StubSource},
    error::PlaneResult,
};

/// Name of the base template file inside a stub directory.
const BASE_TEMPLATE_FILE: &str = "docker-compose.stub";

/// Stub source reading `.stub` files from a directory.
#[derive(Debug, Clone)]
pub struct DirStubs {
    root: PathBuf,
}

impl DirStubs {
    /// Create a stub source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read(&self, file_name: &str) -> Option<String> {
        let path = self.root.join(file_name);
        debug!(path = %path.display(), "reading stub file");
        std::fs::read_to_string(&path).ok()
    }
}

impl StubSource for DirStubs {
    fn base_template(&self) -> PlaneResult<String> {
        self.read(BASE_TEMPLATE_FILE).ok_or_else(|| {
            ApplicationError::StubLoad {
                reason: format!(
                    "missing base template '{}'",
                    self.root.join(BASE_TEMPLATE_FILE).display()
                ),
            }
            .into()
        })
    }

    fn fragment(&self, key: &str) -> PlaneResult<String> {
        // Keys are file stems, never paths.
        if key.contains(['/', '\\']) || key.contains("..") {
            return Err(ApplicationError::UnknownFragment { key: key.into() }.into());
        }

        self.read(&format!("{key}.stub"))
            .ok_or_else(|| ApplicationError::UnknownFragment { key: key.into() }.into())
    }
}
