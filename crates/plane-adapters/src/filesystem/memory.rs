//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use plane_core::{application::ApplicationError, application::ports::Filesystem, error::PlaneResult};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (testing helper).
    pub fn insert_file(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path.into(), contents.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.executables.contains(path)
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> PlaneResult<()> {
        let mut inner = self.inner.write().unwrap();

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> PlaneResult<String> {
        let inner = self.inner.read().unwrap();
        let bytes = inner.files.get(path).ok_or_else(|| {
            plane_core::error::PlaneError::from(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            })
        })?;
        String::from_utf8(bytes.clone()).map_err(|_| {
            ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "File is not valid UTF-8".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> PlaneResult<()> {
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn copy_file(&self, source: &Path, target: &Path) -> PlaneResult<()> {
        let mut inner = self.inner.write().unwrap();
        let contents = inner.files.get(source).cloned().ok_or_else(|| {
            plane_core::error::PlaneError::from(ApplicationError::Filesystem {
                path: source.to_path_buf(),
                reason: "File does not exist".into(),
            })
        })?;
        inner.files.insert(target.to_path_buf(), contents);
        Ok(())
    }

    fn set_executable(&self, path: &Path) -> PlaneResult<()> {
        let mut inner = self.inner.write().unwrap();
        inner.executables.insert(path.to_path_buf());
        Ok(())
    }
}
