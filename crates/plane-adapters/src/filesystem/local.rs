//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use plane_core::{application::ports::Filesystem, error::PlaneResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> PlaneResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn read_to_string(&self, path: &Path) -> PlaneResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> PlaneResult<()> {
        std::fs::write(path, contents).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn copy_file(&self, source: &Path, target: &Path) -> PlaneResult<()> {
        std::fs::copy(source, target)
            .map(|_| ())
            .map_err(|e| map_io_error(target, e, "copy file"))
    }

    fn set_executable(&self, path: &Path) -> PlaneResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata =
                std::fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
            let mut perms = metadata.permissions();
            let mode = perms.mode();
            perms.set_mode(mode | 0o111);
            std::fs::set_permissions(path, perms)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(windows)]
        {
            // Windows doesn't have an executable bit in the same way
            let _ = path;
        }
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> plane_core::error::PlaneError {
    use plane_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("out.txt");

        fs.write_file(&path, b"hello").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn copies_byte_for_byte() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let source = dir.path().join("a.bin");
        let target = dir.path().join("b.bin");

        fs.write_file(&source, &[0u8, 1, 2, 255]).unwrap();
        fs.copy_file(&source, &target).unwrap();
        assert_eq!(std::fs::read(&target).unwrap(), vec![0u8, 1, 2, 255]);
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.read_to_string(&dir.path().join("nope")).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn set_executable_adds_mode_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("script");

        fs.write_file(&path, b"#!/bin/sh\n").unwrap();
        fs.set_executable(&path).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0);
    }
}
