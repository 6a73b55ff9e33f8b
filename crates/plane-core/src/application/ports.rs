//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `plane-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::PlaneResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `plane_adapters::filesystem::LocalFilesystem` (production)
/// - `plane_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PlaneResult<()>;

    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> PlaneResult<String>;

    /// Write bytes to a file, creating or truncating it.
    fn write_file(&self, path: &Path, contents: &[u8]) -> PlaneResult<()>;

    /// Copy a file byte-for-byte.
    fn copy_file(&self, source: &Path, target: &Path) -> PlaneResult<()>;

    /// Mark a file executable (no-op on platforms without a mode bit).
    fn set_executable(&self, path: &Path) -> PlaneResult<()>;
}

/// Port for resolving stub texts - the base compose template and one
/// fragment per service stub key.
///
/// Implemented by:
/// - `plane_adapters::stubs::BuiltinStubs` (embedded defaults)
/// - `plane_adapters::stubs::DirStubs` (`.stub` files on disk)
/// - `plane_adapters::stubs::MemoryStubs` (testing)
pub trait StubSource: Send + Sync {
    /// The base compose template containing the four placeholder tokens.
    fn base_template(&self) -> PlaneResult<String>;

    /// The compose fragment for one stub key.
    ///
    /// Absence is a hard failure (`ApplicationError::UnknownFragment`),
    /// never a silent skip.
    fn fragment(&self, key: &str) -> PlaneResult<String>;
}

/// One file of the publishable runtime-assets tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    /// Path relative to the destination directory.
    pub relative_path: PathBuf,
    /// Raw contents, copied byte-for-byte.
    pub contents: Vec<u8>,
    /// Whether the published file should carry the executable bit.
    pub executable: bool,
}

/// Port for the publishable artifacts Plane ships.
///
/// Implemented by `plane_adapters::assets::BundledAssets`.
pub trait AssetSource: Send + Sync {
    /// Location of the executable to publish.
    fn binary_path(&self) -> PlaneResult<PathBuf>;

    /// The runtime-assets tree, one entry per file.
    fn runtime_assets(&self) -> PlaneResult<Vec<AssetFile>>;
}
