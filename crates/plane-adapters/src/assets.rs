//! Bundled publishable assets.
//!
//! The runtime build contexts (`runtimes/<version>/`) are embedded into the
//! binary at compile time, so `plane publish` works from any install location
//! without a package directory on disk. `$PLANE_RUNTIMES_DIR` overrides the
//! embedded tree with a directory of the same layout.

use std::path::{Path, PathBuf};

use include_dir::{Dir, include_dir};
use tracing::{debug, info};
use walkdir::WalkDir;

use plane_core::{
    application::{
        ApplicationError,
        ports::{AssetFile, AssetSource},
    },
    error::PlaneResult,
};

/// Environment variable naming a custom runtime-assets directory.
pub const RUNTIMES_DIR_ENV: &str = "PLANE_RUNTIMES_DIR";

static RUNTIMES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/runtimes");

/// Asset source backed by the embedded runtime tree and the running binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledAssets;

impl BundledAssets {
    /// Create a new bundled asset source.
    pub fn new() -> Self {
        Self
    }
}

impl AssetSource for BundledAssets {
    fn binary_path(&self) -> PlaneResult<PathBuf> {
        std::env::current_exe().map_err(|e| {
            ApplicationError::AssetLoad {
                reason: format!("cannot locate the running executable: {e}"),
            }
            .into()
        })
    }

    fn runtime_assets(&self) -> PlaneResult<Vec<AssetFile>> {
        if let Ok(dir) = std::env::var(RUNTIMES_DIR_ENV) {
            if !dir.is_empty() {
                info!(path = %dir, "using runtime assets override directory");
                return collect_from_disk(Path::new(&dir));
            }
        }

        let mut files = Vec::new();
        collect_embedded(&RUNTIMES, &mut files);
        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        debug!(files = files.len(), "collected embedded runtime assets");
        Ok(files)
    }
}

fn collect_embedded(dir: &Dir<'static>, out: &mut Vec<AssetFile>) {
    for file in dir.files() {
        let contents = file.contents().to_vec();
        out.push(AssetFile {
            relative_path: file.path().to_path_buf(),
            executable: is_script(&contents),
            contents,
        });
    }
    for sub in dir.dirs() {
        collect_embedded(sub, out);
    }
}

fn collect_from_disk(root: &Path) -> PlaneResult<Vec<AssetFile>> {
    let mut out = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| asset_load(root, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative_path = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| asset_load(root, e))?
            .to_path_buf();
        let contents = std::fs::read(entry.path()).map_err(|e| asset_load(entry.path(), e))?;
        out.push(AssetFile {
            relative_path,
            executable: is_script(&contents),
            contents,
        });
    }
    Ok(out)
}

/// Script files are detected by shebang; they keep their executable bit when
/// published.
fn is_script(contents: &[u8]) -> bool {
    contents.starts_with(b"#!")
}

fn asset_load(path: &Path, e: impl std::fmt::Display) -> plane_core::error::PlaneError {
    ApplicationError::AssetLoad {
        reason: format!("{}: {e}", path.display()),
    }
    .into()
}
