//! Publish service - copies bundled artifacts into a target project.
//!
//! Two idempotent-intent operations, each guarded by an explicit overwrite
//! flag: publishing the `plane` executable and publishing the runtime-assets
//! tree. Both are pure copies; file contents are never transformed. The only
//! post-copy step is a best-effort rewrite of an existing compose document's
//! runtime path, which is downgraded to a warning on failure - the copy
//! itself is the operation's success criterion.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{AssetSource, Filesystem},
    },
    error::PlaneResult,
};

/// File name of the published executable.
pub const BINARY_NAME: &str = "plane";

/// Path prefix the base template uses for the bundled runtime build context.
///
/// `publish_runtime_assets` rewrites this prefix to the publish destination,
/// keeping whatever version suffix follows it.
pub const BUNDLED_RUNTIMES_PREFIX: &str = "./vendor/plane/runtimes/";

/// Result of the compose-rewrite step of a runtime-assets publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteStatus {
    /// The compose document now points at the new destination.
    Updated,
    /// The compose document contained no bundled-runtime reference; nothing
    /// to do.
    Unchanged,
    /// The rewrite could not be applied. The copy still stands; callers
    /// surface this as a warning, not a failure.
    Failed(String),
}

/// Outcome of a successful runtime-assets publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    /// Number of files written to the destination.
    pub files: usize,
    /// What happened to the compose document afterwards.
    pub rewrite: RewriteStatus,
}

/// Publishes bundled artifacts through the filesystem and asset ports.
pub struct PublishService<'a> {
    fs: &'a dyn Filesystem,
    assets: &'a dyn AssetSource,
}

impl<'a> PublishService<'a> {
    /// Create a new publish service.
    pub fn new(fs: &'a dyn Filesystem, assets: &'a dyn AssetSource) -> Self {
        Self { fs, assets }
    }

    /// Copy the Plane executable into `dest_dir`.
    ///
    /// Ensures the directory exists first. Fails with `DestinationExists`
    /// when the target file is present and `overwrite` is not set - checked
    /// before the copy, so the existing file is left byte-for-byte unchanged.
    #[instrument(skip(self), fields(dest = %dest_dir.display()))]
    pub fn publish_binary(&self, dest_dir: &Path, overwrite: bool) -> PlaneResult<PathBuf> {
        self.fs.create_dir_all(dest_dir)?;

        let target = dest_dir.join(BINARY_NAME);
        if self.fs.exists(&target) && !overwrite {
            return Err(ApplicationError::DestinationExists { path: target }.into());
        }

        let source = self.assets.binary_path()?;
        self.fs.copy_file(&source, &target)?;
        self.fs.set_executable(&target)?;

        info!(target = %target.display(), "binary published");
        Ok(target)
    }

    /// Copy the runtime-assets tree into `dest_dir`, then point an existing
    /// compose document at it.
    ///
    /// Every target path is guarded before the first write: when `overwrite`
    /// is not set and any destination file already exists, the whole
    /// operation fails with `DestinationExists` and nothing is copied.
    #[instrument(skip(self), fields(dest = %dest_dir.display()))]
    pub fn publish_runtime_assets(
        &self,
        dest_dir: &Path,
        compose_file: &Path,
        overwrite: bool,
    ) -> PlaneResult<PublishOutcome> {
        let files = self.assets.runtime_assets()?;

        if !overwrite {
            for file in &files {
                let target = dest_dir.join(&file.relative_path);
                if self.fs.exists(&target) {
                    return Err(ApplicationError::DestinationExists { path: target }.into());
                }
            }
        }

        for file in &files {
            let target = dest_dir.join(&file.relative_path);
            if let Some(parent) = target.parent() {
                self.fs.create_dir_all(parent)?;
            }
            self.fs.write_file(&target, &file.contents)?;
            if file.executable {
                self.fs.set_executable(&target)?;
            }
            debug!(target = %target.display(), "asset written");
        }

        info!(files = files.len(), "runtime assets published");

        let rewrite = self.rewrite_compose(compose_file, dest_dir);
        if let RewriteStatus::Failed(reason) = &rewrite {
            warn!(compose = %compose_file.display(), %reason, "compose rewrite failed");
        }

        Ok(PublishOutcome {
            files: files.len(),
            rewrite,
        })
    }

    /// Point the compose document's bundled-runtime references at `dest_dir`.
    ///
    /// Any error is captured in the returned status instead of propagating -
    /// the preceding copy is never rolled back.
    fn rewrite_compose(&self, compose_file: &Path, dest_dir: &Path) -> RewriteStatus {
        let text = match self.fs.read_to_string(compose_file) {
            Ok(text) => text,
            Err(e) => return RewriteStatus::Failed(e.to_string()),
        };

        let rewritten = rewrite_runtime_paths(&text, dest_dir);
        if rewritten == text {
            return RewriteStatus::Unchanged;
        }

        match self.fs.write_file(compose_file, rewritten.as_bytes()) {
            Ok(()) => RewriteStatus::Updated,
            Err(e) => RewriteStatus::Failed(e.to_string()),
        }
    }
}

/// Replace the bundled-runtime path prefix with the publish destination.
///
/// Purely textual; the version suffix after the prefix is preserved so a
/// document generated for any runtime stays consistent.
pub fn rewrite_runtime_paths(text: &str, dest_dir: &Path) -> String {
    text.replace(BUNDLED_RUNTIMES_PREFIX, &runtime_path_prefix(dest_dir))
}

/// Normalize the destination into the prefix form used inside compose files.
///
/// Relative destinations are rendered `./<dir>/`; absolute ones are kept
/// as-is with a trailing separator.
fn runtime_path_prefix(dest_dir: &Path) -> String {
    let rendered = dest_dir.display().to_string();
    let trimmed = rendered.trim_end_matches('/');
    if dest_dir.is_absolute() || trimmed.starts_with("./") {
        format!("{trimmed}/")
    } else {
        format!("./{trimmed}/")
    }
}
