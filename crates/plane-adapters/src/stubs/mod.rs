//! Stub sources.
//!
//! A stub is a pre-written block of compose-file text: the base template
//! (`docker-compose.stub`) plus one fragment per service. This module
//! provides [`default_stubs`], the single entry-point for resolving the stub
//! collection the CLI should use.
//!
//! # Resolution order
//!
//! Sources are probed in this priority order, stopping at the first directory
//! that exists:
//!
//! 1. **`$PLANE_STUBS_DIR`** — environment variable override. Point this at
//!    a directory of `.stub` files to customize every generated fragment.
//! 2. **`./stubs`** — relative to the current working directory, the layout
//!    used when hacking on stub content inside a project.
//! 3. **Builtin** — the stub texts embedded in this crate at compile time.
//!
//! A directory source only needs to exist to win the probe; a missing
//! fragment inside it is still a hard per-key failure, never a fallthrough
//! to the builtin set.

mod builtin;
mod dir;
mod memory;

use std::path::PathBuf;

use tracing::{debug, info};

use plane_core::application::ports::StubSource;

pub use builtin::BuiltinStubs;
pub use dir::DirStubs;
pub use memory::MemoryStubs;

/// Environment variable naming a custom stub directory.
pub const STUBS_DIR_ENV: &str = "PLANE_STUBS_DIR";

/// Resolve the stub source using the documented priority order.
pub fn default_stubs() -> Box<dyn StubSource> {
    for candidate in candidate_paths() {
        debug!(path = %candidate.display(), "checking candidate stubs path");

        if !candidate.is_dir() {
            debug!(path = %candidate.display(), "path is not a directory, skipping");
            continue;
        }

        info!(path = %candidate.display(), "using stub directory");
        return Box::new(DirStubs::new(candidate));
    }

    debug!("no stub directory found, using builtin stubs");
    Box::new(BuiltinStubs)
}

/// Build the ordered list of candidate paths to probe.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Ok(dir) = std::env::var(STUBS_DIR_ENV) {
        if !dir.is_empty() {
            paths.push(PathBuf::from(dir));
        }
    }
    paths.push(PathBuf::from("stubs"));
    paths
}
