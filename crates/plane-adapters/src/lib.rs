//! Infrastructure adapters for Plane.
//!
//! This crate implements the ports defined in `plane-core::application::ports`.
//! It contains all external dependencies and I/O operations, plus the stub
//! and runtime-asset payload that ships with the tool.

pub mod assets;
pub mod filesystem;
pub mod stubs;

// Re-export commonly used adapters
pub use assets::BundledAssets;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use stubs::{BuiltinStubs, DirStubs, MemoryStubs, default_stubs};
