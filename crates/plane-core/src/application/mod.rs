//! Application layer for Plane.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ComposeService, PublishService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All assembly rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ComposeService, PublishOutcome, PublishService, RewriteStatus};

// Re-export port traits (for adapter implementation)
pub use ports::{AssetFile, AssetSource, Filesystem, StubSource};

pub use error::ApplicationError;
