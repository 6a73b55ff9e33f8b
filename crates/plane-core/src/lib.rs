//! Plane Core - domain and application layers.
//!
//! Everything combinatorial about Plane lives here: the service catalog, the
//! runtime allow-list, and the compose-document assembly. The crate follows
//! the hexagonal split used across the workspace:
//!
//! ```text
//! plane-cli ──▶ application services (ComposeService, PublishService)
//!                    │
//!                    ▼ driven ports (Filesystem, StubSource, AssetSource)
//!              plane-adapters
//!                    │
//!                    ▼
//!              domain (ServiceCatalog, RuntimeVersion, compose assembly)
//!              — pure, std-only, no I/O —
//! ```
//!
//! The domain layer never performs I/O; stub texts and filesystem effects
//! arrive through the port traits, so everything here is testable with plain
//! in-memory fakes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plane_core::{application::ComposeService, domain::ServiceCatalog};
//!
//! let catalog = ServiceCatalog::builtin();
//! let service = ComposeService::new(&catalog, &stubs);
//! let compose = service.assemble("8.2", &["postgres".into()])?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComposeService, PublishOutcome, PublishService, RewriteStatus,
        ports::{AssetFile, AssetSource, Filesystem, StubSource},
    };
    pub use crate::domain::{DEFAULT_SERVICES, RuntimeVersion, ServiceCatalog, ServiceDescriptor};
    pub use crate::error::{PlaneError, PlaneResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
