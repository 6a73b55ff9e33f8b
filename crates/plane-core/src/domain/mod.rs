//! Core domain layer for Plane.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O (stub files, filesystem writes, asset copies) is handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable values**: The catalog is built once and never mutated

// Public API - what the world sees
pub mod catalog;
pub mod compose;
pub mod error;
pub mod runtime;

// Re-exports for convenience
pub use catalog::{DEFAULT_SERVICES, ServiceCatalog, ServiceDescriptor};
pub use compose::{
    DEPENDS_TOKEN, RUNTIME_TOKEN, SERVICES_TOKEN, VOLUMES_TOKEN, assemble_document,
    collapse_blank_lines, depends_clause, volumes_clause,
};
pub use error::DomainError;
pub use runtime::RuntimeVersion;
