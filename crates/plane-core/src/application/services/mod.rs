//! Application services - use case orchestration.

pub mod compose_service;
pub mod publish_service;

pub use compose_service::ComposeService;
pub use publish_service::{PublishOutcome, PublishService, RewriteStatus};
