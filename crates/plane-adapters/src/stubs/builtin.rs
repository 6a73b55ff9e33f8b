//! Stub texts embedded at compile time.

use plane_core::{
    application::{ApplicationError, ports::StubSource},
    error::PlaneResult,
};

static BASE_TEMPLATE: &str = include_str!("../../stubs/docker-compose.stub");
static MAILHOG: &str = include_str!("../../stubs/mailhog.stub");
static POSTGRES: &str = include_str!("../../stubs/postgres.stub");
static REDIS: &str = include_str!("../../stubs/redis.stub");

/// The stub collection Plane ships with.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStubs;

impl StubSource for BuiltinStubs {
    fn base_template(&self) -> PlaneResult<String> {
        Ok(BASE_TEMPLATE.to_string())
    }

    fn fragment(&self, key: &str) -> PlaneResult<String> {
        let text = match key {
            "mailhog" => MAILHOG,
            "postgres" => POSTGRES,
            "redis" => REDIS,
            _ => {
                return Err(ApplicationError::UnknownFragment { key: key.into() }.into());
            }
        };
        Ok(text.to_string())
    }
}
