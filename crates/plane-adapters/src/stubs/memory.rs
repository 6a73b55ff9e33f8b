//! In-memory stub source for testing.

use std::collections::HashMap;

use plane_core::{
    application::{ApplicationError, ports::StubSource},
    error::PlaneResult,
};

/// Map-backed stub source for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStubs {
    base_template: String,
    fragments: HashMap<String, String>,
}

impl MemoryStubs {
    /// Create a stub source with the given base template.
    pub fn new(base_template: impl Into<String>) -> Self {
        Self {
            base_template: base_template.into(),
            fragments: HashMap::new(),
        }
    }

    /// Add a fragment (builder style).
    pub fn with_fragment(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.fragments.insert(key.into(), text.into());
        self
    }
}

impl StubSource for MemoryStubs {
    fn base_template(&self) -> PlaneResult<String> {
        Ok(self.base_template.clone())
    }

    fn fragment(&self, key: &str) -> PlaneResult<String> {
        self.fragments
            .get(key)
            .cloned()
            .ok_or_else(|| ApplicationError::UnknownFragment { key: key.into() }.into())
    }
}

#[cfg(test)]
mod tests {
    use plane_core::{application::ComposeService, domain::ServiceCatalog};

    use super::*;

    #[test]
    fn resolves_registered_fragments() {
        let stubs = MemoryStubs::new("base").with_fragment("redis", "    redis:\n");
        assert_eq!(stubs.base_template().unwrap(), "base");
        assert_eq!(stubs.fragment("redis").unwrap(), "    redis:\n");
        assert!(stubs.fragment("ghost").is_err());
    }

    #[test]
    fn drives_the_compose_service() {
        let stubs = MemoryStubs::new("app: {{runtime}}\n{{depends}}\n{{services}}\n{{volumes}}\n")
            .with_fragment("redis", "    redis:\n        image: redis\n");
        let catalog = ServiceCatalog::builtin();
        let service = ComposeService::new(&catalog, &stubs);

        let doc = service.assemble("8.2", &["redis".to_string()]).unwrap();
        assert!(doc.contains("app: 8.2"));
        assert!(doc.contains("image: redis"));
        assert!(doc.contains("plane-redis:"));
    }
}
