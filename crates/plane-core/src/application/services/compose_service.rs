//! Compose assembly service - the install use case's core.
//!
//! This service coordinates the assembly workflow:
//! 1. Validate the requested runtime (before anything else)
//! 2. Resolve the fragment for every selected service
//! 3. Render depends/volumes clauses from the catalog
//! 4. Substitute into the base template and normalize
//!
//! It never touches the filesystem; writing the document (and the overwrite
//! policy for the destination file) is the caller's concern.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::StubSource,
    domain::{RuntimeVersion, ServiceCatalog, assemble_document, depends_clause, volumes_clause},
    error::PlaneResult,
};

/// Assembles compose documents from the catalog and an injected stub source.
pub struct ComposeService<'a> {
    catalog: &'a ServiceCatalog,
    stubs: &'a dyn StubSource,
}

impl<'a> ComposeService<'a> {
    /// Create a new compose service.
    pub fn new(catalog: &'a ServiceCatalog, stubs: &'a dyn StubSource) -> Self {
        Self { catalog, stubs }
    }

    /// Assemble the compose document for `runtime` and the ordered `services`
    /// selection.
    ///
    /// Duplicates are kept and order is preserved - it determines fragment
    /// concatenation order as well as depends/volume list order. Unknown
    /// service names contribute no dependency or volume entry but still
    /// require a resolvable fragment (keyed by the name itself); a missing
    /// fragment fails the whole operation.
    #[instrument(skip_all, fields(runtime = %runtime, services = services.len()))]
    pub fn assemble(&self, runtime: &str, services: &[String]) -> PlaneResult<String> {
        // 1. Validate the runtime before any other work.
        let runtime: RuntimeVersion = runtime.parse()?;

        // 2. Single pass over the selection: fragments + descriptors, in order.
        let mut descriptors = Vec::with_capacity(services.len());
        let mut fragments = String::new();
        for name in services {
            let descriptor = self.catalog.lookup(name);
            let key = descriptor.map_or(name.as_str(), |d| d.stub_key());
            let fragment = self.stubs.fragment(key)?;
            debug!(service = %name, stub = %key, "fragment resolved");

            // Fragments end with their own newline; no separator is inserted.
            fragments.push_str(&fragment);
            if let Some(descriptor) = descriptor {
                descriptors.push(descriptor);
            }
        }

        // 3. Clauses collapse to empty strings when nothing qualifies.
        let depends = depends_clause(descriptors.iter().copied());
        let volumes = volumes_clause(descriptors.iter().copied());

        // 4. Substitute + normalize.
        let base = self.stubs.base_template()?;
        let document = assemble_document(
            &base,
            runtime.as_str(),
            &depends,
            fragments.trim_end(),
            &volumes,
        );

        info!(
            runtime = %runtime,
            services = services.len(),
            bytes = document.len(),
            "compose document assembled"
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::application::ApplicationError;
    use crate::error::PlaneError;

    /// Minimal in-test stub source; the adapters crate is not a dependency
    /// of core, so tests carry their own key→text table.
    struct TableStubs {
        base: &'static str,
        fragments: HashMap<&'static str, &'static str>,
    }

    impl TableStubs {
        fn full() -> Self {
            let mut fragments = HashMap::new();
            fragments.insert("mailhog", "    mailhog:\n        image: mailhog\n");
            fragments.insert("postgres", "    postgres:\n        image: postgres\n");
            fragments.insert("redis", "    redis:\n        image: redis\n");
            Self {
                base: "services:\n    app:\n        image: app-{{runtime}}\n{{depends}}\n{{services}}\n{{volumes}}\n",
                fragments,
            }
        }
    }

    impl StubSource for TableStubs {
        fn base_template(&self) -> PlaneResult<String> {
            Ok(self.base.to_string())
        }

        fn fragment(&self, key: &str) -> PlaneResult<String> {
            self.fragments.get(key).map(|f| f.to_string()).ok_or_else(|| {
                ApplicationError::UnknownFragment { key: key.into() }.into()
            })
        }
    }

    fn selection(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn full_selection_renders_all_clauses_in_order() {
        let catalog = ServiceCatalog::builtin();
        let stubs = TableStubs::full();
        let service = ComposeService::new(&catalog, &stubs);

        let doc = service
            .assemble("8.2", &selection(&["mailhog", "postgres", "redis"]))
            .unwrap();

        // depends lists all three, selection order
        let m = doc.find("- mailhog").unwrap();
        let p = doc.find("- postgres").unwrap();
        let r = doc.find("- redis").unwrap();
        assert!(m < p && p < r);

        // volumes exclude mailhog, order postgres then redis
        assert!(!doc.contains("plane-mailhog"));
        assert!(doc.find("plane-postgres").unwrap() < doc.find("plane-redis").unwrap());

        // fragments concatenated in order, runtime substituted
        assert!(doc.find("image: mailhog").unwrap() < doc.find("image: postgres").unwrap());
        assert!(doc.find("image: postgres").unwrap() < doc.find("image: redis").unwrap());
        assert!(doc.contains("image: app-8.2"));

        // no leftover tokens, no consecutive blank lines
        assert!(!doc.contains("{{"));
        assert!(!doc.contains("\n\n"));
    }

    #[test]
    fn empty_selection_produces_clean_document() {
        let catalog = ServiceCatalog::builtin();
        let stubs = TableStubs::full();
        let service = ComposeService::new(&catalog, &stubs);

        let doc = service.assemble("8.1", &[]).unwrap();

        assert!(!doc.contains("depends_on:"));
        assert!(!doc.contains("volumes:"));
        assert!(!doc.contains("{{"));
        assert!(!doc.contains("\n\n"));
        assert!(!doc.starts_with('\n'));
        assert!(doc.contains("image: app-8.1"));
    }

    #[test]
    fn unknown_service_without_fragment_fails_hard() {
        let catalog = ServiceCatalog::builtin();
        let stubs = TableStubs::full();
        let service = ComposeService::new(&catalog, &stubs);

        let err = service.assemble("8.2", &selection(&["ghost"])).unwrap_err();
        assert!(matches!(
            err,
            PlaneError::Application(ApplicationError::UnknownFragment { ref key }) if key == "ghost"
        ));
    }

    #[test]
    fn unknown_service_with_fragment_contributes_no_clauses() {
        let catalog = ServiceCatalog::builtin();
        let mut stubs = TableStubs::full();
        stubs
            .fragments
            .insert("ghost", "    ghost:\n        image: ghost\n");
        let service = ComposeService::new(&catalog, &stubs);

        let doc = service.assemble("8.2", &selection(&["ghost"])).unwrap();

        assert!(doc.contains("image: ghost"));
        assert!(!doc.contains("depends_on:"));
        assert!(!doc.contains("volumes:"));
    }

    #[test]
    fn invalid_runtime_rejected_before_fragment_resolution() {
        let catalog = ServiceCatalog::builtin();
        // A stub source with no fragments at all: if validation were not
        // eager, the selection below would fail with UnknownFragment instead.
        let stubs = TableStubs {
            base: "{{runtime}}",
            fragments: HashMap::new(),
        };
        let service = ComposeService::new(&catalog, &stubs);

        let err = service
            .assemble("9.0", &selection(&["postgres"]))
            .unwrap_err();
        assert!(matches!(err, PlaneError::Domain(_)));
    }

    #[test]
    fn duplicate_services_are_kept() {
        let catalog = ServiceCatalog::builtin();
        let stubs = TableStubs::full();
        let service = ComposeService::new(&catalog, &stubs);

        let doc = service
            .assemble("8.2", &selection(&["redis", "redis"]))
            .unwrap();

        assert_eq!(doc.matches("image: redis").count(), 2);
        assert_eq!(doc.matches("- redis").count(), 2);
    }
}
