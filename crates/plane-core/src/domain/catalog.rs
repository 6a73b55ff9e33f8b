//! Static service catalog.
//!
//! One [`ServiceDescriptor`] per known service, describing how the service
//! participates in the generated compose document: whether the `app` service
//! must declare a `depends_on` entry for it, whether it needs a named volume,
//! and which stub fragment carries its compose block.
//!
//! The catalog is read-only configuration, built once at process start with
//! [`ServiceCatalog::builtin`] and passed by reference into the assembly
//! service. There is no ambient global lookup.

/// Services installed when the user does not name any.
pub const DEFAULT_SERVICES: &[&str] = &["mailhog", "postgres", "redis"];

/// Descriptor for one known service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    name: &'static str,
    depends_on: bool,
    volume: bool,
    stub_key: &'static str,
}

impl ServiceDescriptor {
    const fn new(name: &'static str, depends_on: bool, volume: bool) -> Self {
        // Stub keys coincide with service names for the builtin set.
        Self {
            name,
            depends_on,
            volume,
            stub_key: name,
        }
    }

    /// Catalog key, also used as the compose service key.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Must this service appear in the generated `depends_on:` block?
    pub fn requires_depends_on(&self) -> bool {
        self.depends_on
    }

    /// Does this service get a generated named volume (`plane-<name>`)?
    pub fn requires_volume(&self) -> bool {
        self.volume
    }

    /// Key used to resolve this service's compose-fragment text.
    pub fn stub_key(&self) -> &str {
        self.stub_key
    }
}

/// Immutable set of known services.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    descriptors: Vec<ServiceDescriptor>,
}

impl ServiceCatalog {
    /// The services Plane ships stubs for.
    pub fn builtin() -> Self {
        Self {
            descriptors: vec![
                ServiceDescriptor::new("mailhog", true, false),
                ServiceDescriptor::new("postgres", true, true),
                ServiceDescriptor::new("redis", true, true),
            ],
        }
    }

    /// Look up a descriptor by service name.
    ///
    /// Returns `None` when the name is unknown — callers decide what absence
    /// means; there is no silent default descriptor.
    pub fn lookup(&self, name: &str) -> Option<&ServiceDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// Names of all known services, in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|d| d.name)
    }

    /// Number of known services.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// `true` if the catalog holds no descriptors.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
