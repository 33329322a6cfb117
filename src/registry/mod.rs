//! Backend catalog.
//!
//! # Responsibilities
//! - Present the closed, named catalog of backend types
//! - Gate every factory exactly once, at registration time
//! - Support aliasing: several public names resolving to one backend type
//!
//! # Design Decisions
//! - The gate wraps the provider inside `register`, so no ungated factory is
//!   ever exposed and re-registration builds a fresh gate instead of
//!   wrapping an existing one
//! - `create` and `create_with` are twin entry points funneling into one
//!   internal gated call; omitted options normalize to an empty map

pub mod gate;

use std::sync::Arc;

use dashmap::DashMap;

use crate::backend::{Backend, BackendProvider, HttpProvider, MemoryProvider};
use crate::error::{VfsError, VfsResult};
use crate::fetch::FetchAdapter;
use crate::options::BackendOptions;

pub use gate::GatedFactory;

/// Closed catalog of backend types, each behind a construction gate.
#[derive(Debug, Default)]
pub struct BackendRegistry {
    catalog: DashMap<String, Arc<GatedFactory>>,
}

impl BackendRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry prewired with the built-in backends.
    ///
    /// `memory` is always present; `http` consumes the injected fetch
    /// capability and is additionally reachable under the alias `remote`.
    pub fn with_defaults(fetch: Option<Arc<FetchAdapter>>) -> Self {
        let registry = Self::new();
        registry.register(MemoryProvider);
        registry.register(HttpProvider::new(fetch));
        // The alias target was registered just above.
        let _ = registry.alias("remote", "http");
        registry
    }

    /// Add a backend type under its canonical name.
    ///
    /// The provider is gated here, once. Registering a name again replaces
    /// the entry with a freshly gated provider; entries never stack.
    pub fn register<P: BackendProvider + 'static>(&self, provider: P) {
        let name = provider.name();
        let gated = Arc::new(GatedFactory::new(Arc::new(provider)));
        if self.catalog.insert(name.to_string(), gated).is_some() {
            tracing::debug!(backend = name, "replaced existing catalog entry");
        } else {
            tracing::debug!(backend = name, "registered backend type");
        }
    }

    /// Expose an existing entry under a second public name.
    pub fn alias(&self, alias: &str, existing: &str) -> VfsResult<()> {
        let entry = self.lookup(existing)?;
        self.catalog.insert(alias.to_string(), entry);
        tracing::debug!(alias = alias, backend = existing, "registered backend alias");
        Ok(())
    }

    /// Resolve a public name to its gated factory.
    pub fn lookup(&self, name: &str) -> VfsResult<Arc<GatedFactory>> {
        self.catalog
            .get(name)
            .map(|e| e.value().clone())
            .ok_or_else(|| VfsError::NotFound(format!("no backend type named `{name}`")))
    }

    /// Construct a backend with no options.
    ///
    /// Identical to `create_with(name, BackendOptions::new())`.
    pub async fn create(&self, name: &str) -> VfsResult<Arc<dyn Backend>> {
        self.create_inner(name, BackendOptions::new()).await
    }

    /// Construct a backend from the supplied options.
    pub async fn create_with(
        &self,
        name: &str,
        options: BackendOptions,
    ) -> VfsResult<Arc<dyn Backend>> {
        self.create_inner(name, options).await
    }

    async fn create_inner(&self, name: &str, options: BackendOptions) -> VfsResult<Arc<dyn Backend>> {
        self.lookup(name)?.create(options).await
    }

    /// All public names in the catalog, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.catalog.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}
