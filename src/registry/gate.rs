//! Backend construction gate.
//!
//! # Responsibilities
//! - Guarantee option validation strictly precedes backend instantiation
//! - Pass factory errors through untouched; introduce only validation errors
//!
//! # Design Decisions
//! - The gate is built exactly once per catalog entry, inside
//!   [`BackendRegistry::register`](super::BackendRegistry::register); it wraps
//!   the provider directly, so a gate can never wrap another gate

use std::sync::Arc;

use crate::backend::{Backend, BackendProvider};
use crate::error::VfsResult;
use crate::options::BackendOptions;

/// A provider factory wrapped with pre-construction option validation.
pub struct GatedFactory {
    provider: Arc<dyn BackendProvider>,
}

impl GatedFactory {
    pub(crate) fn new(provider: Arc<dyn BackendProvider>) -> Self {
        Self { provider }
    }

    /// Canonical name of the backend type behind this gate.
    pub fn backend_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Validate `options`, then delegate to the provider's factory.
    ///
    /// A validation failure is returned alone; the factory is never invoked
    /// for it. Errors the factory itself produces propagate unchanged.
    pub async fn create(&self, options: BackendOptions) -> VfsResult<Arc<dyn Backend>> {
        if let Err(e) = self.provider.check_options(&options).await {
            tracing::warn!(
                backend = self.provider.name(),
                error = %e,
                "backend construction rejected: invalid options"
            );
            return Err(e);
        }

        tracing::debug!(backend = self.provider.name(), "options validated, constructing backend");
        self.provider.create(options).await
    }
}

impl std::fmt::Debug for GatedFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatedFactory")
            .field("backend", &self.provider.name())
            .finish()
    }
}
