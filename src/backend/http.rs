//! Network-backed reference backend.
//!
//! # Responsibilities
//! - Serve reads out of a remote HTTP tree rooted at `base_url`
//! - Consume the injected fetch capability; degrade cleanly when absent
//!
//! # Design Decisions
//! - The provider holds `Option<Arc<FetchAdapter>>`: availability is decided
//!   by whoever assembles the registry, not by a process-global flag
//! - Remote trees are read-only through this backend; writes are refused

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::backend::{Backend, BackendProvider};
use crate::error::{VfsError, VfsResult};
use crate::fetch::{FetchAdapter, FetchKind};
use crate::options::BackendOptions;

/// Read-only backend over a remote HTTP tree.
#[derive(Debug)]
pub struct HttpBackend {
    base_url: Url,
    fetch: Arc<FetchAdapter>,
}

impl HttpBackend {
    fn resolve(&self, path: &str) -> VfsResult<String> {
        let relative = path.trim_start_matches('/');
        let url = self
            .base_url
            .join(relative)
            .map_err(|e| VfsError::invalid(format!("cannot resolve `{path}`: {e}")))?;
        Ok(url.into())
    }
}

#[async_trait]
impl Backend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn read(&self, path: &str) -> VfsResult<Vec<u8>> {
        let url = self.resolve(path)?;
        let content = self.fetch.fetch_content(&url, FetchKind::Bytes).await?;
        // fetch_content(Bytes) only ever delivers the bytes variant.
        Ok(content.into_bytes().unwrap_or_default())
    }

    async fn write(&self, _path: &str, _data: &[u8]) -> VfsResult<()> {
        Err(VfsError::Unsupported(
            "http backend is read-only".to_string(),
        ))
    }

    async fn size(&self, path: &str) -> VfsResult<i64> {
        let url = self.resolve(path)?;
        self.fetch.fetch_size(&url).await
    }
}

/// Provider for the `http` backend type.
///
/// Options: `base_url` (string URL, required). Requires the fetch capability
/// to have been injected at assembly time.
#[derive(Debug, Default)]
pub struct HttpProvider {
    fetch: Option<Arc<FetchAdapter>>,
}

impl HttpProvider {
    /// Create a provider with the given (possibly absent) fetch capability.
    pub fn new(fetch: Option<Arc<FetchAdapter>>) -> Self {
        Self { fetch }
    }

    /// True when this provider can actually reach the network.
    pub fn is_available(&self) -> bool {
        self.fetch.is_some()
    }
}

#[async_trait]
impl BackendProvider for HttpProvider {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn check_options(&self, options: &BackendOptions) -> VfsResult<()> {
        options.require_url("base_url")?;
        for key in options.keys() {
            if key != "base_url" {
                return Err(VfsError::invalid(format!(
                    "unknown option `{key}` for http backend"
                )));
            }
        }
        Ok(())
    }

    async fn create(&self, options: BackendOptions) -> VfsResult<Arc<dyn Backend>> {
        let fetch = self.fetch.clone().ok_or_else(|| {
            VfsError::Unsupported("no network fetch capability in this process".to_string())
        })?;
        let base_url = options.require_url("base_url")?;
        Ok(Arc::new(HttpBackend { base_url, fetch }))
    }
}
