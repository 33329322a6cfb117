//! In-memory reference backend.
//!
//! # Responsibilities
//! - Hold entries in a process-local map, nothing persisted
//! - Demonstrate a real (if small) option surface for the construction gate

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::backend::{Backend, BackendProvider};
use crate::error::{VfsError, VfsResult};
use crate::options::BackendOptions;

/// Simple in-memory store keyed by path.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: DashMap<String, Vec<u8>>,
    readonly: bool,
}

#[async_trait]
impl Backend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    async fn read(&self, path: &str) -> VfsResult<Vec<u8>> {
        self.entries
            .get(path)
            .map(|e| e.value().clone())
            .ok_or_else(|| VfsError::NotFound(path.to_string()))
    }

    async fn write(&self, path: &str, data: &[u8]) -> VfsResult<()> {
        if self.readonly {
            return Err(VfsError::Unsupported(
                "backend is mounted read-only".to_string(),
            ));
        }
        self.entries.insert(path.to_string(), data.to_vec());
        Ok(())
    }

    async fn size(&self, path: &str) -> VfsResult<i64> {
        self.entries
            .get(path)
            .map(|e| e.value().len() as i64)
            .ok_or_else(|| VfsError::NotFound(path.to_string()))
    }
}

/// Provider for the `memory` backend type.
///
/// Options: `readonly` (boolean, optional). Anything else is rejected.
#[derive(Debug, Default)]
pub struct MemoryProvider;

#[async_trait]
impl BackendProvider for MemoryProvider {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn check_options(&self, options: &BackendOptions) -> VfsResult<()> {
        // Type check first so a mistyped known key reports as such.
        options.get_bool("readonly")?;
        for key in options.keys() {
            if key != "readonly" {
                return Err(VfsError::invalid(format!(
                    "unknown option `{key}` for memory backend"
                )));
            }
        }
        Ok(())
    }

    async fn create(&self, options: BackendOptions) -> VfsResult<Arc<dyn Backend>> {
        let readonly = options.get_bool("readonly")?.unwrap_or(false);
        Ok(Arc::new(MemoryBackend {
            entries: DashMap::new(),
            readonly,
        }))
    }
}
