//! Backend abstraction.
//!
//! # Responsibilities
//! - Define the capability interface every storage backend satisfies
//! - Define the provider contract the registry's construction gate wraps:
//!   declared name, option validation, and the factory itself
//!
//! # Data Flow
//! ```text
//! caller → BackendRegistry::create(name, options)
//!        → GatedFactory (check_options strictly before create)
//!        → BackendProvider::create → Arc<dyn Backend>
//! ```

pub mod http;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::VfsResult;
use crate::options::BackendOptions;

pub use http::HttpProvider;
pub use memory::MemoryProvider;

/// A constructed storage backend.
///
/// Only the minimal surface this core needs: enough for callers to move
/// bytes through a backend and ask about entries. Full filesystem semantics
/// (directory trees, permissions, handles) live above this trait.
#[async_trait]
pub trait Backend: Send + Sync + std::fmt::Debug {
    /// Backend type name, matching the provider that built it.
    fn name(&self) -> &str;

    /// Read the full contents of the entry at `path`.
    async fn read(&self, path: &str) -> VfsResult<Vec<u8>>;

    /// Write `data` as the full contents of the entry at `path`.
    async fn write(&self, path: &str, data: &[u8]) -> VfsResult<()>;

    /// Size in bytes of the entry at `path`, or `-1` when unknown.
    async fn size(&self, path: &str) -> VfsResult<i64>;
}

/// Factory contract for one backend type.
///
/// The registry wraps every provider in a construction gate at registration
/// time; `create` is only ever reached after `check_options` succeeded on the
/// same options map.
#[async_trait]
pub trait BackendProvider: Send + Sync {
    /// Canonical registry name for this backend type.
    fn name(&self) -> &'static str;

    /// Validate a caller-supplied options map against this backend's rules.
    ///
    /// Runs before `create` on every construction attempt. The default
    /// accepts anything; backends with real option surfaces override it.
    async fn check_options(&self, _options: &BackendOptions) -> VfsResult<()> {
        Ok(())
    }

    /// Construct a backend instance from validated options.
    async fn create(&self, options: BackendOptions) -> VfsResult<Arc<dyn Backend>>;
}
