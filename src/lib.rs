//! driftfs — pluggable asynchronous virtual filesystem core.
//!
//! Two boundary mechanisms every backend shares:
//!
//! - a **construction gate**: option validation strictly precedes backend
//!   instantiation for every type in the catalog, and
//! - a **fetch adapter**: remote bytes and sizes retrieved over HTTP, with
//!   every transport failure normalized into the crate's error taxonomy.
//!
//! # Architecture Overview
//!
//! ```text
//!  caller ──▶ BackendRegistry ──▶ GatedFactory ──▶ BackendProvider::create
//!             (closed catalog,     (check_options        │
//!              aliasing)            before create)       ▼
//!                                                  Arc<dyn Backend>
//!                                                        │
//!                        network-backed backends ────────┘
//!                                 │
//!                                 ▼
//!                           FetchAdapter ──▶ remote HTTP resource
//!                           (GET content / HEAD size, VfsError mapping)
//! ```
//!
//! The fetch capability is injected (`Option<Arc<FetchAdapter>>`) by whoever
//! assembles the registry; see [`config::build_registry`].

pub mod backend;
pub mod config;
pub mod error;
pub mod fetch;
pub mod options;
pub mod registry;

pub use backend::{Backend, BackendProvider};
pub use config::{build_registry, load_config, VfsConfig};
pub use error::{ErrorKind, VfsError, VfsResult};
pub use fetch::{FetchAdapter, FetchKind, FetchSettings, FetchedContent};
pub use options::BackendOptions;
pub use registry::BackendRegistry;
