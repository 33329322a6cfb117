//! Unified error taxonomy.
//!
//! # Responsibilities
//! - Define the typed error every subsystem surfaces
//! - Carry a machine-readable kind plus a human message
//! - Keep the invalid-argument / I-O split stable for callers
//!
//! # Design Decisions
//! - Errors are constructed at the failure site and never mutated afterward
//! - A single failed attempt is terminal: no retry logic lives in this crate

use thiserror::Error;

/// Machine-readable error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed caller input: bad options, bad URL, unsupported content kind.
    InvalidArgument,
    /// Failure after the request left the process: transport errors,
    /// non-success HTTP status, body decode failures.
    Io,
    /// Named entity does not exist (e.g. unknown registry name).
    NotFound,
    /// Operation requires a capability that is absent in this process.
    Unsupported,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::Io => "I/O error",
            ErrorKind::NotFound => "not found",
            ErrorKind::Unsupported => "unsupported",
        };
        f.write_str(s)
    }
}

/// Errors surfaced by backend construction and remote fetching.
#[derive(Debug, Error)]
pub enum VfsError {
    /// Caller supplied something malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport failure, non-success HTTP status, or body decode failure.
    #[error("I/O error: {0}")]
    Io(String),

    /// Lookup target does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Required capability is absent.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl VfsError {
    /// Classify this error without inspecting the message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VfsError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            VfsError::Io(_) => ErrorKind::Io,
            VfsError::NotFound(_) => ErrorKind::NotFound,
            VfsError::Unsupported(_) => ErrorKind::Unsupported,
        }
    }

    /// Build an invalid-argument error from any displayable source.
    pub fn invalid<M: std::fmt::Display>(msg: M) -> Self {
        VfsError::InvalidArgument(msg.to_string())
    }

    /// Build an I/O error from any displayable source.
    pub fn io<M: std::fmt::Display>(msg: M) -> Self {
        VfsError::Io(msg.to_string())
    }
}

/// Result type for all asynchronous operations in this crate.
pub type VfsResult<T> = Result<T, VfsError>;
