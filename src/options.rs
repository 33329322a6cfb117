//! Backend construction options.
//!
//! # Responsibilities
//! - Carry the untyped key/value configuration a caller hands to a factory
//! - Provide typed accessors that fail with `InvalidArgument`
//!
//! # Design Decisions
//! - Providers implement their own validation on top of these accessors;
//!   the rule engine behind a provider's checks is the provider's business
//! - An omitted options map normalizes to an empty one before any
//!   validation runs, so every construction attempt sees exactly one map

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::{VfsError, VfsResult};

/// Untyped configuration mapping supplied when constructing a backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackendOptions {
    entries: BTreeMap<String, Value>,
}

impl BackendOptions {
    /// Create an empty options map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous entry under `key`.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Raw value lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// True when no options were supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys present in this map, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Optional string option; `InvalidArgument` if present but not a string.
    pub fn get_str(&self, key: &str) -> VfsResult<Option<&str>> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(VfsError::invalid(format!(
                "option `{key}` must be a string, got {}",
                type_name(other)
            ))),
        }
    }

    /// Required string option; `InvalidArgument` if absent or mistyped.
    pub fn require_str(&self, key: &str) -> VfsResult<&str> {
        self.get_str(key)?
            .ok_or_else(|| VfsError::invalid(format!("missing required option `{key}`")))
    }

    /// Optional boolean option.
    pub fn get_bool(&self, key: &str) -> VfsResult<Option<bool>> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(VfsError::invalid(format!(
                "option `{key}` must be a boolean, got {}",
                type_name(other)
            ))),
        }
    }

    /// Optional unsigned integer option.
    pub fn get_u64(&self, key: &str) -> VfsResult<Option<u64>> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) if n.as_u64().is_some() => Ok(n.as_u64()),
            Some(other) => Err(VfsError::invalid(format!(
                "option `{key}` must be an unsigned integer, got {}",
                type_name(other)
            ))),
        }
    }

    /// Required URL-valued option, parsed and checked.
    pub fn require_url(&self, key: &str) -> VfsResult<Url> {
        let raw = self.require_str(key)?;
        Url::parse(raw)
            .map_err(|e| VfsError::invalid(format!("option `{key}` is not a valid URL: {e}")))
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
