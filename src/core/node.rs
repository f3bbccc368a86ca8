//! Content-tree node contract.
//!
//! The pipeline never walks a repository itself. Everything it needs from a
//! content tree — a stable path and named string properties — is consumed
//! through the [`Resource`] trait, so any node model can be plugged in.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// Narrow read-only view of a content-tree node.
///
/// Implemented by the application's node model. Link types read reference
/// properties from it, the fallback step reads alternate target properties,
/// and error messages use the path for context.
pub trait Resource: fmt::Debug + Send + Sync {
    /// Stable path of the node within the content tree.
    fn path(&self) -> &str;

    /// Read a named string property, if present.
    fn get(&self, name: &str) -> Option<String>;
}

/// Shared handle to a content-tree node.
pub type NodeRef = Arc<dyn Resource>;

/// In-memory node carrying link properties without a backing repository node.
///
/// Useful for resolving a link from properties assembled at runtime. The
/// path can point anywhere; it only serves as context for configuration
/// lookup and diagnostics.
#[derive(Debug, Clone)]
pub struct SyntheticLinkResource {
    path: String,
    properties: FxHashMap<String, String>,
}

impl SyntheticLinkResource {
    /// Create an empty synthetic node at the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            properties: FxHashMap::default(),
        }
    }

    /// Create a synthetic node with an initial property set.
    pub fn with_properties(
        path: impl Into<String>,
        properties: FxHashMap<String, String>,
    ) -> Self {
        Self {
            path: path.into(),
            properties,
        }
    }

    /// Set a property, replacing any existing value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Fluent variant of [`set`](Self::set).
    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Finish building and return a shared node handle.
    pub fn into_node(self) -> NodeRef {
        Arc::new(self)
    }
}

impl Resource for SyntheticLinkResource {
    fn path(&self) -> &str {
        &self.path
    }

    fn get(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}
