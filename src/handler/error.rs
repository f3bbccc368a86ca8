//! Pipeline error types.
//!
//! Only configuration and contract violations surface as errors — a broken
//! deployment, not a bad input. A reference that simply cannot be resolved
//! is returned as an invalid [`Link`](crate::core::Link), never as an
//! `Err`.

use thiserror::Error;

/// Fatal configuration/contract violation during link resolution.
///
/// `location` is the path of the request's resource, or `-` when the
/// request carried none.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The configured link type list is empty or missing.
    #[error("no link types defined")]
    NoLinkTypes,

    /// A pre-processor violated its contract.
    #[error("link pre-processor '{name}' failed, resource '{location}'")]
    PreProcessor {
        name: &'static str,
        location: String,
        #[source]
        source: anyhow::Error,
    },

    /// A post-processor violated its contract.
    #[error("link post-processor '{name}' failed, resource '{location}'")]
    PostProcessor {
        name: &'static str,
        location: String,
        #[source]
        source: anyhow::Error,
    },

    /// A link type failed while resolving.
    #[error("link type '{id}' failed to resolve, resource '{location}'")]
    LinkType {
        id: &'static str,
        location: String,
        #[source]
        source: anyhow::Error,
    },
}
