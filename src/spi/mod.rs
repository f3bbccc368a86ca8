//! Collaborator contracts supplied by the application.
//!
//! The pipeline is generic: it knows nothing about what an "internal" or
//! "external" reference looks like, how an anchor should be rendered, or how
//! a content tree is organized. Applications supply that knowledge through
//! the traits in this module, wired together by a [`LinkHandlerConfig`]
//! that is resolved once per context and treated as read-only afterwards.
//!
//! # Contract summary
//!
//! | Collaborator | Operation | Contract |
//! |--------------|-----------|----------|
//! | [`LinkType`] | `accepts` | pure predicate, no side effects |
//! | | `resolve` | sets url/targets/trail; `Err` is fatal |
//! | [`LinkProcessor`] | `process` | applied strictly in list order; `Err` is fatal |
//! | [`LinkMarkupBuilder`] | `accepts` | pure predicate |
//! | | `build` | invoked at most once per link |

mod invalid;

pub use invalid::InvalidLinkType;

use anyhow::Result;
use std::sync::Arc;

use crate::core::{Link, LinkRequest, Resource};
use crate::markup::Anchor;

/// Default content root path for picking link targets.
pub const DEFAULT_ROOT_PATH_CONTENT: &str = "/content";

/// Default media/asset root path for picking link targets.
pub const DEFAULT_ROOT_PATH_MEDIA: &str = "/content/dam";

/// Recognizes and resolves one shape of link reference.
///
/// Link types are configured as an ordered list; for each request the first
/// type whose [`accepts`](Self::accepts) returns true performs the
/// resolution. A type is the only component allowed to decide
/// domain-specific acceptance and resolution semantics.
pub trait LinkType: Send + Sync {
    /// Stable id, stored as discriminator in the resolved link.
    fn id(&self) -> &'static str;

    /// Name of the node property this type primarily reads its reference
    /// from, for tooling. `None` if the type is not property-driven.
    fn primary_link_ref_property(&self) -> Option<&'static str> {
        None
    }

    /// Whether this type recognizes the given request. Must be a pure
    /// predicate.
    fn accepts(&self, request: &LinkRequest) -> bool;

    /// Resolve the link: set the URL, target nodes and redirect trail as
    /// applicable. Leaving the URL unset (or set to the invalid sentinel)
    /// marks the link invalid. An `Err` is a contract violation and aborts
    /// the whole pipeline call.
    fn resolve(&self, link: Link) -> Result<Link>;
}

/// Mutating pipeline step, applied before or after resolution.
///
/// Processors run strictly in configured order, each receiving the previous
/// one's output.
pub trait LinkProcessor: Send + Sync {
    /// Name used in error context when this processor fails.
    fn name(&self) -> &'static str;

    /// Process link metadata. An `Err` is a contract violation and aborts
    /// the whole pipeline call.
    fn process(&self, link: Link) -> Result<Link>;
}

/// Builds anchor markup for a resolved link.
///
/// Markup builders are dispatched first-accepting-wins, lazily: the
/// dispatch runs on the first read of [`Link::anchor`], after
/// post-processing has completed.
pub trait LinkMarkupBuilder: Send + Sync {
    /// Whether this builder can generate markup for the given link. Must be
    /// a pure predicate.
    fn accepts(&self, link: &Link) -> bool;

    /// Build the anchor. `None` means "accepted but produced nothing";
    /// markup then stays absent. Invoked at most once per link.
    fn build(&self, link: &Link) -> Option<Anchor>;
}

/// Application-specific configuration for link handling.
///
/// Resolved once per logical context by
/// [`LinkHandler::new`](crate::handler::LinkHandler::new); the collaborator
/// lists are ordered and treated as immutable for the handler's lifetime.
pub trait LinkHandlerConfig: Send + Sync {
    /// Supported link types, in dispatch order. An empty list is a
    /// deployment defect and fails every resolution.
    fn link_types(&self) -> Vec<Arc<dyn LinkType>>;

    /// Available markup builders, in dispatch order.
    fn markup_builders(&self) -> Vec<Arc<dyn LinkMarkupBuilder>> {
        Vec::new()
    }

    /// Processors applied before resolution, in order.
    fn pre_processors(&self) -> Vec<Arc<dyn LinkProcessor>> {
        Vec::new()
    }

    /// Processors applied after resolution, in order.
    fn post_processors(&self) -> Vec<Arc<dyn LinkProcessor>> {
        Vec::new()
    }

    /// Whether the given page node is acceptable as a link target.
    fn is_valid_link_target(&self, _page: &dyn Resource) -> bool {
        true
    }

    /// Whether the given page node carries redirect information.
    fn is_redirect(&self, _page: &dyn Resource) -> bool {
        false
    }

    /// Root path for picking link targets of the given type near the given
    /// context node, or `None` if not constrained.
    fn link_root_path(&self, _page: &dyn Resource, _link_type_id: &str) -> Option<String> {
        None
    }
}
