//! Generic link resolution pipeline for content trees.
//!
//! A loosely-typed link reference (a raw string, a content-tree node, or a
//! full [`LinkRequest`]) is resolved into a validated [`Link`]: URL, validity
//! flag, resolved target nodes, redirect trail and lazily-built anchor
//! markup. The concrete reference formats are not baked in — applications
//! supply ordered lists of [`LinkType`]s, [`LinkProcessor`]s and
//! [`LinkMarkupBuilder`]s via a [`LinkHandlerConfig`]; this crate owns
//! orchestration, ordering, fallback and invariant enforcement only.
//!
//! # Pipeline
//!
//! ```text
//! LinkRequest
//!     │
//!     ├─ type dispatch        first accepting LinkType wins
//!     ├─ pre-processors       applied strictly in order
//!     ├─ resolve              selected LinkType sets url/targets/trail
//!     ├─ fallback             one retry from a configured fallback property
//!     ├─ attach markup        deferred; built on first read only
//!     └─ post-processors      applied strictly in order
//!     │
//!     ▼
//! Link (valid or cleanly invalid)
//! ```
//!
//! An unresolvable reference is never an error: it yields a `Link` with
//! [`Link::is_valid`] `== false`. Only configuration defects (empty link
//! type list, a failing collaborator) abort with a [`HandlerError`].
//!
//! # Example
//!
//! ```no_run
//! use linkpipe::{LinkHandler, LinkHandlerConfig};
//!
//! fn resolve(config: &dyn LinkHandlerConfig) -> anyhow::Result<()> {
//!     let handler = LinkHandler::new(config);
//!     let link = handler.get("/content/site/en/about").build()?;
//!     if link.is_valid() {
//!         println!("resolved to {}", link.url().unwrap());
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod handler;
pub mod markup;
pub mod spi;

#[cfg(test)]
mod testcontext;

pub use crate::core::{
    Link, LinkArgs, LinkRequest, NodeRef, Resource, SyntheticLinkResource, UrlMode, VanityMode,
};
pub use crate::handler::{HandlerError, INVALID_LINK, LinkBuilder, LinkHandler};
pub use crate::markup::Anchor;
pub use crate::spi::{
    DEFAULT_ROOT_PATH_CONTENT, DEFAULT_ROOT_PATH_MEDIA, InvalidLinkType, LinkHandlerConfig,
    LinkMarkupBuilder, LinkProcessor, LinkType,
};
