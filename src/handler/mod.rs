//! Link resolution orchestrator.
//!
//! [`LinkHandler`] sequences the whole pipeline for one request:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ type dispatch      first accepting type wins │
//! │ pre-processors     strictly in order         │
//! │ resolve            selected LinkType         │
//! │ fallback           one retry, never more     │
//! │ attach markup      deferred until first read │
//! │ post-processors    strictly in order         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Markup is never built before post-processing has completed: the
//! orchestrator only *attaches* the builder dispatch; evaluation happens on
//! the first read of [`Link::anchor`], so post-processors can still change
//! the URL the builder will read.
//!
//! # Fallback
//!
//! When resolution yields an invalid link and the request's args name URL
//! fallback properties, the first non-blank value found on the request's
//! resource becomes the raw reference of a derived request, which runs
//! through the entire pipeline once more. The derived args have both
//! fallback property lists cleared, so the retry can never fall back again
//! — termination in one extra hop, without cycle detection.

mod builder;
mod error;

pub use builder::LinkBuilder;
pub use error::HandlerError;

use std::sync::Arc;
use tracing::{debug, trace};

use crate::core::{Link, LinkRequest, NodeRef};
use crate::spi::{InvalidLinkType, LinkHandlerConfig, LinkMarkupBuilder, LinkProcessor, LinkType};

/// Reserved sentinel URL marking an invalid link.
///
/// Distinguishable from any legitimate URL (no real hierarchy contains an
/// empty path component). Collaborators that compare URLs for validity must
/// use this exact literal.
pub const INVALID_LINK: &str = "/invalid///link";

/// Resolves link requests against a fixed set of collaborators.
///
/// Construction resolves the ordered collaborator lists from the
/// configuration exactly once; afterwards the handler is read-only and can
/// be shared freely. Each [`resolve`](Self::resolve) call operates on its
/// own request/link instances.
pub struct LinkHandler {
    link_types: Vec<Arc<dyn LinkType>>,
    markup_builders: Vec<Arc<dyn LinkMarkupBuilder>>,
    pre_processors: Vec<Arc<dyn LinkProcessor>>,
    post_processors: Vec<Arc<dyn LinkProcessor>>,
}

impl LinkHandler {
    /// Create a handler for the given configuration context.
    pub fn new(config: &dyn LinkHandlerConfig) -> Self {
        Self {
            link_types: config.link_types(),
            markup_builders: config.markup_builders(),
            pre_processors: config.pre_processors(),
            post_processors: config.post_processors(),
        }
    }

    /// Start building a link from a raw string reference.
    pub fn get(&self, reference: impl Into<String>) -> LinkBuilder<'_> {
        LinkBuilder::new(self, None, Some(reference.into()))
    }

    /// Start building a link from a content-tree node carrying link
    /// properties.
    pub fn get_resource(&self, resource: NodeRef) -> LinkBuilder<'_> {
        LinkBuilder::new(self, Some(resource), None)
    }

    /// Start building a link from a prepared request.
    pub fn get_request(&self, request: LinkRequest) -> LinkBuilder<'_> {
        LinkBuilder::from_request(self, request)
    }

    /// Run the full resolution pipeline for the given request.
    ///
    /// Never fails for an unresolvable reference — that yields an invalid
    /// [`Link`]. Fails only on configuration/contract violations.
    pub fn resolve(&self, request: LinkRequest) -> Result<Link, HandlerError> {
        if self.link_types.is_empty() {
            return Err(HandlerError::NoLinkTypes);
        }

        // detect link type - first accepting wins
        let link_type = self
            .link_types
            .iter()
            .find(|candidate| candidate.accepts(&request))
            .cloned()
            .unwrap_or_else(|| Arc::new(InvalidLinkType) as Arc<dyn LinkType>);
        trace!(link_type = link_type.id(), "link type selected");

        let location = location_of(&request);
        let mut link = Link::new(Arc::clone(&link_type), request);

        // preprocess link before resolving
        for processor in &self.pre_processors {
            link = processor
                .process(link)
                .map_err(|source| HandlerError::PreProcessor {
                    name: processor.name(),
                    location: location.clone(),
                    source,
                })?;
        }

        // resolve link
        link = link_type
            .resolve(link)
            .map_err(|source| HandlerError::LinkType {
                id: link_type.id(),
                location: location.clone(),
                source,
            })?;

        // if link is invalid - check if a fallback link property is set and
        // retry resolution with it
        if !link.is_valid() {
            if let Some(fallback) = fallback_request(link.request()) {
                debug!(resource = %location, "retrying resolution with fallback link property");
                let fallback_link = self.resolve(fallback)?;
                if fallback_link.is_valid() {
                    // already post-processed and markup-attached by the
                    // recursive pipeline run
                    return Ok(fallback_link);
                }
            }
        }

        // defer markup generation to the first read - first accepting
        // builder wins
        if !self.markup_builders.is_empty() {
            let builders = self.markup_builders.clone();
            link.set_anchor_builder(move |l| {
                builders
                    .iter()
                    .find(|builder| builder.accepts(l))
                    .and_then(|builder| builder.build(l))
            });
        }

        // postprocess link after resolving
        for processor in &self.post_processors {
            link = processor
                .process(link)
                .map_err(|source| HandlerError::PostProcessor {
                    name: processor.name(),
                    location: location.clone(),
                    source,
                })?;
        }

        debug!(valid = link.is_valid(), "link resolved");
        Ok(link)
    }

    /// An empty link marked as invalid, without running the pipeline.
    ///
    /// For callers that need a safe placeholder.
    pub fn invalid(&self) -> Link {
        Link::new(Arc::new(InvalidLinkType), LinkRequest::empty())
    }
}

/// Content-tree location for error context.
fn location_of(request: &LinkRequest) -> String {
    request
        .resource()
        .map(|resource| resource.path().to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Derive a request that reads the link target from a configured fallback
/// property, or `None` if fallback does not apply.
fn fallback_request(request: &LinkRequest) -> Option<LinkRequest> {
    // works only when resolution was based on a resource
    let resource = request.resource()?;

    let property_names = request.args().link_target_url_fallback_property();
    if property_names.is_empty() {
        return None;
    }

    // first non-blank value wins
    let target_url = property_names
        .iter()
        .filter_map(|name| resource.get(name))
        .find(|value| !value.trim().is_empty())?;

    // the derived args must not trigger this fallback path again
    let mut fallback_args = request.args().clone();
    fallback_args.clear_fallback_properties();

    Some(LinkRequest::new(None, Some(target_url), fallback_args))
}
