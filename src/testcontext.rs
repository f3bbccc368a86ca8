//! Shared dummy collaborators for pipeline tests.
//!
//! Small, deterministic link types, processors and markup builders that
//! stand in for an application's real ones. The content-tree conventions
//! are minimal: absolute paths under `/content` resolve to `<path>.html`,
//! anything under `/content/missing` is unresolvable, and
//! `/content/redirect/two-hops` walks two redirect hops.

use anyhow::{Result, anyhow};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::{Link, LinkRequest, SyntheticLinkResource};
use crate::markup::Anchor;
use crate::spi::{LinkHandlerConfig, LinkMarkupBuilder, LinkProcessor, LinkType};

// ---------------------------------------------------------------------------
// Link types
// ---------------------------------------------------------------------------

/// Resolves absolute content paths to `<path>.html`.
///
/// Paths under `/content/missing` are treated as pointing at nonexistent
/// targets; `/content/redirect/two-hops` resolves through two redirect
/// hops.
pub struct AbsolutePathLinkType;

impl AbsolutePathLinkType {
    pub const ID: &'static str = "path";
}

impl LinkType for AbsolutePathLinkType {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn primary_link_ref_property(&self) -> Option<&'static str> {
        Some("linkContentRef")
    }

    fn accepts(&self, request: &LinkRequest) -> bool {
        request.reference().is_some_and(|r| r.starts_with('/'))
    }

    fn resolve(&self, mut link: Link) -> Result<Link> {
        let reference = link
            .request()
            .reference()
            .ok_or_else(|| anyhow!("accepted request without reference"))?
            .to_string();

        if reference.starts_with("/content/missing") {
            link.set_link_reference_invalid(true);
            return Ok(link);
        }

        if reference == "/content/redirect/two-hops" {
            link.add_redirect_page(SyntheticLinkResource::new("/content/redirect/hop1").into_node());
            link.add_redirect_page(SyntheticLinkResource::new("/content/redirect/hop2").into_node());
            link.set_url(Some("/content/redirect/final.html".to_string()));
            return Ok(link);
        }

        link.set_target_page(Some(SyntheticLinkResource::new(reference.as_str()).into_node()));
        link.set_url(Some(format!("{reference}.html")));
        Ok(link)
    }
}

/// Passes scheme-qualified references (`http://...`) through unchanged.
pub struct SchemeLinkType;

impl SchemeLinkType {
    pub const ID: &'static str = "scheme";
}

impl LinkType for SchemeLinkType {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn accepts(&self, request: &LinkRequest) -> bool {
        request.reference().is_some_and(|r| r.contains("://"))
    }

    fn resolve(&self, mut link: Link) -> Result<Link> {
        let url = link.request().reference().map(str::to_string);
        link.set_url(url);
        Ok(link)
    }
}

/// Reads its reference from the `linkRef` property of the request's
/// resource.
pub struct PropertyLinkType;

impl PropertyLinkType {
    pub const ID: &'static str = "property";
}

impl LinkType for PropertyLinkType {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn primary_link_ref_property(&self) -> Option<&'static str> {
        Some("linkRef")
    }

    fn accepts(&self, request: &LinkRequest) -> bool {
        request.resource_property("linkRef").is_some()
    }

    fn resolve(&self, mut link: Link) -> Result<Link> {
        if let Some(reference) = link.request().resource_property("linkRef") {
            link.set_url(Some(format!("{reference}.html")));
        }
        Ok(link)
    }
}

/// Accepts references with a fixed prefix, counts `resolve` invocations and
/// always leaves the link unresolved.
pub struct RecordingLinkType {
    id: &'static str,
    prefix: &'static str,
    resolve_calls: AtomicUsize,
}

impl RecordingLinkType {
    pub fn new(id: &'static str, prefix: &'static str) -> Self {
        Self {
            id,
            prefix,
            resolve_calls: AtomicUsize::new(0),
        }
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }
}

impl LinkType for RecordingLinkType {
    fn id(&self) -> &'static str {
        self.id
    }

    fn accepts(&self, request: &LinkRequest) -> bool {
        request
            .reference()
            .is_some_and(|r| r.starts_with(self.prefix))
    }

    fn resolve(&self, mut link: Link) -> Result<Link> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        link.set_link_reference_invalid(true);
        Ok(link)
    }
}

// ---------------------------------------------------------------------------
// Processors
// ---------------------------------------------------------------------------

/// Appends a fixed string to the resolved URL, if one is set.
pub struct UrlRewriteProcessor {
    name: &'static str,
    append: String,
}

impl UrlRewriteProcessor {
    pub fn appending(name: &'static str, append: impl Into<String>) -> Self {
        Self {
            name,
            append: append.into(),
        }
    }
}

impl LinkProcessor for UrlRewriteProcessor {
    fn name(&self) -> &'static str {
        self.name
    }

    fn process(&self, mut link: Link) -> Result<Link> {
        if let Some(url) = link.url() {
            let rewritten = format!("{url}{}", self.append);
            link.set_url(Some(rewritten));
        }
        Ok(link)
    }
}

/// Always violates the processor contract.
pub struct FailingProcessor {
    name: &'static str,
}

impl FailingProcessor {
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl LinkProcessor for FailingProcessor {
    fn name(&self) -> &'static str {
        self.name
    }

    fn process(&self, _link: Link) -> Result<Link> {
        Err(anyhow!("processor contract violated"))
    }
}

// ---------------------------------------------------------------------------
// Markup builders
// ---------------------------------------------------------------------------

/// Builds a plain `<a href>` anchor for valid links and counts how often
/// `build` runs.
pub struct CountingMarkupBuilder {
    build_calls: AtomicUsize,
}

impl CountingMarkupBuilder {
    pub fn new() -> Self {
        Self {
            build_calls: AtomicUsize::new(0),
        }
    }

    pub fn build_calls(&self) -> usize {
        self.build_calls.load(Ordering::SeqCst)
    }
}

impl LinkMarkupBuilder for CountingMarkupBuilder {
    fn accepts(&self, link: &Link) -> bool {
        link.is_valid()
    }

    fn build(&self, link: &Link) -> Option<Anchor> {
        self.build_calls.fetch_add(1, Ordering::SeqCst);
        link.url().map(Anchor::new)
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration assembled from explicit collaborator lists.
pub struct TestConfig {
    link_types: Vec<Arc<dyn LinkType>>,
    markup_builders: Vec<Arc<dyn LinkMarkupBuilder>>,
    pre_processors: Vec<Arc<dyn LinkProcessor>>,
    post_processors: Vec<Arc<dyn LinkProcessor>>,
}

impl TestConfig {
    pub fn new(link_types: Vec<Arc<dyn LinkType>>) -> Self {
        Self {
            link_types,
            markup_builders: Vec::new(),
            pre_processors: Vec::new(),
            post_processors: Vec::new(),
        }
    }

    pub fn with_markup_builders(mut self, builders: Vec<Arc<dyn LinkMarkupBuilder>>) -> Self {
        self.markup_builders = builders;
        self
    }

    pub fn with_pre_processors(mut self, processors: Vec<Arc<dyn LinkProcessor>>) -> Self {
        self.pre_processors = processors;
        self
    }

    pub fn with_post_processors(mut self, processors: Vec<Arc<dyn LinkProcessor>>) -> Self {
        self.post_processors = processors;
        self
    }
}

impl LinkHandlerConfig for TestConfig {
    fn link_types(&self) -> Vec<Arc<dyn LinkType>> {
        self.link_types.clone()
    }

    fn markup_builders(&self) -> Vec<Arc<dyn LinkMarkupBuilder>> {
        self.markup_builders.clone()
    }

    fn pre_processors(&self) -> Vec<Arc<dyn LinkProcessor>> {
        self.pre_processors.clone()
    }

    fn post_processors(&self) -> Vec<Arc<dyn LinkProcessor>> {
        self.post_processors.clone()
    }
}
