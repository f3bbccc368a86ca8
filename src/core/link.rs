//! Resolved link ([`Link`]).
//!
//! A `Link` is created once per pipeline invocation, mutated by the selected
//! link type and the processor chains while the pipeline runs, and treated
//! as read-only afterwards — with one exception: the first read of the
//! anchor markup consumes the attached builder and caches its output.
//!
//! # Validity
//!
//! ```text
//! is_valid() ⇔ link type set ∧ url set ∧ url ≠ INVALID_LINK
//! ```
//!
//! An invalid link is a normal value, not an error. Callers branch on
//! [`Link::is_valid`].

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::core::node::NodeRef;
use crate::core::request::LinkRequest;
use crate::handler::INVALID_LINK;
use crate::markup::Anchor;
use crate::spi::LinkType;

/// Property holding an editorial link title on the request's resource.
const PN_LINK_TITLE: &str = "linkTitle";

/// Builds the anchor on first read. Holds the full markup-builder dispatch
/// captured by the orchestrator.
type AnchorBuilder = Box<dyn FnOnce(&Link) -> Option<Anchor> + Send>;

/// Deferred anchor markup.
///
/// The transition `Pending -> Resolved` happens exactly once, on the first
/// read, and is the only allowed mutation after the pipeline completes.
enum AnchorState {
    /// No builder attached; markup stays absent.
    Empty,
    /// Builder attached, not yet evaluated.
    Pending(AnchorBuilder),
    /// Evaluated exactly once; cached output.
    Resolved(Option<Anchor>),
}

/// A link processed and resolved by the pipeline.
pub struct Link {
    link_type: Option<Arc<dyn LinkType>>,
    request: LinkRequest,
    link_reference_invalid: bool,
    url: Option<String>,
    target_page: Option<NodeRef>,
    target_asset: Option<NodeRef>,
    target_rendition: Option<NodeRef>,
    redirect_pages: Vec<NodeRef>,
    anchor: AnchorState,
}

impl Link {
    /// Create a fresh, unresolved link for the given type and request.
    pub fn new(link_type: Arc<dyn LinkType>, request: LinkRequest) -> Self {
        Self {
            link_type: Some(link_type),
            request,
            link_reference_invalid: false,
            url: None,
            target_page: None,
            target_asset: None,
            target_rendition: None,
            redirect_pages: Vec::new(),
            anchor: AnchorState::Empty,
        }
    }

    /// The link type that produced this link.
    pub fn link_type(&self) -> Option<&Arc<dyn LinkType>> {
        self.link_type.as_ref()
    }

    /// Stable id of the link type that produced this link.
    pub fn link_type_id(&self) -> Option<&'static str> {
        self.link_type.as_ref().map(|t| t.id())
    }

    /// The request this link was resolved from.
    pub fn request(&self) -> &LinkRequest {
        &self.request
    }

    /// Replace the request. Used by processors that rewrite the reference.
    pub fn set_request(&mut self, request: LinkRequest) {
        self.request = request;
    }

    /// True if a reference was set but could not be resolved.
    pub fn is_link_reference_invalid(&self) -> bool {
        self.link_reference_invalid
    }

    pub fn set_link_reference_invalid(&mut self, value: bool) {
        self.link_reference_invalid = value;
    }

    /// Resolved link URL.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, url: Option<String>) {
        self.url = url;
    }

    /// Target page (internal-style links only).
    pub fn target_page(&self) -> Option<&NodeRef> {
        self.target_page.as_ref()
    }

    pub fn set_target_page(&mut self, page: Option<NodeRef>) {
        self.target_page = page;
    }

    /// Target asset (media-style links only).
    pub fn target_asset(&self) -> Option<&NodeRef> {
        self.target_asset.as_ref()
    }

    pub fn set_target_asset(&mut self, asset: Option<NodeRef>) {
        self.target_asset = asset;
    }

    /// Target rendition (media-style links only).
    pub fn target_rendition(&self) -> Option<&NodeRef> {
        self.target_rendition.as_ref()
    }

    pub fn set_target_rendition(&mut self, rendition: Option<NodeRef>) {
        self.target_rendition = rendition;
    }

    /// Intermediate redirect targets visited during resolution, ordered
    /// most-recently-discovered-first.
    pub fn redirect_pages(&self) -> &[NodeRef] {
        &self.redirect_pages
    }

    /// Record a visited redirect target. Inserted at the front so the trail
    /// stays closest-to-final-hop-first.
    pub fn add_redirect_page(&mut self, page: NodeRef) {
        self.redirect_pages.insert(0, page);
    }

    /// Editorial link title, read from the request's resource.
    pub fn title(&self) -> Option<String> {
        self.request.resource_property(PN_LINK_TITLE)
    }

    /// Attach the deferred anchor builder. Called by the orchestrator after
    /// resolution; the builder runs on the first [`anchor`](Self::anchor)
    /// read, so post-processors can still change the fields it reads.
    pub fn set_anchor_builder<F>(&mut self, builder: F)
    where
        F: FnOnce(&Link) -> Option<Anchor> + Send + 'static,
    {
        self.anchor = AnchorState::Pending(Box::new(builder));
    }

    /// Set the anchor directly, skipping deferred building.
    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = AnchorState::Resolved(Some(anchor));
    }

    /// Anchor element for this link.
    ///
    /// On first read the attached builder (if any) is evaluated and its
    /// output cached; the builder is dropped afterwards and never re-runs,
    /// even if link fields change later. Callers must not mutate a link
    /// after reading its anchor.
    pub fn anchor(&mut self) -> Option<&Anchor> {
        if matches!(self.anchor, AnchorState::Pending(_)) {
            let state = std::mem::replace(&mut self.anchor, AnchorState::Resolved(None));
            if let AnchorState::Pending(build) = state {
                let built = build(&*self);
                self.anchor = AnchorState::Resolved(built);
            }
        }
        match &self.anchor {
            AnchorState::Resolved(anchor) => anchor.as_ref(),
            AnchorState::Empty | AnchorState::Pending(_) => None,
        }
    }

    /// Attributes of the anchor element, or `None` if there is no anchor.
    pub fn anchor_attributes(&mut self) -> Option<BTreeMap<String, String>> {
        self.anchor().map(|a| a.attributes().clone())
    }

    /// Anchor markup: the opening tag only.
    pub fn markup(&mut self) -> Option<String> {
        let rendered = self.anchor()?.to_string();
        Some(
            rendered
                .strip_suffix("</a>")
                .unwrap_or(&rendered)
                .to_string(),
        )
    }

    /// True if the link resolved successfully.
    pub fn is_valid(&self) -> bool {
        self.link_type.is_some()
            && matches!(self.url.as_deref(), Some(url) if url != INVALID_LINK)
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Link");
        s.field("valid", &self.is_valid());
        if self.is_valid() {
            s.field("url", &self.url);
        } else {
            s.field("link_reference_invalid", &self.link_reference_invalid);
        }
        if let Some(link_type) = &self.link_type {
            s.field("link_type", &link_type.id());
        }
        if let Some(page) = &self.target_page {
            s.field("target_page", &page.path());
        }
        if let Some(asset) = &self.target_asset {
            s.field("target_asset", &asset.path());
        }
        if let Some(rendition) = &self.target_rendition {
            s.field("target_rendition", &rendition.path());
        }
        if !self.redirect_pages.is_empty() {
            let paths: Vec<&str> = self.redirect_pages.iter().map(|p| p.path()).collect();
            s.field("redirect_pages", &paths);
        }
        s.finish_non_exhaustive()
    }
}

/// JSON view of a resolved link: validity, URL and type id. The request,
/// node handles and deferred markup are deliberately not serialized.
impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 1 + usize::from(self.url.is_some()) + usize::from(self.link_type.is_some());
        let mut state = serializer.serialize_struct("Link", len)?;
        state.serialize_field("valid", &self.is_valid())?;
        if let Some(url) = &self.url {
            state.serialize_field("url", url)?;
        }
        if let Some(link_type) = &self.link_type {
            state.serialize_field("linkType", link_type.id())?;
        }
        state.end()
    }
}
