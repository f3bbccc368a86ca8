//! Fluent link builder returned by the [`LinkHandler`] entry points.

use crate::core::{Link, LinkArgs, LinkRequest, NodeRef, UrlMode, VanityMode};
use crate::handler::{HandlerError, LinkHandler};
use crate::markup::Anchor;

/// Assembles a [`LinkRequest`] step by step and runs it through the
/// handler's pipeline.
///
/// ```no_run
/// # fn demo(handler: &linkpipe::LinkHandler) -> Result<(), linkpipe::HandlerError> {
/// let markup = handler
///     .get("/content/site/en/about")
///     .suffix("detail")
///     .window_target("_blank")
///     .build_markup()?;
/// # Ok(()) }
/// ```
#[must_use = "call build() to run the resolution pipeline"]
pub struct LinkBuilder<'a> {
    handler: &'a LinkHandler,
    resource: Option<NodeRef>,
    reference: Option<String>,
    args: LinkArgs,
}

impl<'a> LinkBuilder<'a> {
    pub(crate) fn new(
        handler: &'a LinkHandler,
        resource: Option<NodeRef>,
        reference: Option<String>,
    ) -> Self {
        Self {
            handler,
            resource,
            reference,
            args: LinkArgs::default(),
        }
    }

    pub(crate) fn from_request(handler: &'a LinkHandler, request: LinkRequest) -> Self {
        Self {
            handler,
            resource: request.resource().cloned(),
            reference: request.reference().map(str::to_string),
            args: request.args().clone(),
        }
    }

    /// Replace all args at once.
    pub fn args(mut self, args: LinkArgs) -> Self {
        self.args = args;
        self
    }

    pub fn url_mode(mut self, value: UrlMode) -> Self {
        self.args = self.args.with_url_mode(value);
        self
    }

    pub fn vanity_mode(mut self, value: VanityMode) -> Self {
        self.args = self.args.with_vanity_mode(value);
        self
    }

    pub fn dummy_link(mut self, value: bool) -> Self {
        self.args = self.args.with_dummy_link(value);
        self
    }

    pub fn dummy_link_url(mut self, value: impl Into<String>) -> Self {
        self.args = self.args.with_dummy_link_url(value);
        self
    }

    pub fn selectors(mut self, value: impl Into<String>) -> Self {
        self.args = self.args.with_selectors(value);
        self
    }

    pub fn extension(mut self, value: impl Into<String>) -> Self {
        self.args = self.args.with_extension(value);
        self
    }

    pub fn suffix(mut self, value: impl Into<String>) -> Self {
        self.args = self.args.with_suffix(value);
        self
    }

    pub fn query_string(mut self, value: impl Into<String>) -> Self {
        self.args = self.args.with_query_string(value);
        self
    }

    pub fn fragment(mut self, value: impl Into<String>) -> Self {
        self.args = self.args.with_fragment(value);
        self
    }

    pub fn window_target(mut self, value: impl Into<String>) -> Self {
        self.args = self.args.with_window_target(value);
        self
    }

    pub fn disable_suffix_selector(mut self, value: bool) -> Self {
        self.args = self.args.with_disable_suffix_selector(value);
        self
    }

    /// Set a property in the open args property bag.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args = self.args.with_property(key, value);
        self
    }

    /// Ordered fallback property names for the link target URL.
    pub fn link_target_url_fallback_property<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = self.args.with_link_target_url_fallback_property(names);
        self
    }

    /// Ordered fallback property names for the window target.
    pub fn link_target_window_target_fallback_property<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = self
            .args
            .with_link_target_window_target_fallback_property(names);
        self
    }

    /// Run the resolution pipeline and return the link metadata.
    pub fn build(self) -> Result<Link, HandlerError> {
        let request = LinkRequest::new(self.resource, self.reference, self.args);
        self.handler.resolve(request)
    }

    /// Resolve and return the URL only. `None` if the link is invalid.
    pub fn build_url(self) -> Result<Option<String>, HandlerError> {
        Ok(self.build()?.url().map(str::to_string))
    }

    /// Resolve and return the anchor element only.
    pub fn build_anchor(self) -> Result<Option<Anchor>, HandlerError> {
        let mut link = self.build()?;
        Ok(link.anchor().cloned())
    }

    /// Resolve and return the anchor markup (opening tag) only.
    pub fn build_markup(self) -> Result<Option<String>, HandlerError> {
        let mut link = self.build()?;
        Ok(link.markup())
    }
}
