//! Resolution parameters ([`LinkArgs`]).
//!
//! `LinkArgs` carries everything that influences how a single reference is
//! resolved: URL building hints that are passed through to the application's
//! externalization layer, markup hints like the window target, an open
//! property bag for application-specific collaborators, and the fallback
//! property-name lists that drive the single-hop fallback retry.
//!
//! Cloning is a genuine deep copy — every list and map field is owned, so a
//! derived `LinkArgs` (as built for a fallback request) is fully independent
//! of its source.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the resolved URL should be externalized.
///
/// Interpreted by the application's URL layer; the pipeline carries it
/// opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlMode {
    /// Externalize according to the current request context.
    Default,
    /// Always build a full URL including hostname.
    FullUrl,
    /// Full URL, forced non-secure scheme.
    FullUrlForceNonSecure,
    /// Full URL, forced secure scheme.
    FullUrlSecure,
    /// Never include a hostname.
    NoHostname,
}

/// Whether vanity paths take part in URL building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VanityMode {
    /// Use the application default.
    Default,
    /// Always prefer the vanity path when one exists.
    Always,
    /// Never use vanity paths.
    Never,
}

/// Parameters influencing the link resolution process.
///
/// All setters are fluent and return `self`, so args can be assembled
/// inline:
///
/// ```
/// use linkpipe::{LinkArgs, UrlMode};
///
/// let args = LinkArgs::new()
///     .with_url_mode(UrlMode::FullUrl)
///     .with_suffix("detail")
///     .with_link_target_url_fallback_property(["legacyUrl"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkArgs {
    url_mode: Option<UrlMode>,
    vanity_mode: Option<VanityMode>,
    dummy_link: bool,
    dummy_link_url: Option<String>,
    selectors: Option<String>,
    extension: Option<String>,
    suffix: Option<String>,
    query_string: Option<String>,
    fragment: Option<String>,
    window_target: Option<String>,
    disable_suffix_selector: bool,
    properties: BTreeMap<String, String>,
    link_target_url_fallback_property: Vec<String>,
    link_target_window_target_fallback_property: Vec<String>,
}

impl LinkArgs {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// URL mode for externalizing the URL.
    pub fn url_mode(&self) -> Option<UrlMode> {
        self.url_mode
    }

    /// Vanity mode for building the URL.
    pub fn vanity_mode(&self) -> Option<VanityMode> {
        self.vanity_mode
    }

    /// Whether a dummy link should be rendered when the link is invalid.
    pub fn is_dummy_link(&self) -> bool {
        self.dummy_link
    }

    /// Custom dummy link URL. `None` means the default dummy URL is used.
    pub fn dummy_link_url(&self) -> Option<&str> {
        self.dummy_link_url.as_deref()
    }

    /// Selector string.
    pub fn selectors(&self) -> Option<&str> {
        self.selectors.as_deref()
    }

    /// File extension.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Suffix string.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Query parameters string (already url-encoded).
    pub fn query_string(&self) -> Option<&str> {
        self.query_string.as_deref()
    }

    /// Fragment identifier.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Link window target.
    pub fn window_target(&self) -> Option<&str> {
        self.window_target.as_deref()
    }

    /// Whether the automatic suffix selector is suppressed.
    pub fn is_disable_suffix_selector(&self) -> bool {
        self.disable_suffix_selector
    }

    /// Open property bag for application-specific markup builders and
    /// processors.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Ordered property names to read an alternate link target URL from when
    /// primary resolution fails.
    pub fn link_target_url_fallback_property(&self) -> &[String] {
        &self.link_target_url_fallback_property
    }

    /// Ordered property names to read an alternate window target from.
    pub fn link_target_window_target_fallback_property(&self) -> &[String] {
        &self.link_target_window_target_fallback_property
    }

    // ------------------------------------------------------------------
    // Fluent setters
    // ------------------------------------------------------------------

    pub fn with_url_mode(mut self, value: UrlMode) -> Self {
        self.url_mode = Some(value);
        self
    }

    pub fn with_vanity_mode(mut self, value: VanityMode) -> Self {
        self.vanity_mode = Some(value);
        self
    }

    pub fn with_dummy_link(mut self, value: bool) -> Self {
        self.dummy_link = value;
        self
    }

    pub fn with_dummy_link_url(mut self, value: impl Into<String>) -> Self {
        self.dummy_link_url = Some(value.into());
        self
    }

    pub fn with_selectors(mut self, value: impl Into<String>) -> Self {
        self.selectors = Some(value.into());
        self
    }

    pub fn with_extension(mut self, value: impl Into<String>) -> Self {
        self.extension = Some(value.into());
        self
    }

    pub fn with_suffix(mut self, value: impl Into<String>) -> Self {
        self.suffix = Some(value.into());
        self
    }

    pub fn with_query_string(mut self, value: impl Into<String>) -> Self {
        self.query_string = Some(value.into());
        self
    }

    pub fn with_fragment(mut self, value: impl Into<String>) -> Self {
        self.fragment = Some(value.into());
        self
    }

    pub fn with_window_target(mut self, value: impl Into<String>) -> Self {
        self.window_target = Some(value.into());
        self
    }

    pub fn with_disable_suffix_selector(mut self, value: bool) -> Self {
        self.disable_suffix_selector = value;
        self
    }

    /// Set a single property in the open property bag.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Merge a property map into the open property bag.
    pub fn with_properties<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.properties
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Ordered property names used to read an alternate link target URL when
    /// primary resolution fails. Read-only: the properties are never written
    /// back.
    pub fn with_link_target_url_fallback_property<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.link_target_url_fallback_property = names.into_iter().map(Into::into).collect();
        self
    }

    /// Ordered property names used to read an alternate window target.
    pub fn with_link_target_window_target_fallback_property<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.link_target_window_target_fallback_property =
            names.into_iter().map(Into::into).collect();
        self
    }

    /// Clear both fallback property-name lists.
    ///
    /// Called on the derived args of a fallback request so the retry can
    /// never trigger the fallback path again. Fallback chaining is limited
    /// to a single hop by construction.
    pub fn clear_fallback_properties(&mut self) {
        self.link_target_url_fallback_property.clear();
        self.link_target_window_target_fallback_property.clear();
    }
}
