//! Anchor markup value built by [`LinkMarkupBuilder`](crate::spi::LinkMarkupBuilder)s.
//!
//! The pipeline treats the anchor as an opaque artifact: builders construct
//! it, [`Link`](crate::core::Link) caches it, callers render it. Only an
//! empty anchor element is modeled — link text and children are the
//! application's concern.

use std::collections::BTreeMap;
use std::fmt;

/// An anchor element: an ordered attribute map rendered as `<a ...></a>`.
///
/// Attributes render in stable alphabetical order, so output is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchor {
    attributes: BTreeMap<String, String>,
}

impl Anchor {
    pub const ATTR_HREF: &'static str = "href";
    pub const ATTR_TARGET: &'static str = "target";

    /// Anchor pointing at the given URL.
    pub fn new(href: impl Into<String>) -> Self {
        let mut anchor = Self::default();
        anchor.set_attr(Self::ATTR_HREF, href);
        anchor
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Fluent variant of [`set_attr`](Self::set_attr).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Read an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The `href` attribute.
    pub fn href(&self) -> Option<&str> {
        self.attr(Self::ATTR_HREF)
    }

    /// The `target` attribute.
    pub fn target(&self) -> Option<&str> {
        self.attr(Self::ATTR_TARGET)
    }

    /// All attributes in render order.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<a")?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape_attr(value))?;
        }
        write!(f, "></a>")
    }
}

/// Escape an attribute value for embedding in double quotes.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_href() {
        let anchor = Anchor::new("http://example.com/");
        assert_eq!(anchor.href(), Some("http://example.com/"));
        assert_eq!(anchor.to_string(), "<a href=\"http://example.com/\"></a>");
    }

    #[test]
    fn test_attributes_render_in_stable_order() {
        let anchor = Anchor::new("/about.html")
            .with_attr("target", "_blank")
            .with_attr("class", "external");
        assert_eq!(
            anchor.to_string(),
            "<a class=\"external\" href=\"/about.html\" target=\"_blank\"></a>"
        );
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut anchor = Anchor::new("/a");
        anchor.set_attr("href", "/b");
        assert_eq!(anchor.href(), Some("/b"));
    }

    #[test]
    fn test_attr_escaping() {
        let anchor = Anchor::new("/search?q=\"a&b\"<c>");
        assert_eq!(
            anchor.to_string(),
            "<a href=\"/search?q=&quot;a&amp;b&quot;&lt;c&gt;\"></a>"
        );
    }

    #[test]
    fn test_target_accessor() {
        let anchor = Anchor::new("/a").with_attr(Anchor::ATTR_TARGET, "_blank");
        assert_eq!(anchor.target(), Some("_blank"));
        assert!(Anchor::new("/a").target().is_none());
    }
}
