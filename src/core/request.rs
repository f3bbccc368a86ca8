//! Link resolution request ([`LinkRequest`]).

use crate::core::args::LinkArgs;
use crate::core::node::NodeRef;

/// Everything needed to resolve one link: the reference (a raw string, a
/// content-tree node carrying link properties, or both absent) plus the
/// resolution parameters.
///
/// A request is immutable once constructed. The fallback step derives a
/// *new* request from a configured alternate property; it never mutates the
/// original.
#[derive(Debug, Clone)]
pub struct LinkRequest {
    resource: Option<NodeRef>,
    reference: Option<String>,
    args: LinkArgs,
}

impl LinkRequest {
    pub fn new(resource: Option<NodeRef>, reference: Option<String>, args: LinkArgs) -> Self {
        Self {
            resource,
            reference,
            args,
        }
    }

    /// Request for a raw string reference with default args.
    pub fn from_reference(reference: impl Into<String>) -> Self {
        Self::new(None, Some(reference.into()), LinkArgs::default())
    }

    /// Request for a content-tree node carrying link properties.
    pub fn from_resource(resource: NodeRef) -> Self {
        Self::new(Some(resource), None, LinkArgs::default())
    }

    /// Request with neither a reference nor a resource. No link type will
    /// accept it; resolution yields a cleanly invalid link.
    pub fn empty() -> Self {
        Self::new(None, None, LinkArgs::default())
    }

    /// Content-tree node the link properties are read from, if any.
    pub fn resource(&self) -> Option<&NodeRef> {
        self.resource.as_ref()
    }

    /// Raw string reference, if any.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Resolution parameters.
    pub fn args(&self) -> &LinkArgs {
        &self.args
    }

    /// Read a string property from the request's resource.
    pub fn resource_property(&self, name: &str) -> Option<String> {
        self.resource.as_ref().and_then(|r| r.get(name))
    }
}

impl PartialEq for LinkRequest {
    fn eq(&self, other: &Self) -> bool {
        self.resource.as_ref().map(|r| r.path()) == other.resource.as_ref().map(|r| r.path())
            && self.reference == other.reference
            && self.args == other.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::node::SyntheticLinkResource;

    #[test]
    fn test_from_reference() {
        let request = LinkRequest::from_reference("/content/site/en");
        assert_eq!(request.reference(), Some("/content/site/en"));
        assert!(request.resource().is_none());
        assert_eq!(*request.args(), LinkArgs::default());
    }

    #[test]
    fn test_resource_property() {
        let node = SyntheticLinkResource::new("/content/x")
            .property("linkTitle", "Title")
            .into_node();
        let request = LinkRequest::from_resource(node);

        assert_eq!(request.resource_property("linkTitle").as_deref(), Some("Title"));
        assert_eq!(request.resource_property("missing"), None);
    }

    #[test]
    fn test_empty() {
        let request = LinkRequest::empty();
        assert!(request.reference().is_none());
        assert!(request.resource().is_none());
    }

    #[test]
    fn test_equality_by_resource_path() {
        let a = LinkRequest::from_resource(SyntheticLinkResource::new("/content/x").into_node());
        let b = LinkRequest::from_resource(SyntheticLinkResource::new("/content/x").into_node());
        let c = LinkRequest::from_resource(SyntheticLinkResource::new("/content/y").into_node());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
