//! Builtin link type for unresolvable requests.

use anyhow::Result;

use crate::core::{Link, LinkRequest};
use crate::spi::LinkType;

/// Link type used when no configured type accepts a request.
///
/// Never registered in a configuration: the orchestrator falls back to it
/// automatically, and [`LinkHandler::invalid`](crate::handler::LinkHandler::invalid)
/// uses it for placeholder links. It accepts nothing and resolves nothing,
/// so the resulting link stays invalid with no side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvalidLinkType;

impl InvalidLinkType {
    /// Link type id.
    pub const ID: &'static str = "invalid";
}

impl LinkType for InvalidLinkType {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn accepts(&self, _request: &LinkRequest) -> bool {
        false
    }

    fn resolve(&self, link: Link) -> Result<Link> {
        Ok(link)
    }
}
