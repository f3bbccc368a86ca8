//! Core data model - pure values carried through the resolution pipeline.

mod args;
mod link;
mod node;
mod request;

pub use args::{LinkArgs, UrlMode, VanityMode};
pub use link::Link;
pub use node::{NodeRef, Resource, SyntheticLinkResource};
pub use request::LinkRequest;
