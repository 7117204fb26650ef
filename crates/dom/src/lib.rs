//! DOM crate — host document model
//!
//! Arena-based document tree with activation-event dispatch.
//! Holds the slice of the platform the enhancement behaviors read:
//! elements with cached `id`/class lookups, fragment-style queries,
//! and bubbling click events with `prevent_default`.

pub mod event;
pub mod node;
pub mod tree;

pub use event::*;
pub use node::*;
pub use tree::Dom;
