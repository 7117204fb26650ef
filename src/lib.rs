//! # pagemotion
//!
//! Cosmetic enhancement behaviors for a static page, driven by a modeled
//! slice of browser platform: smooth-scrolling navigation to in-page
//! anchors, and a one-shot fade/slide reveal of sections as they enter
//! the viewport.
//!
//! The hosting environment builds the document ([`dom::Dom`]) and element
//! geometry ([`viewport::BoxMap`]), constructs a [`PageEngine`], and
//! calls [`PageEngine::initialize`] once the structure is ready. From
//! then on it feeds activations ([`PageEngine::click`]), wheel input, and
//! frames ([`PageEngine::tick`]); everything else — scroll animation,
//! intersection notifications, style transitions — happens inside the
//! engine. The two behaviors are independent and share no state.

#![forbid(unsafe_code)]

pub mod anchor;
pub mod engine;
pub mod reveal;

pub use anchor::AnchorScroller;
pub use engine::PageEngine;
pub use reveal::SectionRevealer;
