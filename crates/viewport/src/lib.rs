//! # Viewport Crate
//!
//! The viewport model, host-supplied element geometry, and the
//! viewport-intersection observation facility. Layout itself is out of
//! scope: the hosting environment tells us where each element sits in
//! document coordinates, and this crate answers "how much of it is
//! visible right now".

#![forbid(unsafe_code)]

pub mod observer;

pub use observer::{IntersectionObserver, IntersectionRecord, ObserverOptions};

use std::collections::HashMap;

use common::{PageError, Rect};
use dom::NodeId;

// ─────────────────────────────────────────────────────────────────────────────
// Viewport
// ─────────────────────────────────────────────────────────────────────────────

/// The visible window onto the document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The viewport's rectangle in document coordinates when the page is
    /// scrolled to `scroll_y`.
    pub fn rect_at(&self, scroll_y: f32) -> Rect {
        Rect::new(0.0, scroll_y, self.width, self.height)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// BoxMap
// ─────────────────────────────────────────────────────────────────────────────

/// Element geometry in document coordinates, supplied by the host.
#[derive(Clone, Debug, Default)]
pub struct BoxMap {
    rects: HashMap<NodeId, Rect>,
}

impl BoxMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where `node` sits in the document.
    ///
    /// Non-finite geometry is rejected: it would poison every visibility
    /// ratio computed from it.
    pub fn set(&mut self, node: NodeId, rect: Rect) -> Result<(), PageError> {
        if !rect.is_finite() {
            return Err(PageError::Geometry(format!(
                "non-finite rect for node {node:?}"
            )));
        }
        self.rects.insert(node, rect);
        Ok(())
    }

    pub fn get(&self, node: NodeId) -> Option<Rect> {
        self.rects.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The bottom edge of the lowest element — the document's scrollable
    /// content height. Zero when no geometry has been supplied.
    pub fn content_height(&self) -> f32 {
        self.rects
            .values()
            .map(|r| r.bottom())
            .fold(0.0, f32::max)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn node(slot: u32) -> NodeId {
        NodeId {
            slot,
            generation: 0,
        }
    }

    #[test]
    fn viewport_rect_tracks_scroll() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.rect_at(0.0), Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(vp.rect_at(250.0), Rect::new(0.0, 250.0, 800.0, 600.0));
    }

    #[test]
    fn box_map_set_get() {
        let mut boxes = BoxMap::new();
        let n = node(1);
        boxes.set(n, Rect::new(0.0, 100.0, 800.0, 400.0)).unwrap();
        assert_eq!(boxes.get(n), Some(Rect::new(0.0, 100.0, 800.0, 400.0)));
        assert_eq!(boxes.get(node(2)), None);
        assert_eq!(boxes.len(), 1);
    }

    #[test]
    fn box_map_rejects_non_finite_rect() {
        let mut boxes = BoxMap::new();
        let err = boxes.set(node(1), Rect::new(0.0, f32::NAN, 10.0, 10.0));
        assert!(matches!(err, Err(PageError::Geometry(_))));
        assert!(boxes.is_empty());
    }

    #[test]
    fn content_height_is_lowest_bottom_edge() {
        let mut boxes = BoxMap::new();
        assert_eq!(boxes.content_height(), 0.0);
        boxes.set(node(1), Rect::new(0.0, 0.0, 800.0, 600.0)).unwrap();
        boxes.set(node(2), Rect::new(0.0, 600.0, 800.0, 900.0)).unwrap();
        assert_eq!(boxes.content_height(), 1500.0);
    }
}
