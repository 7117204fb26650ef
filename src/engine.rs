//! Page enhancement engine.
//!
//! Owns the platform pieces (document, listeners, styles, geometry,
//! scroller, intersection observer) and the two behaviors, and drives
//! them through a cooperative frame loop. The hosting environment builds
//! the document and geometry, calls [`PageEngine::initialize`] once the
//! structure is ready, and then feeds input events and ticks.

use common::PageError;
use dom::{ActivationEvent, Dom, ListenerMap, NodeId, dispatch_activation};
use scroll::Scroller;
use style::StyleMap;
use viewport::{BoxMap, IntersectionObserver, ObserverOptions, Viewport};

use crate::anchor::AnchorScroller;
use crate::reveal::{REVEAL_THRESHOLD, SECTION_CLASS, SectionRevealer};

/// The assembled page: platform state plus the two enhancement behaviors.
pub struct PageEngine {
    pub dom: Dom,
    pub listeners: ListenerMap,
    pub styles: StyleMap,
    pub boxes: BoxMap,
    pub viewport: Viewport,
    pub scroller: Scroller,
    pub observer: IntersectionObserver,
    anchors: AnchorScroller,
    revealer: SectionRevealer,
    initialized: bool,
}

impl PageEngine {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            dom: Dom::new(),
            listeners: ListenerMap::new(),
            styles: StyleMap::new(),
            boxes: BoxMap::new(),
            viewport,
            scroller: Scroller::new(),
            observer: IntersectionObserver::new(ObserverOptions {
                threshold: REVEAL_THRESHOLD,
                root_margin: 0.0,
            }),
            anchors: AnchorScroller::new(),
            revealer: SectionRevealer::new(),
            initialized: false,
        }
    }

    /// Install both behaviors. Called once by the hosting environment
    /// after the document structure and geometry are in place; repeated
    /// calls are no-ops.
    pub fn initialize(&mut self) -> Result<(), PageError> {
        if self.initialized {
            return Ok(());
        }
        let root = self
            .dom
            .root()
            .ok_or_else(|| PageError::Dom("document has no root".into()))?;

        self.scroller
            .set_extent(self.boxes.content_height(), self.viewport.height);

        self.anchors.attach(&self.dom, root, &mut self.listeners);

        let sections = self.dom.elements_by_class(root, SECTION_CLASS);
        self.revealer
            .attach(&sections, &mut self.styles, &mut self.observer);

        self.initialized = true;
        Ok(())
    }

    /// Dispatch a user activation at `target`, then resolve any scroll
    /// requests the anchor behavior queued.
    ///
    /// Returns `true` if the default action is still allowed (i.e. no
    /// fragment-anchor listener handled the activation).
    pub fn click(&mut self, target: NodeId) -> bool {
        let mut event = ActivationEvent::new(target);
        let allowed = dispatch_activation(&self.dom, &self.listeners, &mut event);
        self.anchors
            .resolve_requests(&self.dom, &self.boxes, &mut self.scroller);
        allowed
    }

    /// User wheel input: instant scroll by `dy` pixels.
    pub fn scroll_wheel(&mut self, dy: f32) {
        self.scroller.scroll_by(dy);
    }

    /// One cooperative frame:
    /// 1. advance the smooth-scroll animation,
    /// 2. recompute intersections at the new scroll offset,
    /// 3. deliver the batched records to the reveal behavior,
    /// 4. advance style transitions by `delta_ms`.
    pub fn tick(&mut self, delta_ms: f32) {
        self.scroller.tick();

        let root_rect = self.viewport.rect_at(self.scroller.y());
        self.observer.compute(&self.boxes, root_rect);
        let records = self.observer.take_records();
        self.revealer
            .process(&records, &mut self.styles, &mut self.observer);

        self.styles.tick(delta_ms);
    }

    /// Number of sections revealed so far.
    pub fn revealed_sections(&self) -> usize {
        self.revealer.revealed()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
