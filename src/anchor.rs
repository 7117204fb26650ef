//! Anchor smooth-scrolling behavior.
//!
//! Intercepts activation of every link whose target is an in-page
//! fragment (`href="#..."`). The listener suppresses the default
//! navigation and queues the fragment identifier; resolution against the
//! document and the actual scroll happen afterwards, so the handler
//! returns immediately. A fragment that matches no element is logged and
//! dropped rather than allowed to fault the page.

use std::cell::RefCell;
use std::rc::Rc;

use dom::{ActivationListener, Dom, ListenerMap, NodeId};
use scroll::{ScrollBehavior, Scroller};
use viewport::BoxMap;

/// The in-page navigation behavior: one listener per fragment anchor.
#[derive(Default)]
pub struct AnchorScroller {
    requests: Rc<RefCell<Vec<String>>>,
    attached: usize,
}

impl AnchorScroller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an activation listener on every `<a href="#...">` in the
    /// subtree rooted at `root`. With no matching anchors this registers
    /// nothing and has no effect.
    pub fn attach(&mut self, dom: &Dom, root: NodeId, listeners: &mut ListenerMap) {
        for anchor in dom.elements_by_tag(root, "a") {
            let Some(href) = dom.attr(anchor, "href") else {
                continue;
            };
            let Some(fragment) = href.strip_prefix('#') else {
                continue;
            };
            let fragment = fragment.to_string();
            let queue = Rc::clone(&self.requests);
            listeners.add(
                anchor,
                ActivationListener::new(move |event| {
                    event.prevent_default();
                    queue.borrow_mut().push(fragment.clone());
                }),
            );
            self.attached += 1;
        }
    }

    /// Number of anchors a listener was registered on.
    pub fn attached(&self) -> usize {
        self.attached
    }

    /// Drain the fragment identifiers queued by activations since the
    /// last call.
    pub fn take_requests(&self) -> Vec<String> {
        std::mem::take(&mut *self.requests.borrow_mut())
    }

    /// Resolve queued requests against the document and issue one smooth
    /// scroll per resolvable fragment. Unresolvable fragments are a
    /// content-authoring error, not a runtime emergency: warn and drop.
    pub fn resolve_requests(&self, dom: &Dom, boxes: &BoxMap, scroller: &mut Scroller) {
        let Some(root) = dom.root() else {
            return;
        };
        for fragment in self.take_requests() {
            match dom.element_by_id(root, &fragment) {
                Some(element) => match boxes.get(element) {
                    Some(rect) => scroller.scroll_into_view(rect, ScrollBehavior::Smooth),
                    None => tracing::warn!(
                        fragment = %fragment,
                        "anchor target has no geometry; scroll request dropped"
                    ),
                },
                None => tracing::warn!(
                    fragment = %fragment,
                    "anchor fragment does not resolve to an element; scroll request dropped"
                ),
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use dom::{ActivationEvent, Attr, dispatch_activation};

    /// body → nav → a[#target], plus a div#target section further down.
    fn setup() -> (Dom, ListenerMap, NodeId, NodeId) {
        let mut dom = Dom::new();
        let body = dom.create_plain_element("body");
        let nav = dom.create_plain_element("nav");
        let anchor = dom.create_element("a", vec![Attr::new("href", "#target")]);
        let target = dom.create_element("div", vec![Attr::new("id", "target")]);
        dom.append_child(body, nav);
        dom.append_child(nav, anchor);
        dom.append_child(body, target);
        dom.set_root(body);
        (dom, ListenerMap::new(), anchor, target)
    }

    #[test]
    fn attaches_only_to_fragment_anchors() {
        let mut dom = Dom::new();
        let body = dom.create_plain_element("body");
        let frag = dom.create_element("a", vec![Attr::new("href", "#here")]);
        let external = dom.create_element("a", vec![Attr::new("href", "https://example.com")]);
        let bare = dom.create_plain_element("a");
        for n in [frag, external, bare] {
            dom.append_child(body, n);
        }
        dom.set_root(body);

        let mut listeners = ListenerMap::new();
        let mut behavior = AnchorScroller::new();
        behavior.attach(&dom, body, &mut listeners);

        assert_eq!(behavior.attached(), 1);
        assert_eq!(listeners.count(frag), 1);
        assert_eq!(listeners.count(external), 0);
        assert_eq!(listeners.count(bare), 0);
    }

    #[test]
    fn no_anchors_means_no_registrations() {
        let mut dom = Dom::new();
        let body = dom.create_plain_element("body");
        dom.set_root(body);

        let mut listeners = ListenerMap::new();
        let mut behavior = AnchorScroller::new();
        behavior.attach(&dom, body, &mut listeners);
        assert_eq!(behavior.attached(), 0);
    }

    #[test]
    fn activation_prevents_default_and_queues_request() {
        let (dom, mut listeners, anchor, _target) = setup();
        let mut behavior = AnchorScroller::new();
        behavior.attach(&dom, dom.root().unwrap(), &mut listeners);

        let mut event = ActivationEvent::new(anchor);
        let allowed = dispatch_activation(&dom, &listeners, &mut event);

        assert!(!allowed);
        assert_eq!(behavior.take_requests(), vec!["target".to_string()]);
        // Drained: a second take sees nothing.
        assert!(behavior.take_requests().is_empty());
    }

    #[test]
    fn activation_on_anchor_child_bubbles_to_listener() {
        let (mut dom, mut listeners, anchor, _target) = setup();
        let label = dom.create_text("Go");
        dom.append_child(anchor, label);

        let mut behavior = AnchorScroller::new();
        behavior.attach(&dom, dom.root().unwrap(), &mut listeners);

        let mut event = ActivationEvent::new(label);
        let allowed = dispatch_activation(&dom, &listeners, &mut event);
        assert!(!allowed);
        assert_eq!(behavior.take_requests().len(), 1);
    }

    #[test]
    fn resolvable_request_scrolls_smoothly() {
        let (dom, mut listeners, anchor, target) = setup();
        let mut behavior = AnchorScroller::new();
        behavior.attach(&dom, dom.root().unwrap(), &mut listeners);

        let mut boxes = BoxMap::new();
        boxes
            .set(target, common::Rect::new(0.0, 1400.0, 800.0, 600.0))
            .unwrap();
        let mut scroller = Scroller::new();
        scroller.set_extent(2000.0, 600.0);

        let mut event = ActivationEvent::new(anchor);
        dispatch_activation(&dom, &listeners, &mut event);
        behavior.resolve_requests(&dom, &boxes, &mut scroller);

        assert_eq!(scroller.target_y(), 1400.0);
        assert!(scroller.is_animating());
    }

    #[test]
    fn unresolvable_request_is_dropped_without_scrolling() {
        let mut dom = Dom::new();
        let body = dom.create_plain_element("body");
        let anchor = dom.create_element("a", vec![Attr::new("href", "#missing")]);
        dom.append_child(body, anchor);
        dom.set_root(body);

        let mut listeners = ListenerMap::new();
        let mut behavior = AnchorScroller::new();
        behavior.attach(&dom, body, &mut listeners);

        let boxes = BoxMap::new();
        let mut scroller = Scroller::new();
        scroller.set_extent(2000.0, 600.0);

        let mut event = ActivationEvent::new(anchor);
        let allowed = dispatch_activation(&dom, &listeners, &mut event);
        behavior.resolve_requests(&dom, &boxes, &mut scroller);

        // Default still suppressed, but nothing scrolled and nothing panicked.
        assert!(!allowed);
        assert_eq!(scroller.y(), 0.0);
        assert_eq!(scroller.target_y(), 0.0);
        assert!(!scroller.is_animating());
    }

    #[test]
    fn repeat_activation_retriggers_the_same_scroll() {
        let (dom, mut listeners, anchor, target) = setup();
        let mut behavior = AnchorScroller::new();
        behavior.attach(&dom, dom.root().unwrap(), &mut listeners);

        let mut boxes = BoxMap::new();
        boxes
            .set(target, common::Rect::new(0.0, 1400.0, 800.0, 600.0))
            .unwrap();
        let mut scroller = Scroller::new();
        scroller.set_extent(2000.0, 600.0);

        for _ in 0..2 {
            let mut event = ActivationEvent::new(anchor);
            dispatch_activation(&dom, &listeners, &mut event);
            behavior.resolve_requests(&dom, &boxes, &mut scroller);
            scroller.tick();
        }
        // Still animating toward the same target; no guard needed.
        assert_eq!(scroller.target_y(), 1400.0);
        assert!(scroller.is_animating());
    }
}
