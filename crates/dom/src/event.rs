//! Activation events.
//!
//! The enhancement behaviors only ever deal with one kind of event: a user
//! activating (clicking) an element. Dispatch runs the target's listeners
//! first, then bubbles through its ancestors toward the root, the order a
//! bubble-phase `click` listener sees in a browser. `prevent_default` and
//! `stop_propagation` are respected.

use std::collections::HashMap;
use std::rc::Rc;

use crate::node::NodeId;
use crate::tree::Dom;

// ---------------------------------------------------------------------------
// ActivationEvent
// ---------------------------------------------------------------------------

/// A user-activation event travelling through the document tree.
#[derive(Clone, Debug)]
pub struct ActivationEvent {
    /// The node the event was originally dispatched on.
    pub target: NodeId,

    /// The node whose listeners are currently being invoked.
    pub current_target: Option<NodeId>,

    /// Set to `true` when `prevent_default()` is called.
    pub default_prevented: bool,

    /// Set to `true` when `stop_propagation()` is called.
    pub propagation_stopped: bool,
}

impl ActivationEvent {
    pub fn new(target: NodeId) -> Self {
        Self {
            target,
            current_target: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Suppress the platform's default action for this activation.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop the event from bubbling to ancestor nodes. Listeners already
    /// queued on the current node still run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

// ---------------------------------------------------------------------------
// Listener
// ---------------------------------------------------------------------------

/// Type-erased callback. `Rc` so the registry can snapshot listeners for
/// the dispatch loop.
type Callback = Rc<dyn Fn(&mut ActivationEvent)>;

/// A single activation listener attached to a node.
#[derive(Clone)]
pub struct ActivationListener {
    callback: Callback,
}

impl ActivationListener {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&mut ActivationEvent) + 'static,
    {
        Self {
            callback: Rc::new(callback),
        }
    }

    pub fn invoke(&self, event: &mut ActivationEvent) {
        (self.callback)(event);
    }
}

impl std::fmt::Debug for ActivationListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivationListener").finish()
    }
}

// ---------------------------------------------------------------------------
// ListenerMap
// ---------------------------------------------------------------------------

/// Stores activation listeners for every node that has at least one.
#[derive(Debug, Default)]
pub struct ListenerMap {
    listeners: HashMap<NodeId, Vec<ActivationListener>>,
}

impl ListenerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener on `node`.
    pub fn add(&mut self, node: NodeId, listener: ActivationListener) {
        self.listeners.entry(node).or_default().push(listener);
    }

    /// Remove every listener registered on `node`.
    pub fn remove_all(&mut self, node: NodeId) {
        self.listeners.remove(&node);
    }

    /// Number of listeners registered on `node`.
    pub fn count(&self, node: NodeId) -> usize {
        self.listeners.get(&node).map_or(0, |l| l.len())
    }

    fn snapshot(&self, node: NodeId) -> Vec<ActivationListener> {
        self.listeners.get(&node).cloned().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Dispatch `event` at its target, then bubble through the target's
/// ancestors toward the root.
///
/// Returns `true` if the default action was *not* prevented.
pub fn dispatch_activation(
    dom: &Dom,
    listeners: &ListenerMap,
    event: &mut ActivationEvent,
) -> bool {
    let mut path = vec![event.target];
    path.extend(dom.ancestors(event.target));

    for node in path {
        if event.propagation_stopped {
            break;
        }
        event.current_target = Some(node);
        for listener in listeners.snapshot(node) {
            listener.invoke(event);
        }
    }

    event.current_target = None;
    !event.default_prevented
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Build a small tree:  body → nav → a
    fn setup() -> (Dom, ListenerMap, NodeId, NodeId, NodeId) {
        let mut dom = Dom::new();
        let body = dom.create_plain_element("body");
        let nav = dom.create_plain_element("nav");
        let anchor = dom.create_plain_element("a");
        dom.append_child(body, nav);
        dom.append_child(nav, anchor);
        dom.set_root(body);
        (dom, ListenerMap::new(), body, nav, anchor)
    }

    #[test]
    fn dispatch_reaches_target() {
        let (dom, mut listeners, _body, _nav, anchor) = setup();

        let called = Rc::new(RefCell::new(false));
        let probe = called.clone();
        listeners.add(
            anchor,
            ActivationListener::new(move |_| *probe.borrow_mut() = true),
        );

        let mut event = ActivationEvent::new(anchor);
        dispatch_activation(&dom, &listeners, &mut event);
        assert!(*called.borrow());
    }

    #[test]
    fn bubbles_from_target_to_root() {
        let (dom, mut listeners, body, nav, anchor) = setup();

        let order = Rc::new(RefCell::new(Vec::new()));
        for (name, node) in [("anchor", anchor), ("nav", nav), ("body", body)] {
            let o = order.clone();
            listeners.add(
                node,
                ActivationListener::new(move |_| o.borrow_mut().push(name)),
            );
        }

        let mut event = ActivationEvent::new(anchor);
        dispatch_activation(&dom, &listeners, &mut event);
        assert_eq!(*order.borrow(), vec!["anchor", "nav", "body"]);
    }

    #[test]
    fn descendant_activation_reaches_ancestor_listener() {
        // A click on text inside <a> must still trigger the anchor's handler.
        let (mut dom, mut listeners, _body, _nav, anchor) = setup();
        let text = dom.create_text("Pricing");
        dom.append_child(anchor, text);

        let hit = Rc::new(RefCell::new(0));
        let probe = hit.clone();
        listeners.add(
            anchor,
            ActivationListener::new(move |_| *probe.borrow_mut() += 1),
        );

        let mut event = ActivationEvent::new(text);
        dispatch_activation(&dom, &listeners, &mut event);
        assert_eq!(*hit.borrow(), 1);
        assert_eq!(event.target, text);
    }

    #[test]
    fn stop_propagation_halts_bubbling() {
        let (dom, mut listeners, body, nav, anchor) = setup();

        let order = Rc::new(RefCell::new(Vec::new()));
        let o = order.clone();
        listeners.add(
            anchor,
            ActivationListener::new(move |evt| {
                o.borrow_mut().push("anchor");
                evt.stop_propagation();
            }),
        );
        let o = order.clone();
        listeners.add(nav, ActivationListener::new(move |_| o.borrow_mut().push("nav")));
        let o = order.clone();
        listeners.add(body, ActivationListener::new(move |_| o.borrow_mut().push("body")));

        let mut event = ActivationEvent::new(anchor);
        dispatch_activation(&dom, &listeners, &mut event);
        assert_eq!(*order.borrow(), vec!["anchor"]);
    }

    #[test]
    fn prevent_default_returns_false() {
        let (dom, mut listeners, _body, _nav, anchor) = setup();
        listeners.add(
            anchor,
            ActivationListener::new(|evt| evt.prevent_default()),
        );

        let mut event = ActivationEvent::new(anchor);
        let allowed = dispatch_activation(&dom, &listeners, &mut event);
        assert!(!allowed);
        assert!(event.default_prevented);
    }

    #[test]
    fn dispatch_with_no_listeners_allows_default() {
        let (dom, listeners, _body, _nav, anchor) = setup();
        let mut event = ActivationEvent::new(anchor);
        assert!(dispatch_activation(&dom, &listeners, &mut event));
    }

    #[test]
    fn multiple_listeners_on_one_node_run_in_order() {
        let (dom, mut listeners, _body, _nav, anchor) = setup();

        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second"] {
            let o = order.clone();
            listeners.add(
                anchor,
                ActivationListener::new(move |_| o.borrow_mut().push(tag)),
            );
        }

        let mut event = ActivationEvent::new(anchor);
        dispatch_activation(&dom, &listeners, &mut event);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn remove_all_clears_node_listeners() {
        let (dom, mut listeners, _body, _nav, anchor) = setup();

        let hit = Rc::new(RefCell::new(0));
        let probe = hit.clone();
        listeners.add(
            anchor,
            ActivationListener::new(move |_| *probe.borrow_mut() += 1),
        );
        assert_eq!(listeners.count(anchor), 1);

        listeners.remove_all(anchor);
        assert_eq!(listeners.count(anchor), 0);

        let mut event = ActivationEvent::new(anchor);
        dispatch_activation(&dom, &listeners, &mut event);
        assert_eq!(*hit.borrow(), 0);
    }
}
