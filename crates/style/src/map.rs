//! Per-node visual style with declarative transitions.
//!
//! A [`StyleMap`] stores each node's target [`VisualStyle`] plus any
//! declared [`Transition`]. Setting a property that a declared transition
//! covers starts an animated change from the currently *presented* value;
//! setting a property with no covering transition (or a zero duration)
//! applies immediately. Sampling and advancing are separate so that the
//! code requesting a change never waits on the animation.

use std::collections::HashMap;

use dom::NodeId;

use crate::easing::{TimingFunction, evaluate_timing};

// ─────────────────────────────────────────────────────────────────────────────
// VisualStyle / Property
// ─────────────────────────────────────────────────────────────────────────────

/// The animatable presentation attributes of a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualStyle {
    /// 0.0 (fully transparent) ..= 1.0 (opaque).
    pub opacity: f32,
    /// Vertical offset from the natural position, in CSS pixels.
    pub translate_y: f32,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
        }
    }
}

/// An animatable property of [`VisualStyle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    Opacity,
    TranslateY,
}

impl VisualStyle {
    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::Opacity => self.opacity,
            Property::TranslateY => self.translate_y,
        }
    }

    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::Opacity => self.opacity = value,
            Property::TranslateY => self.translate_y = value,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transition
// ─────────────────────────────────────────────────────────────────────────────

/// A declared transition: which properties animate, how long, and on
/// which curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub properties: Vec<Property>,
    pub duration_ms: f32,
    pub timing: TimingFunction,
}

impl Transition {
    fn covers(&self, property: Property) -> bool {
        self.duration_ms > 0.0 && self.properties.contains(&property)
    }
}

/// A property change currently animating.
#[derive(Clone, Debug)]
struct ActiveTransition {
    property: Property,
    from: f32,
    to: f32,
    elapsed_ms: f32,
    duration_ms: f32,
    timing: TimingFunction,
}

impl ActiveTransition {
    fn sample(&self) -> f32 {
        let progress = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        let eased = evaluate_timing(&self.timing, progress);
        self.from + (self.to - self.from) * eased
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StyleMap
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct NodeStyle {
    target: VisualStyle,
    transition: Option<Transition>,
    active: Vec<ActiveTransition>,
}

/// Presentation state for every node that has had a style applied.
/// Nodes never touched present [`VisualStyle::default`].
#[derive(Debug, Default)]
pub struct StyleMap {
    nodes: HashMap<NodeId, NodeStyle>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a node's style immediately, cancelling any in-flight animation.
    /// This is how initial states are applied without animating.
    pub fn snap(&mut self, node: NodeId, style: VisualStyle) {
        let entry = self.nodes.entry(node).or_default();
        entry.target = style;
        entry.active.clear();
    }

    /// Declare the transition that future property changes on `node` follow.
    pub fn set_transition(&mut self, node: NodeId, transition: Transition) {
        self.nodes.entry(node).or_default().transition = Some(transition);
    }

    /// Request a property change.
    ///
    /// If the node's declared transition covers the property, the change
    /// animates from the currently presented value; otherwise it applies
    /// immediately. Setting a property to its existing target is a no-op,
    /// so a redundant request cannot restart an animation.
    pub fn set(&mut self, node: NodeId, property: Property, value: f32) {
        let presented_from = self.presented(node).get(property);

        let entry = self.nodes.entry(node).or_default();
        if entry.target.get(property) == value {
            return;
        }
        entry.target.set(property, value);

        let covering = entry
            .transition
            .as_ref()
            .filter(|t| t.covers(property))
            .cloned();
        entry.active.retain(|a| a.property != property);
        if let Some(transition) = covering {
            entry.active.push(ActiveTransition {
                property,
                from: presented_from,
                to: value,
                elapsed_ms: 0.0,
                duration_ms: transition.duration_ms,
                timing: transition.timing,
            });
        }
    }

    /// The values currently on screen, sampling in-flight transitions.
    pub fn presented(&self, node: NodeId) -> VisualStyle {
        let Some(entry) = self.nodes.get(&node) else {
            return VisualStyle::default();
        };
        let mut out = entry.target;
        for active in &entry.active {
            out.set(active.property, active.sample());
        }
        out
    }

    /// The target values a node is at (or animating toward).
    pub fn target(&self, node: NodeId) -> VisualStyle {
        self.nodes
            .get(&node)
            .map(|e| e.target)
            .unwrap_or_default()
    }

    /// True while any property of `node` is still animating.
    pub fn is_transitioning(&self, node: NodeId) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|e| !e.active.is_empty())
    }

    /// Advance all in-flight transitions by `delta_ms`. Finished
    /// transitions land exactly on their targets and are dropped.
    pub fn tick(&mut self, delta_ms: f32) {
        for entry in self.nodes.values_mut() {
            for active in &mut entry.active {
                active.elapsed_ms += delta_ms;
            }
            entry.active.retain(|a| a.elapsed_ms < a.duration_ms);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
