//! Viewport intersection observation.
//!
//! Models the platform facility the reveal behavior subscribes to: each
//! observed target's visible fraction is recomputed against the viewport
//! rect, and a record is queued whenever a target is computed for the
//! first time or its intersecting state crosses the threshold in either
//! direction. Records accumulate and are delivered in batches via
//! [`IntersectionObserver::take_records`], mirroring the asynchronous,
//! batched delivery of the real facility.

use common::Rect;
use dom::NodeId;

use crate::BoxMap;

// ─────────────────────────────────────────────────────────────────────────────
// Options
// ─────────────────────────────────────────────────────────────────────────────

/// Observation parameters, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction at or above which a target counts as intersecting.
    pub threshold: f32,
    /// Uniform margin added around the viewport rect before intersecting.
    pub root_margin: f32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: 0.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// IntersectionRecord
// ─────────────────────────────────────────────────────────────────────────────

/// One notification about an observed target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionRecord {
    pub target: NodeId,
    /// Visible fraction of the target's area, `0.0 ..= 1.0`.
    pub ratio: f32,
    /// Whether the fraction is at or above the observer's threshold.
    pub is_intersecting: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// IntersectionObserver
// ─────────────────────────────────────────────────────────────────────────────

struct TargetState {
    node: NodeId,
    /// Last reported intersecting state; `None` until first computed, so
    /// every target produces an initial record.
    last: Option<bool>,
}

/// Tracks a set of targets and queues records on intersecting-state
/// changes. Targets are kept in observation order so record delivery is
/// deterministic.
pub struct IntersectionObserver {
    options: ObserverOptions,
    targets: Vec<TargetState>,
    pending: Vec<IntersectionRecord>,
}

impl IntersectionObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            targets: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    /// Start observing `node`. Observing an already-observed node is a no-op.
    pub fn observe(&mut self, node: NodeId) {
        if !self.is_observing(node) {
            self.targets.push(TargetState { node, last: None });
        }
    }

    /// Stop observing `node`. No further records are produced for it;
    /// records already queued are not retracted.
    pub fn unobserve(&mut self, node: NodeId) {
        self.targets.retain(|t| t.node != node);
    }

    pub fn is_observing(&self, node: NodeId) -> bool {
        self.targets.iter().any(|t| t.node == node)
    }

    pub fn observed_count(&self) -> usize {
        self.targets.len()
    }

    /// Recompute every target's visible fraction against `root_rect` and
    /// queue records for state changes.
    pub fn compute(&mut self, boxes: &BoxMap, root_rect: Rect) {
        let m = self.options.root_margin;
        let root = root_rect.inflate(m, m);

        for target in &mut self.targets {
            let ratio = match boxes.get(target.node) {
                Some(rect) if rect.area() > 0.0 => {
                    rect.intersect(root).area() / rect.area()
                }
                // No geometry (or zero area): not rendered, nothing visible.
                _ => 0.0,
            };
            let intersecting = ratio >= self.options.threshold;
            if target.last != Some(intersecting) {
                target.last = Some(intersecting);
                self.pending.push(IntersectionRecord {
                    target: target.node,
                    ratio,
                    is_intersecting: intersecting,
                });
            }
        }
    }

    /// Drain the queued batch of records, in the order they were produced.
    pub fn take_records(&mut self) -> Vec<IntersectionRecord> {
        std::mem::take(&mut self.pending)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
