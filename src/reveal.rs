//! Section reveal behavior.
//!
//! Every element tagged with the `section` class starts hidden (opacity 0,
//! pushed 20px down) with a declared 600ms ease-out transition over both
//! properties. The first time a section's visible fraction reaches 10%,
//! its revealed values are set — the declared transition animates the
//! change — and the section is unobserved in the same step, so a second
//! trigger is structurally impossible. Sections that never scroll into
//! view simply stay hidden.

use dom::NodeId;
use style::{Property, StyleMap, TimingFunction, Transition, VisualStyle};
use viewport::{IntersectionObserver, IntersectionRecord};

/// Class name marking the sections to animate.
pub const SECTION_CLASS: &str = "section";
/// Visible fraction that triggers a reveal.
pub const REVEAL_THRESHOLD: f32 = 0.1;
/// Duration of the reveal transition.
pub const REVEAL_DURATION_MS: f32 = 600.0;
/// Initial downward offset of a hidden section.
pub const HIDDEN_OFFSET_PX: f32 = 20.0;

/// The one-shot fade/slide-in behavior for page sections.
#[derive(Default)]
pub struct SectionRevealer {
    sections: usize,
    revealed: usize,
}

impl SectionRevealer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put every section into its hidden state, declare the reveal
    /// transition, and start observing. An empty slice is fine: nothing
    /// is observed and nothing will ever reveal.
    pub fn attach(
        &mut self,
        sections: &[NodeId],
        styles: &mut StyleMap,
        observer: &mut IntersectionObserver,
    ) {
        for &section in sections {
            styles.snap(
                section,
                VisualStyle {
                    opacity: 0.0,
                    translate_y: HIDDEN_OFFSET_PX,
                },
            );
            styles.set_transition(
                section,
                Transition {
                    properties: vec![Property::Opacity, Property::TranslateY],
                    duration_ms: REVEAL_DURATION_MS,
                    timing: TimingFunction::EaseOut,
                },
            );
            observer.observe(section);
        }
        self.sections = sections.len();
    }

    /// Handle a batch of intersection records. Each intersecting record
    /// reveals its section and unobserves it; unobserving is part of the
    /// transition, not an optional cleanup.
    pub fn process(
        &mut self,
        records: &[IntersectionRecord],
        styles: &mut StyleMap,
        observer: &mut IntersectionObserver,
    ) {
        for record in records {
            if !record.is_intersecting {
                continue;
            }
            styles.set(record.target, Property::Opacity, 1.0);
            styles.set(record.target, Property::TranslateY, 0.0);
            observer.unobserve(record.target);
            self.revealed += 1;
            tracing::debug!(
                section = ?record.target,
                ratio = record.ratio,
                "section revealed"
            );
        }
    }

    /// Number of sections this behavior manages.
    pub fn sections(&self) -> usize {
        self.sections
    }

    /// Number of reveal transitions performed so far.
    pub fn revealed(&self) -> usize {
        self.revealed
    }
}

// ===========================================================================
// Tests
// ===========================================================================
