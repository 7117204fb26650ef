//! # Style Crate
//!
//! Visual presentation state for the page enhancement engine: per-node
//! opacity and vertical offset, declared transitions, and the sampling
//! that animates property changes over time. The behaviors request a
//! state change and return; advancing the animation belongs to the
//! rendering layer's tick.

#![forbid(unsafe_code)]

pub mod easing;
pub mod map;

pub use easing::{TimingFunction, evaluate_timing};
pub use map::{Property, StyleMap, Transition, VisualStyle};
