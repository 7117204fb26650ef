//! CSS timing functions.
//!
//! Maps a linear progress value to an eased one. The keyword curves are
//! the standard CSS cubic-bezier definitions; the bezier x-curve is
//! inverted with a few Newton steps and a bisection fallback.

// ─────────────────────────────────────────────────────────────────────────────
// TimingFunction
// ─────────────────────────────────────────────────────────────────────────────

/// CSS timing / easing function.
#[derive(Debug, Clone, PartialEq)]
pub enum TimingFunction {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Default for TimingFunction {
    fn default() -> Self {
        TimingFunction::Ease
    }
}

/// Apply a timing function to a linear progress value `t ∈ [0, 1]`.
pub fn evaluate_timing(timing: &TimingFunction, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match timing {
        TimingFunction::Linear => t,
        // Standard CSS keyword curves
        TimingFunction::Ease => bezier(t, 0.25, 0.1, 0.25, 1.0),
        TimingFunction::EaseIn => bezier(t, 0.42, 0.0, 1.0, 1.0),
        TimingFunction::EaseOut => bezier(t, 0.0, 0.0, 0.58, 1.0),
        TimingFunction::EaseInOut => bezier(t, 0.42, 0.0, 0.58, 1.0),
        TimingFunction::CubicBezier(x1, y1, x2, y2) => bezier(t, *x1, *y1, *x2, *y2),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cubic bezier evaluation
// ─────────────────────────────────────────────────────────────────────────────

/// Evaluate the CSS `cubic-bezier(x1, y1, x2, y2)` curve at input
/// progress `t`: solve the parametric `s` with `bezier_x(s) == t`, then
/// sample the y polynomial at `s`.
fn bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    // Polynomial coefficient form: c(s) = ((a*s + b)*s + c)*s.
    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;
    let x_at = |s: f32| ((ax * s + bx) * s + cx) * s;
    let dx_at = |s: f32| (3.0 * ax * s + 2.0 * bx) * s + cx;

    // Newton-Raphson from the linear guess.
    let mut s = t;
    let mut converged = false;
    for _ in 0..8 {
        let err = x_at(s) - t;
        if err.abs() < 1e-5 {
            converged = true;
            break;
        }
        let d = dx_at(s);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    // Bisection fallback when the derivative was too flat for Newton.
    if !converged {
        let mut lo = 0.0f32;
        let mut hi = 1.0f32;
        for _ in 0..32 {
            s = (lo + hi) * 0.5;
            if x_at(s) < t {
                lo = s;
            } else {
                hi = s;
            }
        }
    }

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;
    ((ay * s + by) * s + cy) * s
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
