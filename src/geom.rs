//! Polar/cartesian conversion and clamping primitives.
//!
//! Pure functions over [`glam::DVec2`]; no hidden state. The chart uses
//! mathematical convention: angle from the two-argument arctangent in
//! `(-pi, pi]`, radius as the Euclidean norm.

use glam::{DVec2, dvec2};

/// A point in polar coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    /// Angle in radians, as returned by `atan2`.
    pub theta: f64,
    /// Distance from the origin.
    pub r: f64,
}

/// Convert a cartesian point to polar coordinates.
pub fn to_polar(p: DVec2) -> Polar {
    Polar {
        theta: p.y.atan2(p.x),
        r: p.length(),
    }
}

/// Convert a polar point back to cartesian coordinates.
pub fn to_cartesian(p: Polar) -> DVec2 {
    dvec2(p.r * p.theta.cos(), p.r * p.theta.sin())
}

/// Clamp `value` into the interval spanned by `a` and `b`, in either
/// argument order.
pub fn clamp_interval(value: f64, a: f64, b: f64) -> f64 {
    let low = a.min(b);
    let high = a.max(b);
    value.clamp(low, high)
}

/// Clamp both coordinates of `point` into the box spanned by `min` and
/// `max` (per-axis, argument order insensitive).
pub fn clamp_box(point: DVec2, min: DVec2, max: DVec2) -> DVec2 {
    dvec2(
        clamp_interval(point.x, min.x, max.x),
        clamp_interval(point.y, min.y, max.y),
    )
}
