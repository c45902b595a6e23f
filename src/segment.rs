//! Quadrant/ring cell geometry.
//!
//! A [`Segment`] is the intersection of one angular quadrant and one
//! concentric ring. It knows how to draw a random starting point inside
//! itself and how to pull a strayed point back in. Segments are computed
//! once per layout run and shared read-only by every entry assigned to
//! them.

use glam::{DVec2, dvec2};
use std::f64::consts::PI;

use crate::defaults::{BOX_INSET, CLEARANCE, INNER_RADIUS, RING_HEADROOM, RING_RADII};
use crate::geom::{clamp_box, clamp_interval, to_cartesian, to_polar};
use crate::rng::SeededRng;

/// One of the four fixed angular sectors of the chart.
///
/// `angle_min`/`angle_max` are multiples of pi; the factors give the sign
/// of the half-plane the quadrant occupies on each axis.
#[derive(Debug, Clone, Copy)]
pub struct Quadrant {
    pub angle_min: f64,
    pub angle_max: f64,
    pub factor_x: f64,
    pub factor_y: f64,
}

/// The four quadrants, in display index order.
pub const QUADRANTS: [Quadrant; 4] = [
    Quadrant { angle_min: 0.0, angle_max: 0.5, factor_x: 1.0, factor_y: 1.0 },
    Quadrant { angle_min: 0.5, angle_max: 1.0, factor_x: -1.0, factor_y: 1.0 },
    Quadrant { angle_min: -1.0, angle_max: -0.5, factor_x: -1.0, factor_y: -1.0 },
    Quadrant { angle_min: -0.5, angle_max: 0.0, factor_x: 1.0, factor_y: -1.0 },
];

/// Number of quadrants and of rings (the chart shape is fixed).
pub const QUADRANT_COUNT: usize = 4;
pub const RING_COUNT: usize = 4;

/// A quadrant-ring cell with precomputed bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Angular bounds in radians.
    pub theta_min: f64,
    pub theta_max: f64,
    /// Radial bounds (ring band, before the clearance inset).
    pub radial_min: f64,
    pub radial_max: f64,
    /// Bounding-box corners. Not sorted: corner signs follow the
    /// quadrant's factors, and the clamp is order-insensitive.
    pub box_a: DVec2,
    pub box_b: DVec2,
}

impl Segment {
    /// Build the cell for quadrant `q`, ring `r`. Both must be in `0..4`.
    pub fn new(q: usize, r: usize) -> Segment {
        let quad = QUADRANTS[q];
        let radial_min = if r == 0 { INNER_RADIUS } else { RING_RADII[r - 1] };
        let outermost = RING_RADII[RING_COUNT - 1];

        // The vertical extent grows for inner rings: legend and ring-name
        // headroom above the band. Deliberate asymmetry, load-bearing for
        // clamp behavior.
        let headroom = (RING_COUNT - 1 - r) as f64 * RING_HEADROOM;

        Segment {
            theta_min: quad.angle_min * PI,
            theta_max: quad.angle_max * PI,
            radial_min,
            radial_max: RING_RADII[r],
            box_a: dvec2(BOX_INSET * quad.factor_x, BOX_INSET * quad.factor_y),
            box_b: dvec2(
                outermost * quad.factor_x,
                outermost * quad.factor_y + headroom,
            ),
        }
    }

    /// Draw a starting point inside the cell: uniform over the angular
    /// interval, center-biased over the radial band.
    pub fn sample(&self, rng: &mut SeededRng) -> DVec2 {
        let theta = rng.uniform(self.theta_min, self.theta_max);
        let r = rng.triangular(self.radial_min, self.radial_max);
        to_cartesian(crate::geom::Polar { theta, r })
    }

    /// Pull `point` back inside the cell.
    ///
    /// Box-clamp first (which confines the polar angle to the quadrant),
    /// then clamp the radius into the clearance band
    /// `[radial_min + CLEARANCE, radial_max - CLEARANCE]` so entries never
    /// touch a drawn ring border. The angle of an already-box-clamped
    /// point is left untouched. Idempotent up to floating-point rounding.
    pub fn clamp(&self, point: DVec2) -> DVec2 {
        let boxed = clamp_box(point, self.box_a, self.box_b);
        let mut polar = to_polar(boxed);
        polar.r = clamp_interval(
            polar.r,
            self.radial_min + CLEARANCE,
            self.radial_max - CLEARANCE,
        );
        to_cartesian(polar)
    }

    /// Whether `point` satisfies the containment invariant: inside the
    /// cell's angular bounds and radial clearance band, within `eps`.
    pub fn contains(&self, point: DVec2, eps: f64) -> bool {
        let polar = to_polar(point);
        polar.r >= self.radial_min + CLEARANCE - eps
            && polar.r <= self.radial_max - CLEARANCE + eps
            && polar.theta >= self.theta_min - eps
            && polar.theta <= self.theta_max + eps
    }
}

/// All sixteen cells, indexed by `(quadrant, ring)`.
#[derive(Debug, Clone, Copy)]
pub struct SegmentTable {
    cells: [[Segment; RING_COUNT]; QUADRANT_COUNT],
}

impl SegmentTable {
    pub fn new() -> SegmentTable {
        let mut cells = [[Segment::new(0, 0); RING_COUNT]; QUADRANT_COUNT];
        for (q, row) in cells.iter_mut().enumerate() {
            for (r, cell) in row.iter_mut().enumerate() {
                *cell = Segment::new(q, r);
            }
        }
        SegmentTable { cells }
    }

    pub fn get(&self, quadrant: usize, ring: usize) -> &Segment {
        &self.cells[quadrant][ring]
    }
}

impl Default for SegmentTable {
    fn default() -> Self {
        SegmentTable::new()
    }
}

/// Viewport restricting the visible chart to one quadrant, as
/// `[x, y, width, height]` for the external renderer. Placement is
/// unaffected by zooming.
pub fn viewbox(quadrant: usize) -> [f64; 4] {
    let quad = QUADRANTS[quadrant];
    let outermost = RING_RADII[RING_COUNT - 1];
    [
        (quad.factor_x * outermost).max(0.0) - 420.0,
        (quad.factor_y * outermost).max(0.0) - 420.0,
        440.0,
        440.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn ring_bands_chain() {
        for q in 0..QUADRANT_COUNT {
            let s0 = Segment::new(q, 0);
            assert_eq!(s0.radial_min, INNER_RADIUS);
            for r in 1..RING_COUNT {
                let outer = Segment::new(q, r);
                let inner = Segment::new(q, r - 1);
                assert_eq!(outer.radial_min, inner.radial_max);
            }
        }
    }

    #[test]
    fn box_headroom_shrinks_toward_outer_ring() {
        // Quadrant 0 (both factors positive): ring 0 gets 270 extra units
        // of vertical room, ring 3 gets none.
        let r0 = Segment::new(0, 0);
        let r3 = Segment::new(0, 3);
        assert_eq!(r0.box_b.y, 400.0 + 270.0);
        assert_eq!(r3.box_b.y, 400.0);
        assert_eq!(r0.box_b.x, r3.box_b.x);
    }

    #[test]
    fn sample_lands_in_cell() {
        let mut rng = SeededRng::new(42);
        for q in 0..QUADRANT_COUNT {
            for r in 0..RING_COUNT {
                let seg = Segment::new(q, r);
                for _ in 0..50 {
                    let p = seg.sample(&mut rng);
                    let polar = to_polar(p);
                    assert!(polar.r >= seg.radial_min - EPS);
                    assert!(polar.r <= seg.radial_max + EPS);
                    // Quadrant 2 spans up to -pi; atan2 can return +pi for
                    // points on the negative x axis, which samples never
                    // hit exactly.
                    assert!(polar.theta >= seg.theta_min - EPS);
                    assert!(polar.theta <= seg.theta_max + EPS);
                }
            }
        }
    }

    #[test]
    fn clamp_is_idempotent_for_in_bounds_points() {
        // Idempotence is promised for points already inside the clamped
        // bounds. Radially clamping a box-clamped point near an angular
        // extreme can land back outside the box, so a single clamp of a
        // wild point is not always a fixpoint (see the test below).
        let mut rng = SeededRng::new(7);
        for q in 0..QUADRANT_COUNT {
            for r in 0..RING_COUNT {
                let seg = Segment::new(q, r);
                let mut checked = 0;
                for _ in 0..100 {
                    let p = to_cartesian(crate::geom::Polar {
                        theta: rng.uniform(seg.theta_min, seg.theta_max),
                        r: rng.uniform(seg.radial_min + CLEARANCE, seg.radial_max - CLEARANCE),
                    });
                    // Interior polar points near the chart axes fall
                    // outside the bounding box and carry no promise.
                    if (clamp_box(p, seg.box_a, seg.box_b) - p).length() != 0.0 {
                        continue;
                    }
                    let once = seg.clamp(p);
                    assert!(
                        (once - p).length() < 1e-6,
                        "clamp moved an in-bounds point in ({q},{r}): {p:?} -> {once:?}"
                    );
                    assert!((seg.clamp(once) - once).length() < 1e-6);
                    checked += 1;
                }
                assert!(checked > 0, "no interior point landed in the box for ({q},{r})");
            }
        }
    }

    #[test]
    fn clamp_near_angular_extreme_keeps_polar_bounds_not_box() {
        // A point far up the y axis box-clamps to the box edge, then the
        // radial clamp pulls it toward the origin and back out of the
        // box. The clamp guarantees angular/radial containment, not box
        // containment; this mirrors how the chart has always behaved.
        let seg = Segment::new(0, 0);
        let once = seg.clamp(dvec2(1.0, 500.0));
        assert!(once.x < BOX_INSET);
        assert!(seg.contains(once, 1e-9));
        // Re-clamping keeps the point inside the polar bounds too.
        assert!(seg.contains(seg.clamp(once), 1e-9));
    }

    #[test]
    fn clamp_enforces_clearance_band() {
        let seg = Segment::new(0, 1);
        // Way outside the chart.
        let p = seg.clamp(dvec2(1000.0, 1000.0));
        let polar = to_polar(p);
        assert!(polar.r <= seg.radial_max - CLEARANCE + EPS);
        // Inside the center hole.
        let p = seg.clamp(dvec2(20.0, 20.0));
        let polar = to_polar(p);
        assert!(polar.r >= seg.radial_min + CLEARANCE - EPS);
    }

    #[test]
    fn clamp_keeps_inbounds_points_unchanged() {
        let mut rng = SeededRng::new(11);
        let seg = Segment::new(3, 2);
        let mut checked = 0;
        for _ in 0..200 {
            let p = seg.sample(&mut rng);
            let in_box = (clamp_box(p, seg.box_a, seg.box_b) - p).length() == 0.0;
            if in_box && seg.contains(p, 0.0) {
                let clamped = seg.clamp(p);
                assert!((clamped - p).length() < 1e-6);
                checked += 1;
            }
        }
        assert!(checked > 0, "no sampled point was strictly inside");
    }

    #[test]
    fn contains_matches_clamp_output() {
        let mut rng = SeededRng::new(3);
        for q in 0..QUADRANT_COUNT {
            for r in 0..RING_COUNT {
                let seg = Segment::new(q, r);
                for _ in 0..25 {
                    let wild = dvec2(rng.uniform(-700.0, 700.0), rng.uniform(-700.0, 700.0));
                    assert!(seg.contains(seg.clamp(wild), 1e-6));
                }
            }
        }
    }

    #[test]
    fn viewbox_per_quadrant() {
        assert_eq!(viewbox(0), [-20.0, -20.0, 440.0, 440.0]);
        assert_eq!(viewbox(1), [-420.0, -20.0, 440.0, 440.0]);
        assert_eq!(viewbox(2), [-420.0, -420.0, 440.0, 440.0]);
        assert_eq!(viewbox(3), [-20.0, -420.0, 440.0, 440.0]);
    }
}
