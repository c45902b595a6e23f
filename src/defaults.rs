//! Fixed chart constants (chart units, tuned for a 4x4 quadrant/ring radar)

/// Outer radius of each ring, innermost first.
pub const RING_RADII: [f64; 4] = [130.0, 220.0, 310.0, 400.0];

/// Inner radius of ring 0 (entries never sit in the chart's center disc).
pub const INNER_RADIUS: f64 = 30.0;

/// Distance of a segment's bounding-box corner from the chart axes.
pub const BOX_INSET: f64 = 15.0;

/// Radial inset inside a segment's true bounds; entries keep this far
/// from a ring's drawn border.
pub const CLEARANCE: f64 = 15.0;

/// Extra vertical bounding-box headroom per ring step inward, for
/// legend/label room above inner rings.
pub const RING_HEADROOM: f64 = 90.0;

/// Entries closer than this exert repulsion on each other.
pub const COLLISION_RADIUS: f64 = 13.0;

/// Scale applied to pairwise repulsive displacement.
pub const COLLISION_STRENGTH: f64 = 0.85;

/// Fraction of velocity retained per relaxation step (strong damping).
pub const VELOCITY_RETAIN: f64 = 0.19;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 42;

/// Default relaxation step budget.
pub const MAX_STEPS: usize = 300;

/// Relaxation stops once the summed speed of all entries drops below this.
pub const CONVERGENCE_EPSILON: f64 = 1e-3;
