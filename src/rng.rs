//! Seeded pseudo-random scalar generator.
//!
//! All placement randomness flows through [`SeededRng`] so that a layout
//! run is fully reproducible: the same seed and the same draw order give a
//! bit-identical sequence. The generator is the classic `frac(sin(n) *
//! 10000)` hash over an incrementing counter; it is not a statistical
//! PRNG, but it is cheap, stable across platforms, and scatters points
//! well enough for a chart with tens of entries.

/// Deterministic random source owned by a single layout run.
///
/// Distinct runs each get their own `SeededRng`; there is no global
/// state, so concurrent layouts never interfere.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: f64,
}

impl SeededRng {
    /// Create a generator from an integer seed.
    pub fn new(seed: u64) -> Self {
        SeededRng { state: seed as f64 }
    }

    /// Next value in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        let x = self.state.sin() * 10000.0;
        self.state += 1.0;
        x - x.floor()
    }

    /// One draw mapped linearly into `[min, max)`.
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.next() * (max - min)
    }

    /// Average of two draws mapped into `[min, max)`.
    ///
    /// The sum of two uniform draws follows a triangular distribution, so
    /// values cluster toward the middle of the interval. Used for radial
    /// placement so entries favor the center of their ring band.
    pub fn triangular(&mut self, min: f64, max: f64) -> f64 {
        min + (self.next() + self.next()) * 0.5 * (max - min)
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        SeededRng::new(crate::defaults::DEFAULT_SEED)
    }
}
