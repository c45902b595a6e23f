//! # radlay
//!
//! Deterministic placement and collision resolution for radial
//! quadrant/ring charts (the "tech radar" shape: four angular quadrants
//! crossed with four concentric rings).
//!
//! The crate takes a list of labeled entries, drops each one at a
//! seeded-random spot inside its quadrant/ring cell, assigns stable
//! sequential identifiers, and then relaxes the layout step by step
//! until entries stop overlapping, re-clamping every entry into its
//! cell on every step. Rendering is somebody else's job: the output is
//! positions, ids and colors, plus a per-step callback for callers that
//! animate the relaxation.
//!
//! ```
//! use radlay::{Color, Config, Palette, RawEntry, RingStyle};
//!
//! let config = Config {
//!     entries: vec![RawEntry::new("Rust", 0), RawEntry::new("Zig", 2)],
//!     rings: [
//!         RingStyle::new("Adopt", Color::raw("#5ba300")),
//!         RingStyle::new("Trial", Color::raw("#009eb0")),
//!         RingStyle::new("Assess", Color::raw("#c7ba00")),
//!         RingStyle::new("Hold", Color::raw("#e09b96")),
//!     ],
//!     colors: Palette::default(),
//!     print_layout: true,
//!     zoomed_quadrant: None,
//!     width: 1450.0,
//!     height: 1000.0,
//! };
//!
//! let layout = radlay::layout(&config, 42, 300)?;
//! assert_eq!(layout.entries.len(), 2);
//! # Ok::<(), radlay::ConfigError>(())
//! ```

pub mod collide;
pub mod config;
pub mod defaults;
pub mod errors;
pub mod geom;
pub mod log;
pub mod place;
pub mod rng;
pub mod segment;

pub use collide::Relaxation;
pub use config::{Color, Config, Palette, RawEntry, RingStyle};
pub use errors::ConfigError;
pub use place::{Entry, Layout, place};
pub use rng::SeededRng;
pub use segment::{Segment, SegmentTable, viewbox};

/// Place entries and run a bounded relaxation in one call.
///
/// Convenience wrapper over [`place`] and [`Relaxation`] for callers
/// that want a finished layout rather than step-by-step control. The
/// same seed, entries and step budget always produce a bit-identical
/// layout.
pub fn layout(config: &Config, seed: u64, max_steps: usize) -> Result<Layout, ConfigError> {
    let mut rng = SeededRng::new(seed);
    let entries = place(config, &mut rng)?;
    let mut relaxation = Relaxation::new(entries);
    relaxation.run(max_steps, |_| {});
    Ok(Layout {
        entries: relaxation.into_entries(),
        segments: SegmentTable::new(),
    })
}
