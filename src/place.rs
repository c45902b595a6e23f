//! Entry placement and identifier assignment.
//!
//! Two passes over the raw entries. The assignment pass walks the input
//! in order: quadrant from the input index mod 4 (entries scatter across
//! the whole chart rather than grouping by category), segment from the
//! (quadrant, ring) table, starting position sampled inside the segment,
//! color resolved from the ring style. The identification pass groups
//! entries into per-(quadrant, ring) buckets, sorts each bucket by label,
//! and hands out sequential ids in a fixed traversal order.

use glam::DVec2;
use std::cmp::Ordering;

use crate::config::{Color, Config};
use crate::errors::ConfigError;
use crate::rng::SeededRng;
use crate::segment::{QUADRANT_COUNT, RING_COUNT, Segment, SegmentTable};

/// Every entry is routed into this quadrant's id buckets, regardless of
/// the quadrant it is displayed in. The single shared bucket makes the
/// legend one alphabetical list per ring; positioning and id grouping
/// are deliberately decoupled.
const ID_BUCKET_QUADRANT: usize = 2;

/// Fixed traversal order over quadrant buckets during id assignment.
const ID_QUADRANT_ORDER: [usize; QUADRANT_COUNT] = [2, 3, 1, 0];

/// A placed, identified chart entry.
///
/// Position is the only field that changes after placement (the
/// relaxation nudges it); the id, quadrant, ring and segment are fixed
/// for the lifetime of the layout.
#[derive(Clone, Debug)]
pub struct Entry {
    pub label: String,
    /// Display quadrant, from the input index mod 4.
    pub quadrant: usize,
    pub ring: usize,
    /// The owning cell; used for re-clamping during relaxation and by
    /// the renderer during interaction.
    pub segment: Segment,
    /// Current position. Mutated in place by the relaxation.
    pub position: DVec2,
    /// Sequential identifier, digit string starting at "1". Assigned
    /// once, immutable thereafter.
    pub id: String,
    pub color: Color,
    pub active: bool,
    pub moved: i32,
    pub link: Option<String>,
}

/// Case-aware label comparison: case-insensitive first, raw order as the
/// tie-break. Deterministic stand-in for locale-sensitive collation;
/// ids must not depend on the host environment.
pub fn label_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}

/// Run both placement passes.
///
/// Validates the config, then produces one [`Entry`] per raw entry, in
/// input order, each with a sampled position and an assigned id. All
/// randomness comes from `rng`, so a given seed and input order yield a
/// bit-identical result.
pub fn place(config: &Config, rng: &mut SeededRng) -> Result<Vec<Entry>, ConfigError> {
    config.validate()?;

    let segments = SegmentTable::new();

    // Assignment pass, input order preserved.
    let mut entries: Vec<Entry> = Vec::with_capacity(config.entries.len());
    for (index, raw) in config.entries.iter().enumerate() {
        let quadrant = index % QUADRANT_COUNT;
        let segment = *segments.get(quadrant, raw.ring);
        let position = segment.sample(rng);

        let color = if raw.active || config.print_layout {
            match (&raw.color_override, raw.active) {
                (Some(c), true) => c.clone(),
                _ => config.rings[raw.ring].color.clone(),
            }
        } else {
            config.colors.inactive.clone()
        };

        entries.push(Entry {
            label: raw.label.clone(),
            quadrant,
            ring: raw.ring,
            segment,
            position,
            id: String::new(),
            color,
            active: raw.active,
            moved: raw.moved,
            link: raw.link.clone(),
        });
    }

    // Identification pass: bucket, sort, number.
    let mut buckets: [[Vec<usize>; RING_COUNT]; QUADRANT_COUNT] = Default::default();
    for (index, entry) in entries.iter().enumerate() {
        buckets[ID_BUCKET_QUADRANT][entry.ring].push(index);
    }

    let mut next_id = 1u32;
    for quadrant in ID_QUADRANT_ORDER {
        for ring in 0..RING_COUNT {
            let bucket = &mut buckets[quadrant][ring];
            bucket.sort_by(|&a, &b| label_cmp(&entries[a].label, &entries[b].label));
            for &index in bucket.iter() {
                entries[index].id = next_id.to_string();
                next_id += 1;
            }
        }
    }

    crate::log::debug!(count = entries.len(), "placed entries");
    Ok(entries)
}

/// The finished layout: placed entries plus the segment table for any
/// further clamping the renderer needs during interaction.
#[derive(Clone, Debug)]
pub struct Layout {
    /// Entries in input order.
    pub entries: Vec<Entry>,
    pub segments: SegmentTable,
}

impl Layout {
    /// Entries of one ring in id order (the order the legend lists them).
    pub fn ring_group(&self, ring: usize) -> Vec<&Entry> {
        let mut group: Vec<&Entry> = self.entries.iter().filter(|e| e.ring == ring).collect();
        group.sort_by_key(|e| e.id.parse::<u32>().unwrap_or(u32::MAX));
        group
    }
}
