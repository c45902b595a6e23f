//! Input configuration model.
//!
//! This is the in-memory shape the engine consumes; loading it from a
//! file or the network is the caller's concern. Validation happens once,
//! up front, before any placement; bad input is rejected, never clamped
//! or defaulted.

use crate::errors::ConfigError;
use crate::segment::{QUADRANT_COUNT, RING_COUNT};
use std::fmt;

/// Simple color model; raw strings pass through untouched so any
/// CSS-style value the renderer understands is representable.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Raw(String),
}

impl Color {
    pub fn named(name: impl Into<String>) -> Color {
        Color::Named(name.into())
    }

    pub fn raw(value: impl Into<String>) -> Color {
        Color::Raw(value.into())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) | Color::Raw(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
        }
    }
}

/// A raw chart entry, before placement.
#[derive(Clone, Debug, PartialEq)]
pub struct RawEntry {
    /// Display label; also the sort key for id assignment.
    pub label: String,
    /// Ring index, 0 (innermost) to 3 (outermost).
    pub ring: usize,
    /// Inactive entries render in the shared inactive color and are
    /// unlabeled outside print layout.
    pub active: bool,
    /// Sign indicates movement since the previous edition: positive is
    /// up, negative is down, zero is unchanged.
    pub moved: i32,
    /// Optional click-through link, passed straight to the renderer.
    pub link: Option<String>,
    /// Optional per-entry color, used instead of the ring color for
    /// active entries.
    pub color_override: Option<Color>,
}

impl RawEntry {
    /// An active, unmoved, unlinked entry: the common case in tests and
    /// hand-built configs.
    pub fn new(label: impl Into<String>, ring: usize) -> RawEntry {
        RawEntry {
            label: label.into(),
            ring,
            active: true,
            moved: 0,
            link: None,
            color_override: None,
        }
    }
}

/// Name and color for one ring.
#[derive(Clone, Debug, PartialEq)]
pub struct RingStyle {
    pub name: String,
    pub color: Color,
}

impl RingStyle {
    pub fn new(name: impl Into<String>, color: Color) -> RingStyle {
        RingStyle { name: name.into(), color }
    }
}

/// Global chart colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub inactive: Color,
    pub grid: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color::named("white"),
            inactive: Color::raw("#ddd"),
            grid: Color::raw("#bbb"),
        }
    }
}

/// Full input configuration for one layout run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Entries in input order; order matters (it drives quadrant
    /// assignment and the random draw sequence).
    pub entries: Vec<RawEntry>,
    /// One style per ring; the fixed-size array makes a short table
    /// unrepresentable.
    pub rings: [RingStyle; RING_COUNT],
    pub colors: Palette,
    /// When true, all entries render labeled/identified and legend text
    /// is produced; when false, only active entries are labeled.
    pub print_layout: bool,
    /// Restrict the visible viewport to one quadrant. Never affects
    /// placement.
    pub zoomed_quadrant: Option<usize>,
    /// Canvas dimensions, consumed only by the external renderer.
    pub width: f64,
    pub height: f64,
}

impl Config {
    /// Check every entry and viewport setting. Called by the placement
    /// entry points; exposed so callers can validate eagerly at load
    /// time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.label.is_empty() {
                return Err(ConfigError::EmptyLabel { index });
            }
            if entry.ring >= RING_COUNT {
                return Err(ConfigError::RingOutOfRange {
                    index,
                    label: entry.label.clone(),
                    ring: entry.ring,
                });
            }
        }
        if let Some(q) = self.zoomed_quadrant {
            if q >= QUADRANT_COUNT {
                return Err(ConfigError::QuadrantOutOfRange { quadrant: q });
            }
        }
        Ok(())
    }
}
