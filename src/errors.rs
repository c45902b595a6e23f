//! Error types with rich diagnostics using miette.
//!
//! All failures are configuration errors surfaced synchronously before
//! any placement happens; the engine itself is pure computation and has
//! no recoverable runtime failures. Geometry invariant violations are
//! defects and are caught by debug assertions, not errors.

use miette::Diagnostic;
use thiserror::Error;

/// Malformed input configuration. Raised before placement; the engine
/// never clamps or defaults bad input.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("entry {index} ({label:?}): ring index {ring} out of range")]
    #[diagnostic(
        code(radlay::config::ring_out_of_range),
        help("ring indices run from 0 (innermost) to 3 (outermost)")
    )]
    RingOutOfRange {
        index: usize,
        label: String,
        ring: usize,
    },

    #[error("entry {index} has an empty label")]
    #[diagnostic(
        code(radlay::config::empty_label),
        help("labels are the id sort key and must be non-empty")
    )]
    EmptyLabel { index: usize },

    #[error("zoomed quadrant {quadrant} out of range")]
    #[diagnostic(code(radlay::config::quadrant_out_of_range))]
    QuadrantOutOfRange { quadrant: usize },
}
