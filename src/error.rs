//! Error types for contour extraction.

use thiserror::Error;

/// Errors reported for degenerate extraction input.
///
/// Broken internal invariants (a crossing requested on an edge whose
/// endpoints share a sign) are not represented here; they panic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContourError {
    #[error("cell size must be finite and positive, got {0}")]
    InvalidCellSize(f64),

    #[error("area must be finite with a positive size, got {width}x{height}")]
    InvalidArea { width: f64, height: f64 },

    #[error("sampling grid of {cols}x{rows} vertices is too large")]
    GridTooLarge { cols: usize, rows: usize },

    #[error("sample buffer size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}
