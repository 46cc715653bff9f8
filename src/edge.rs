use crate::point::Point;

/// Side of a cell on which a crossing lies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// A cell edge: two corner positions and their sampled values
///
/// Endpoints are always ordered top → bottom for vertical edges and
/// left → right for horizontal ones, so the two cells sharing an edge
/// evaluate the crossing with identical arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: Point,
    pub b: Point,
    pub va: f64,
    pub vb: f64,
}

impl Edge {
    pub fn new(a: Point, b: Point, va: f64, vb: f64) -> Self {
        Self { a, b, va, vb }
    }

    /// Position of the zero crossing along this edge
    ///
    /// # Panics
    ///
    /// With interpolation on, panics if the parameter is NaN or outside
    /// `[0, 1]`, which happens when both endpoints share a sign or are
    /// non-finite.
    pub fn crossing(&self, use_interpolation: bool) -> Point {
        self.a.mix(&self.b, blend(self.va, self.vb, use_interpolation))
    }
}

/// Parameter along `v1 → v2` where the linear interpolant reaches zero
///
/// Midpoint mode always returns `0.5`.
pub(crate) fn blend(v1: f64, v2: f64, use_interpolation: bool) -> f64 {
    if !use_interpolation {
        return 0.5;
    }
    assert!(
        !v1.is_nan() && !v2.is_nan(),
        "cannot interpolate NaN corner values: {v1}, {v2}"
    );

    let lo = v1.min(v2);
    let hi = v1.max(v2);
    let t = -lo / (hi - lo);
    assert!(
        (0.0..=1.0).contains(&t),
        "crossing parameter {t} out of range for corner values {v1}, {v2}"
    );

    if lo == v1 {
        t
    } else {
        1.0 - t
    }
}
