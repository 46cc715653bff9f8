use std::hash::{Hash, Hasher};

/// A point in 2D space
///
/// The y axis grows downward: "top" edges of a cell have the smaller y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point used as "no previous vertex" while stitching
    pub(crate) const INFINITY: Point = Point {
        x: f64::INFINITY,
        y: f64::INFINITY,
    };

    /// Linear blend towards `other`: `self * (1 - t) + other * t`
    pub fn mix(&self, other: &Point, t: f64) -> Point {
        Point {
            x: self.x * (1.0 - t) + other.x * t,
            y: self.y * (1.0 - t) + other.y * t,
        }
    }

    /// Squared euclidean distance to `other`
    pub fn squared_distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &Point) -> f64 {
        self.squared_distance(other).sqrt()
    }

    /// Exact bitwise key for hashing
    pub fn key(&self) -> PointKey {
        PointKey {
            x: self.x.to_bits(),
            y: self.y.to_bits(),
        }
    }
}

/// Bit pattern of a [`Point`], usable as a `HashMap` key
///
/// Two points map to the same key only when their coordinates are
/// bit-identical. `0.0` and `-0.0` are distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointKey {
    x: u64,
    y: u64,
}

impl Hash for PointKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl From<Point> for PointKey {
    fn from(p: Point) -> Self {
        p.key()
    }
}
