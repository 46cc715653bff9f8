//! Axis-aligned sampling area
//!
//! The area handed to the extractor is a plain origin + size rectangle. The
//! origin is the top-left corner; y grows downward.

use crate::error::ContourError;
use crate::point::Point;

/// An axis-aligned rectangle
///
/// # Example
///
/// ```
/// use field_marching_squares::Rectangle;
///
/// let area = Rectangle::new(-1.0, -1.0, 2.0, 2.0);
/// assert_eq!(area.corner().x, -1.0);
/// assert!(area.contains(field_marching_squares::Point::new(0.5, 0.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its top-left corner and size
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle centred on `center`
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    /// Top-left corner
    pub fn corner(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Centre point
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True if `p` lies inside or on the border
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Check the rectangle is finite with a positive size
    pub fn validate(&self) -> Result<(), ContourError> {
        let finite = self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();

        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(ContourError::InvalidArea {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
