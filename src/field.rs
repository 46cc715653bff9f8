//! Scalar field sources
//!
//! The extractor only needs point evaluation. Any `Fn(Point) -> f64 + Sync`
//! closure is a field; [`SampledField`] wraps a row-major buffer of samples
//! (a raster, a heightmap, a model grid) and evaluates it bilinearly.

use crate::error::ContourError;
use crate::point::Point;
use crate::rectangle::Rectangle;

/// A scalar function over the plane
///
/// Implementations must be pure: the extractor may evaluate the same point
/// more than once and from several threads at a time.
pub trait ScalarField: Sync {
    fn value_at(&self, p: Point) -> f64;
}

impl<F> ScalarField for F
where
    F: Fn(Point) -> f64 + Sync,
{
    fn value_at(&self, p: Point) -> f64 {
        self(p)
    }
}

/// A field backed by a grid of samples
///
/// Sample `(0, 0)` sits at the top-left corner of `area` and sample
/// `(width - 1, height - 1)` at its bottom-right corner. Points between
/// samples are interpolated bilinearly; points outside clamp to the edge.
///
/// # Example
///
/// ```
/// use field_marching_squares::{Point, Rectangle, SampledField, ScalarField};
///
/// let field = SampledField::new(
///     2,
///     2,
///     vec![0.0, 10.0, 20.0, 30.0],
///     Rectangle::new(0.0, 0.0, 1.0, 1.0),
/// )
/// .unwrap();
/// assert_eq!(field.value_at(Point::new(0.5, 0.5)), 15.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampledField {
    width: usize,
    height: usize,
    values: Vec<f64>,
    area: Rectangle,
}

impl SampledField {
    /// Wrap a row-major buffer of `width * height` samples spread over `area`
    pub fn new(
        width: usize,
        height: usize,
        values: Vec<f64>,
        area: Rectangle,
    ) -> Result<Self, ContourError> {
        if width == 0 || height == 0 {
            return Err(ContourError::InvalidArea {
                width: width as f64,
                height: height as f64,
            });
        }
        area.validate()?;

        let expected = width
            .checked_mul(height)
            .ok_or(ContourError::SizeMismatch {
                expected: usize::MAX,
                actual: values.len(),
            })?;
        if values.len() != expected {
            return Err(ContourError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }

        Ok(Self {
            width,
            height,
            values,
            area,
        })
    }

    /// Sample `f` on a `width` x `height` lattice spanning `area`
    pub fn from_fn<F: ScalarField>(
        width: usize,
        height: usize,
        area: Rectangle,
        f: &F,
    ) -> Result<Self, ContourError> {
        let mut values = Vec::with_capacity(width.saturating_mul(height));
        for iy in 0..height {
            for ix in 0..width {
                values.push(f.value_at(lattice_point(&area, width, height, ix, iy)));
            }
        }
        Self::new(width, height, values, area)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The rectangle the samples span
    pub fn area(&self) -> Rectangle {
        self.area
    }

    /// Raw sample at integer coordinates
    pub fn sample(&self, ix: usize, iy: usize) -> Option<f64> {
        if ix >= self.width || iy >= self.height {
            return None;
        }
        Some(self.values[iy * self.width + ix])
    }

    fn sample_clamped(&self, ix: isize, iy: isize) -> f64 {
        let x = ix.clamp(0, self.width as isize - 1) as usize;
        let y = iy.clamp(0, self.height as isize - 1) as usize;
        self.values[y * self.width + x]
    }
}

impl ScalarField for SampledField {
    fn value_at(&self, p: Point) -> f64 {
        // Map into sample space
        let gx = if self.width > 1 {
            (p.x - self.area.x) / self.area.width * (self.width - 1) as f64
        } else {
            0.0
        };
        let gy = if self.height > 1 {
            (p.y - self.area.y) / self.area.height * (self.height - 1) as f64
        } else {
            0.0
        };

        let x0 = gx.floor();
        let y0 = gy.floor();
        let dx = gx - x0;
        let dy = gy - y0;
        let (x0, y0) = (x0 as isize, y0 as isize);

        let p00 = self.sample_clamped(x0, y0);
        let p10 = self.sample_clamped(x0 + 1, y0);
        let p01 = self.sample_clamped(x0, y0 + 1);
        let p11 = self.sample_clamped(x0 + 1, y0 + 1);

        let top = p00 * (1.0 - dx) + p10 * dx;
        let bottom = p01 * (1.0 - dx) + p11 * dx;
        top * (1.0 - dy) + bottom * dy
    }
}

fn lattice_point(area: &Rectangle, width: usize, height: usize, ix: usize, iy: usize) -> Point {
    let fx = if width > 1 {
        ix as f64 / (width - 1) as f64
    } else {
        0.0
    };
    let fy = if height > 1 {
        iy as f64 / (height - 1) as f64
    } else {
        0.0
    };
    Point::new(area.x + fx * area.width, area.y + fy * area.height)
}
