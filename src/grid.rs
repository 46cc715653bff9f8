//! Vertex sampling for one extraction call
//!
//! Every interior vertex is shared by four cells, so the field is evaluated
//! once per vertex and cached here. The cache lives only for the duration of
//! a call.

use crate::cell::CellCorners;
use crate::error::ContourError;
use crate::field::ScalarField;
use crate::point::Point;
use crate::rectangle::Rectangle;
use std::mem::size_of;

/// Cached field samples on a regular lattice over an area
#[derive(Debug, Clone)]
pub struct VertexGrid {
    origin: Point,
    cell_size: f64,
    cols: usize,
    rows: usize,
    values: Vec<f64>,
}

impl VertexGrid {
    /// Sample `f` at every vertex `(ix, iy)` with `ix < cols`, `iy < rows`
    ///
    /// `cols = ceil(width / cell_size)` and `rows = ceil(height / cell_size)`.
    /// The caller validates `area` and `cell_size` beforehand.
    ///
    /// # Errors
    ///
    /// [`ContourError::GridTooLarge`] if the vertex cache cannot be allocated.
    pub fn sample<F: ScalarField + ?Sized>(
        f: &F,
        area: &Rectangle,
        cell_size: f64,
    ) -> Result<Self, ContourError> {
        let (cols, rows) = grid_dimensions(area, cell_size)?;
        let origin = area.corner();

        let mut values = Vec::with_capacity(cols * rows);
        for iy in 0..rows {
            for ix in 0..cols {
                values.push(f.value_at(vertex_position(origin, cell_size, ix, iy)));
            }
        }

        Ok(Self {
            origin,
            cell_size,
            cols,
            rows,
            values,
        })
    }

    /// Number of cells across
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells down
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cached sample, `None` outside the sampled range
    pub fn get(&self, ix: usize, iy: usize) -> Option<f64> {
        if ix >= self.cols || iy >= self.rows {
            return None;
        }
        Some(self.values[iy * self.cols + ix])
    }

    /// True when a sample read by some cell is classified inside (`>= 0`)
    ///
    /// The first row and column are never read, the boundary clamp replaces
    /// them with zero, so they are skipped here too.
    pub fn has_inside_sample(&self) -> bool {
        (1..self.rows).any(|iy| {
            self.values[iy * self.cols + 1..(iy + 1) * self.cols]
                .iter()
                .any(|&v| v >= 0.0)
        })
    }

    /// Corners of cell `(x, y)` with the boundary clamp applied
    ///
    /// The top-left corner reads zero on the first row and column, the
    /// top-right on the first row, the bottom-left on the first column.
    /// Corners past the last sampled vertex read zero as well, so every
    /// contour closes at the border of the area.
    pub fn cell_corners(&self, x: usize, y: usize) -> CellCorners {
        let value = |ix: usize, iy: usize| self.get(ix, iy).unwrap_or(0.0);

        let tl = if x == 0 || y == 0 { 0.0 } else { value(x, y) };
        let tr = if y == 0 { 0.0 } else { value(x + 1, y) };
        let bl = if x == 0 { 0.0 } else { value(x, y + 1) };
        let br = value(x + 1, y + 1);

        CellCorners {
            top_left: self.position(x, y),
            top_right: self.position(x + 1, y),
            bottom_left: self.position(x, y + 1),
            bottom_right: self.position(x + 1, y + 1),
            tl,
            tr,
            bl,
            br,
        }
    }

    fn position(&self, ix: usize, iy: usize) -> Point {
        vertex_position(self.origin, self.cell_size, ix, iy)
    }
}

/// Lattice size for `area`, rejected when the cache would not fit in memory
fn grid_dimensions(area: &Rectangle, cell_size: f64) -> Result<(usize, usize), ContourError> {
    // Float to int casts saturate, so a huge ratio shows up as usize::MAX
    let cols = (area.width / cell_size).ceil() as usize;
    let rows = (area.height / cell_size).ceil() as usize;

    match cols.checked_mul(rows) {
        Some(count) if count <= isize::MAX as usize / size_of::<f64>() => Ok((cols, rows)),
        _ => Err(ContourError::GridTooLarge { cols, rows }),
    }
}

fn vertex_position(origin: Point, cell_size: f64, ix: usize, iy: usize) -> Point {
    Point::new(
        ix as f64 * cell_size + origin.x,
        iy as f64 * cell_size + origin.y,
    )
}
