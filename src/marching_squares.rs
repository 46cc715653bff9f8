//! Contour extraction entry points
//!
//! Sampling, per-cell emission and stitching are wired together here. All
//! working data (vertex cache, segment list, adjacency map) is owned by the
//! call, so extraction is reentrant as long as the field is.

use crate::cell::emit_cell_segments;
use crate::config::{validate_cell_size, ContourConfig};
use crate::error::ContourError;
use crate::field::ScalarField;
use crate::grid::VertexGrid;
use crate::isoline_assembler::IsolineAssembler;
use crate::point::Point;
use crate::polyline::Polyline;
use crate::rectangle::Rectangle;
use log::{debug, trace};
use std::time::Instant;

/// Contours extracted for one iso-level
#[derive(Debug, Clone, PartialEq)]
pub struct IsoContours {
    pub level: f64,
    pub polylines: Vec<Polyline>,
}

/// Extract the zero level-set of `f` over `area`
///
/// Samples `f` on a lattice of `cell_size` spacing, classifies every cell by
/// corner sign (`>= 0` is inside), emits segments from the 16-case table and
/// stitches them into polylines. Crossings are placed by linear
/// interpolation when `use_interpolation` is set, otherwise at edge
/// midpoints.
///
/// Corners on the top row and left column of the area, and corners past the
/// last sampled vertex, read as zero so contours close at the border. A
/// field with no inside sample among the vertices cells read yields no
/// contours.
///
/// # Errors
///
/// [`ContourError::InvalidCellSize`] if `cell_size` is not finite and
/// positive, [`ContourError::InvalidArea`] if `area` is not finite with a
/// positive size, [`ContourError::GridTooLarge`] if `cell_size` is so small
/// relative to `area` that the vertex cache cannot be allocated.
///
/// # Panics
///
/// With interpolation on, panics if a NaN sample sits next to an inside
/// corner.
///
/// # Example
///
/// ```
/// use field_marching_squares::{find_contours, Point, Rectangle};
///
/// let circle = |p: Point| p.distance(&Point::new(0.0, 0.0)) - 1.0;
/// let area = Rectangle::new(-2.0, -2.0, 4.0, 4.0);
///
/// let contours = find_contours(&circle, area, 0.05, true).unwrap();
/// assert_eq!(contours.len(), 1);
/// assert!(contours[0].is_closed());
/// ```
pub fn find_contours<F: ScalarField + ?Sized>(
    f: &F,
    area: Rectangle,
    cell_size: f64,
    use_interpolation: bool,
) -> Result<Vec<Polyline>, ContourError> {
    validate_cell_size(cell_size)?;
    area.validate()?;

    let grid = VertexGrid::sample(f, &area, cell_size)?;

    if !grid.has_inside_sample() {
        debug!(
            "no inside samples on {}x{} grid, skipping extraction",
            grid.cols(),
            grid.rows()
        );
        return Ok(Vec::new());
    }

    let mut assembler = IsolineAssembler::new();
    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            let corners = grid.cell_corners(x, y);
            assembler.add_cell_segments(emit_cell_segments(&corners, use_interpolation));
        }
    }

    let polylines = assembler.assemble();

    debug!(
        "{}x{} grid: {} segments stitched into {} polylines",
        grid.cols(),
        grid.rows(),
        assembler.segment_count(),
        polylines.len()
    );

    Ok(polylines)
}

/// [`find_contours`] with cell size and interpolation taken from `config`
pub fn find_contours_with_config<F: ScalarField + ?Sized>(
    f: &F,
    area: Rectangle,
    config: &ContourConfig,
) -> Result<Vec<Polyline>, ContourError> {
    find_contours(f, area, config.cell_size, config.use_interpolation)
}

/// Extract the set where `f` equals `level`
pub fn find_contours_at_level<F: ScalarField + ?Sized>(
    f: &F,
    area: Rectangle,
    level: f64,
    config: &ContourConfig,
) -> Result<Vec<Polyline>, ContourError> {
    let shifted = |p: Point| f.value_at(p) - level;
    find_contours_with_config(&shifted, area, config)
}

/// Extract several iso-levels in parallel
///
/// Each level is computed independently on Rayon's thread pool; the field is
/// shared read-only. Results are returned in the order of `levels`, levels
/// without contours included.
///
/// # Example
///
/// ```
/// use field_marching_squares::{find_contours_at_levels, ContourConfig, Point, Rectangle};
///
/// let distance = |p: Point| p.distance(&Point::new(0.0, 0.0));
/// let area = Rectangle::new(-4.0, -4.0, 8.0, 8.0);
/// let config = ContourConfig::new(0.1).unwrap();
///
/// let rings = find_contours_at_levels(&distance, area, &[1.0, 2.0, 3.0], &config).unwrap();
/// assert_eq!(rings.len(), 3);
/// assert!(rings.iter().all(|iso| iso.polylines.len() == 1));
/// ```
pub fn find_contours_at_levels<F: ScalarField + ?Sized>(
    f: &F,
    area: Rectangle,
    levels: &[f64],
    config: &ContourConfig,
) -> Result<Vec<IsoContours>, ContourError> {
    use rayon::prelude::*;

    config.validate()?;
    area.validate()?;

    levels
        .par_iter()
        .map(|&level| {
            let started = Instant::now();
            let polylines = find_contours_at_level(f, area, level, config)?;
            trace!(
                "level {level}: {} polylines in {:?}",
                polylines.len(),
                started.elapsed()
            );
            Ok(IsoContours { level, polylines })
        })
        .collect()
}
