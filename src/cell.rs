use crate::edge::{Edge, Side};
use crate::point::Point;
use arrayvec::ArrayVec;

/// Segments emitted by a single cell (never more than two)
pub type CellSegments = ArrayVec<LineSegment, 2>;

/// A line segment emitted by a cell
///
/// `start` lies on the first edge named by the case table, `end` on the
/// second. Orientation is not consistent along a contour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
    pub start_side: Side,
    pub end_side: Side,
}

/// Corner positions and values of one grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellCorners {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,

    pub tl: f64,
    pub tr: f64,
    pub bl: f64,
    pub br: f64,
}

impl CellCorners {
    /// Corners of the axis-aligned square with top-left `origin` and side `size`
    pub fn square(origin: Point, size: f64, tl: f64, tr: f64, bl: f64, br: f64) -> Self {
        Self {
            top_left: origin,
            top_right: Point::new(origin.x + size, origin.y),
            bottom_left: Point::new(origin.x, origin.y + size),
            bottom_right: Point::new(origin.x + size, origin.y + size),
            tl,
            tr,
            bl,
            br,
        }
    }

    fn edge(&self, side: Side) -> Edge {
        match side {
            Side::Top => Edge::new(self.top_left, self.top_right, self.tl, self.tr),
            Side::Right => Edge::new(self.top_right, self.bottom_right, self.tr, self.br),
            Side::Bottom => Edge::new(self.bottom_left, self.bottom_right, self.bl, self.br),
            Side::Left => Edge::new(self.top_left, self.bottom_left, self.tl, self.bl),
        }
    }
}

/// Binary cell classification for the zero level
///
/// A corner is inside when its value is `>= 0`; NaN is outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Bit pattern: tl(1) | tr(2) | bl(4) | br(8)
    value: u8,
}

impl Cell {
    /// Classify a cell from its corner values
    pub fn classify(tl: f64, tr: f64, bl: f64, br: f64) -> Self {
        let mut value = 0u8;
        value |= if tl >= 0.0 { 1 } else { 0 };
        value |= if tr >= 0.0 { 2 } else { 0 };
        value |= if bl >= 0.0 { 4 } else { 0 };
        value |= if br >= 0.0 { 8 } else { 0 };
        Self { value }
    }

    /// Get the binary classification value (0-15)
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Edge pairs connected by this configuration
    ///
    /// A configuration and its complement (`15 ^ value`) share an entry.
    /// The saddles (6 and 9) always pair left→top and bottom→right.
    pub fn edge_pairs(&self) -> &'static [(Side, Side)] {
        use Side::*;
        match self.value.min(15 ^ self.value) {
            1 => &[(Left, Top)],
            2 => &[(Top, Right)],
            3 => &[(Left, Right)],
            4 => &[(Left, Bottom)],
            5 => &[(Top, Bottom)],
            6 => &[(Left, Top), (Bottom, Right)],
            7 => &[(Bottom, Right)],
            _ => &[],
        }
    }
}

/// Emit the segments of one cell
///
/// # Panics
///
/// With interpolation on, panics when a crossing edge has a NaN endpoint.
pub fn emit_cell_segments(corners: &CellCorners, use_interpolation: bool) -> CellSegments {
    let cell = Cell::classify(corners.tl, corners.tr, corners.bl, corners.br);

    cell.edge_pairs()
        .iter()
        .map(|&(from, to)| LineSegment {
            start: corners.edge(from).crossing(use_interpolation),
            end: corners.edge(to).crossing(use_interpolation),
            start_side: from,
            end_side: to,
        })
        .collect()
}
