//! Isoline segment assembly module
//!
//! This module stitches the segments emitted by individual cells into
//! polylines. Segments are joined when their endpoints are bit-identical;
//! both cells sharing an edge compute the crossing with the same inputs, so
//! no epsilon merging is needed.

use crate::cell::LineSegment;
use crate::point::{Point, PointKey};
use crate::polyline::Polyline;
use log::trace;
use std::collections::HashMap;

/// Squared distance under which consecutive points are collapsed
const DEDUP_SQUARED_DISTANCE: f64 = 1e-5;

/// Assembles cell line segments into polylines
#[derive(Debug, Default)]
pub struct IsolineAssembler {
    segments: Vec<LineSegment>,
    incident: HashMap<PointKey, Vec<usize>>,
}

impl IsolineAssembler {
    /// Create a new assembler
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a segment under both of its endpoints
    ///
    /// Zero-length segments are dropped. They appear when a sample is
    /// exactly zero and both crossing edges of a cell end on that vertex.
    pub fn add_segment(&mut self, segment: LineSegment) {
        if segment.start.key() == segment.end.key() {
            trace!("dropping zero-length segment at {:?}", segment.start);
            return;
        }

        let idx = self.segments.len();
        self.incident.entry(segment.start.key()).or_default().push(idx);
        self.incident.entry(segment.end.key()).or_default().push(idx);
        self.segments.push(segment);
    }

    /// Add all segments from a cell
    pub fn add_cell_segments(&mut self, segments: impl IntoIterator<Item = LineSegment>) {
        for segment in segments {
            self.add_segment(segment);
        }
    }

    /// Number of segments registered so far
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Assemble all segments into polylines, in emission order
    pub fn assemble(&self) -> Vec<Polyline> {
        let mut polylines = Vec::new();
        let mut visited = vec![false; self.segments.len()];

        for start_idx in 0..self.segments.len() {
            if visited[start_idx] {
                continue;
            }
            polylines.push(self.trace_polyline(start_idx, &mut visited));
        }

        polylines
    }

    /// Walk from `start_idx` until no unvisited neighbour remains
    ///
    /// Each step records the current segment's start point and moves to an
    /// unvisited segment touching that start point, falling back to one
    /// touching its end point. Any start point with fewer than two incident
    /// segments marks the polyline open.
    fn trace_polyline(&self, start_idx: usize, visited: &mut [bool]) -> Polyline {
        let mut points = Vec::new();
        let mut closed = true;
        let mut last = Point::INFINITY;
        let mut current = start_idx;

        loop {
            let segment = &self.segments[current];

            if last.squared_distance(&segment.start) > DEDUP_SQUARED_DISTANCE {
                points.push(segment.start);
            }
            last = segment.start;
            visited[current] = true;

            if self.incident_to(&segment.start).len() < 2 {
                closed = false;
            }

            let next = match self.unvisited_at(&segment.start, visited) {
                Some(idx) => Some(idx),
                None => self.unvisited_at(&segment.end, visited),
            };

            match next {
                Some(idx) if idx != start_idx => current = idx,
                _ => break,
            }
        }

        Polyline::new(points, closed)
    }

    fn incident_to(&self, point: &Point) -> &[usize] {
        self.incident
            .get(&point.key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn unvisited_at(&self, point: &Point, visited: &[bool]) -> Option<usize> {
        self.incident_to(point)
            .iter()
            .copied()
            .find(|&idx| !visited[idx])
    }
}
