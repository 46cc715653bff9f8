//! GeoJSON conversion of extracted contours
//!
//! Polylines become `MultiLineString` geometries. Closed polylines repeat
//! their first point at the end, which is how GeoJSON expresses a ring.

use crate::marching_squares::IsoContours;
use crate::polyline::Polyline;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Position, Value as GeoValue};

/// Round a coordinate value to specified decimal places
fn round_coord_with_precision(value: f64, precision: u32) -> f64 {
    let factor = 10_f64.powi(precision as i32);
    (value * factor).round() / factor
}

fn polyline_positions(polyline: &Polyline, precision: u32) -> Vec<Position> {
    let mut positions: Vec<Position> = polyline
        .points()
        .iter()
        .map(|p| {
            vec![
                round_coord_with_precision(p.x, precision),
                round_coord_with_precision(p.y, precision),
            ]
        })
        .collect();

    if polyline.is_closed() && positions.len() > 1 {
        positions.push(positions[0].clone());
    }
    positions
}

/// Build a `MultiLineString` feature for one iso-level
///
/// The feature carries an `"isovalue"` property with `level`.
pub fn to_feature(polylines: &[Polyline], level: f64, precision: u32) -> Feature {
    let lines: Vec<Vec<Position>> = polylines
        .iter()
        .filter(|polyline| !polyline.is_empty())
        .map(|polyline| polyline_positions(polyline, precision))
        .collect();

    let mut properties = JsonObject::new();
    properties.insert("isovalue".to_string(), serde_json::json!(level));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(GeoValue::MultiLineString(lines))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Build a feature collection from multi-level output
///
/// Levels without polylines are left out.
pub fn to_feature_collection(levels: &[IsoContours], precision: u32) -> FeatureCollection {
    let features = levels
        .iter()
        .filter(|iso| iso.polylines.iter().any(|polyline| !polyline.is_empty()))
        .map(|iso| to_feature(&iso.polylines, iso.level, precision))
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
