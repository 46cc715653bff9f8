use field_marching_squares::{find_contours, ContourError, Point, Polyline, Rectangle};

/// Signed distance to a circle: negative inside, positive outside
fn circle_sdf(center: Point, radius: f64) -> impl Fn(Point) -> f64 + Sync {
    move |p: Point| p.distance(&center) - radius
}

/// Mean absolute deviation of contour points from the circle radius
fn mean_radius_error(polylines: &[Polyline], center: Point, radius: f64) -> f64 {
    let (sum, count) = polylines
        .iter()
        .flat_map(|polyline| polyline.points())
        .fold((0.0, 0usize), |(sum, count), p| {
            (sum + (p.distance(&center) - radius).abs(), count + 1)
        });
    sum / count as f64
}

const CENTER: Point = Point {
    x: 5.1234,
    y: 4.9876,
};
const RADIUS: f64 = 2.0;

fn area() -> Rectangle {
    Rectangle::new(0.0, 0.0, 10.0, 10.0)
}

#[test_log::test]
fn test_circle_yields_one_closed_contour() {
    let cell_size = RADIUS / 50.0;
    let contours = find_contours(&circle_sdf(CENTER, RADIUS), area(), cell_size, true).unwrap();

    assert_eq!(contours.len(), 1, "expected a single contour");
    assert!(contours[0].is_closed());
    assert!(contours[0].len() > 100, "contour should be densely sampled");

    for p in contours[0].points() {
        let error = (p.distance(&CENTER) - RADIUS).abs();
        assert!(
            error <= 2.0 * cell_size,
            "point {p:?} is {error} away from the circle"
        );
    }
}

#[test]
fn test_circle_contour_length_close_to_circumference() {
    let cell_size = RADIUS / 50.0;
    let contours = find_contours(&circle_sdf(CENTER, RADIUS), area(), cell_size, true).unwrap();

    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let length = contours[0].length();
    assert!(
        (length - circumference).abs() / circumference < 0.05,
        "length {length} vs circumference {circumference}"
    );
}

#[test]
fn test_circle_bounds_match_radius() {
    let cell_size = RADIUS / 50.0;
    let contours = find_contours(&circle_sdf(CENTER, RADIUS), area(), cell_size, true).unwrap();
    let bounds = contours[0].bounds().unwrap();

    assert!((bounds.width - 2.0 * RADIUS).abs() < 4.0 * cell_size);
    assert!((bounds.height - 2.0 * RADIUS).abs() < 4.0 * cell_size);
    assert!(area().contains(bounds.center()));
}

#[test]
fn test_two_circles_two_contours() {
    let a = Point::new(2.51, 2.49);
    let b = Point::new(7.49, 7.52);
    let field = move |p: Point| (p.distance(&a) - 1.0).min(p.distance(&b) - 1.0);

    let contours = find_contours(&field, area(), 0.05, true).unwrap();

    assert_eq!(contours.len(), 2);
    assert!(contours.iter().all(Polyline::is_closed));
}

#[test]
fn test_constant_fields_have_no_contours() {
    let positive = |_: Point| 1.0;
    let negative = |_: Point| -1.0;
    let zero = |_: Point| 0.0;

    assert!(find_contours(&positive, area(), 0.5, true).unwrap().is_empty());
    assert!(find_contours(&negative, area(), 0.5, true).unwrap().is_empty());
    assert!(find_contours(&zero, area(), 0.5, true).unwrap().is_empty());
    assert!(find_contours(&negative, area(), 0.5, false).unwrap().is_empty());
}

#[test]
fn test_repeated_calls_are_identical() {
    let field = |p: Point| (p.x * 1.3).sin() * (p.y * 0.7).cos() - 0.2;

    let first = find_contours(&field, area(), 0.1, true).unwrap();
    let second = find_contours(&field, area(), 0.1, true).unwrap();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_interpolation_changes_precision_not_topology() {
    let cell_size = RADIUS / 50.0;
    let field = circle_sdf(CENTER, RADIUS);

    let interpolated = find_contours(&field, area(), cell_size, true).unwrap();
    let midpoint = find_contours(&field, area(), cell_size, false).unwrap();

    assert_eq!(interpolated.len(), midpoint.len());
    for (a, b) in interpolated.iter().zip(&midpoint) {
        assert_eq!(a.is_closed(), b.is_closed());
    }

    let interpolated_error = mean_radius_error(&interpolated, CENTER, RADIUS);
    let midpoint_error = mean_radius_error(&midpoint, CENTER, RADIUS);
    assert!(
        midpoint_error > interpolated_error,
        "midpoint error {midpoint_error} should exceed interpolated error {interpolated_error}"
    );
}

#[test_log::test]
fn test_half_plane_closes_along_the_border() {
    // Negative left of x = 4.5, enclosed by the zero-valued border
    let field = |p: Point| p.x - 4.5;
    let contours = find_contours(&field, area(), 1.0, true).unwrap();

    assert_eq!(contours.len(), 1);
    let contour = &contours[0];
    assert!(contour.is_closed());

    // Runs down the left border of the area...
    assert!(contour.points().iter().any(|p| p.x == 0.0));
    // ...and along the interpolated crossing
    assert!(contour.points().iter().any(|p| p.x == 4.5));

    let bounds = contour.bounds().unwrap();
    assert_eq!(bounds.x, 0.0);
    assert_eq!(bounds.y, 0.0);
    assert_eq!(bounds.right(), 4.5);
    assert_eq!(bounds.bottom(), 10.0);
}

#[test]
fn test_half_plane_outside_region_touching_right_border() {
    // Negative right of x = 5.5: the far side reads zero past the last sample
    let field = |p: Point| 5.5 - p.x;
    let contours = find_contours(&field, area(), 1.0, true).unwrap();

    assert_eq!(contours.len(), 1);
    assert!(contours[0].is_closed());
    assert!(contours[0].points().iter().any(|p| p.x == 5.5));
    assert!(contours[0].points().iter().any(|p| p.x == 10.0));
}

#[test]
fn test_area_offset_shifts_contours() {
    let cell_size = 0.1;
    let base = find_contours(&circle_sdf(CENTER, RADIUS), area(), cell_size, true).unwrap();

    let offset = Point::new(CENTER.x + 100.0, CENTER.y - 50.0);
    let moved_area = Rectangle::new(100.0, -50.0, 10.0, 10.0);
    let moved = find_contours(&circle_sdf(offset, RADIUS), moved_area, cell_size, true).unwrap();

    assert_eq!(base.len(), moved.len());
    let bounds = moved[0].bounds().unwrap();
    assert!(moved_area.contains(bounds.center()));
}

#[test]
fn test_degenerate_input_is_rejected() {
    let field = circle_sdf(CENTER, RADIUS);

    assert_eq!(
        find_contours(&field, area(), 0.0, true),
        Err(ContourError::InvalidCellSize(0.0))
    );
    assert_eq!(
        find_contours(&field, Rectangle::new(0.0, 0.0, -1.0, 1.0), 0.1, true),
        Err(ContourError::InvalidArea {
            width: -1.0,
            height: 1.0
        })
    );
}

#[test]
fn test_oversized_grid_is_rejected() {
    let field = |p: Point| p.x - 5.0;

    let result = find_contours(&field, area(), 1e-9, true);

    assert!(
        matches!(result, Err(ContourError::GridTooLarge { .. })),
        "got {result:?}"
    );
}

#[test]
fn test_positive_first_row_is_ignored() {
    // The first row and column are clamped to zero, so positive values
    // there must not change the result of an otherwise negative field
    let negative = |_: Point| -1.0;
    let top_row_positive = |p: Point| if p.y == 0.0 { 1.0 } else { -1.0 };
    let left_column_positive = |p: Point| if p.x == 0.0 { 1.0 } else { -1.0 };

    let expected = find_contours(&negative, area(), 1.0, true).unwrap();
    assert!(expected.is_empty());
    assert_eq!(find_contours(&top_row_positive, area(), 1.0, true).unwrap(), expected);
    assert_eq!(find_contours(&left_column_positive, area(), 1.0, true).unwrap(), expected);
}

#[test]
fn test_cell_larger_than_area() {
    // A single cell: every corner reads zero except bottom-right
    let field = |_: Point| -1.0_f64;
    let bumped = |p: Point| if p.x > 0.5 { -1.0 } else { 1.0 };

    assert!(find_contours(&field, Rectangle::new(0.0, 0.0, 1.0, 1.0), 5.0, true)
        .unwrap()
        .is_empty());
    assert!(find_contours(&bumped, Rectangle::new(0.0, 0.0, 1.0, 1.0), 5.0, true)
        .unwrap()
        .is_empty());
}

#[test]
fn test_nan_field_in_midpoint_mode() {
    // NaN classifies as outside; midpoint placement never interpolates it
    let field = |p: Point| {
        if p.distance(&CENTER) < RADIUS {
            f64::NAN
        } else {
            1.0
        }
    };

    let contours = find_contours(&field, area(), 0.1, false).unwrap();
    assert_eq!(contours.len(), 1);
    assert!(contours[0].is_closed());
}

#[test]
#[should_panic]
fn test_nan_field_panics_when_interpolating() {
    let field = |p: Point| {
        if p.distance(&CENTER) < RADIUS {
            f64::NAN
        } else {
            1.0
        }
    };

    let _ = find_contours(&field, area(), 0.1, true);
}
