use super::*;

fn subpaths(p: &BezPath) -> usize {
    p.elements()
        .iter()
        .filter(|el| matches!(el, PathEl::MoveTo(_)))
        .count()
}

#[test]
fn every_frame_shape_is_one_closed_contour() {
    for shape in FrameShape::CYCLE {
        let p = frame_path(shape, Point::new(400.0, 400.0), 100.0);
        assert_eq!(subpaths(&p), 1, "{shape:?} has extra subpaths");
        assert!(
            matches!(p.elements().last(), Some(PathEl::ClosePath)),
            "{shape:?} is not closed"
        );
        assert!(p.area().abs() > 1.0, "{shape:?} is degenerate");
    }
}

#[test]
fn bounds_follow_shape_proportions() {
    let c = Point::new(0.0, 0.0);
    let r = 100.0;

    let b = frame_bounds(FrameShape::Diamond, c, r);
    assert!((b.width() - 150.0).abs() < 1e-9);
    assert!((b.height() - 220.0).abs() < 1e-9);

    // Curved outlines are flattened to cubics within the path tolerance.
    let b = frame_bounds(FrameShape::Oval, c, r);
    assert!((b.width() - 200.0).abs() < 0.25);
    assert!((b.height() - 250.0).abs() < 0.25);

    let b = frame_bounds(FrameShape::Rounded, c, r);
    assert!((b.width() - 200.0).abs() < 1e-9);

    let b = frame_bounds(FrameShape::Arch, c, r);
    assert!((b.min_y() + 100.0).abs() < 0.25);
    assert!((b.max_y() - 40.0).abs() < 1e-9);
    assert!((b.width() - 200.0).abs() < 1e-9);
}

#[test]
fn hexagon_and_star_start_at_top() {
    let c = Point::new(50.0, 50.0);
    for shape in [FrameShape::Hexagon, FrameShape::Star] {
        let p = frame_path(shape, c, 10.0);
        let Some(PathEl::MoveTo(first)) = p.elements().first().copied() else {
            panic!("{shape:?} does not start with move_to");
        };
        assert!((first.x - 50.0).abs() < 1e-9);
        assert!((first.y - 40.0).abs() < 1e-9);
    }
}

#[test]
fn star_alternates_inner_and_outer_radius() {
    let c = Point::new(0.0, 0.0);
    let p = frame_path(FrameShape::Star, c, 10.0);
    let pts: Vec<Point> = p
        .elements()
        .iter()
        .filter_map(|el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(pts.len(), 10);
    for (i, pt) in pts.iter().enumerate() {
        let expect = if i % 2 == 0 { 10.0 } else { 5.0 };
        assert!((pt.distance(c) - expect).abs() < 1e-9);
    }
}

#[test]
fn heart_is_scaled_and_symmetric() {
    let b = frame_bounds(FrameShape::Heart, Point::new(0.0, 0.0), 100.0);
    assert!((b.max_y() - 115.0 * 0.7).abs() < 1e-6);
    assert!((b.min_x() + b.max_x()).abs() < 1e-6);
}

#[test]
fn polyline_stays_open() {
    let p = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    assert!(!matches!(p.elements().last(), Some(PathEl::ClosePath)));
    let p = polygon(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    assert!(matches!(p.elements().last(), Some(PathEl::ClosePath)));
}
