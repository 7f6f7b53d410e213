use kurbo::{BezPath, Circle, Ellipse, PathEl, Point, Rect, RoundedRect, Shape};

use crate::template::model::FrameShape;

const TOLERANCE: f64 = 0.1;

/// Closed outline of a photo frame centered at `center` with radius `r` (pixels).
///
/// The same path is used to clip the photo, to fill the placeholder, and to stroke the border.
pub fn frame_path(shape: FrameShape, center: Point, r: f64) -> BezPath {
    let (cx, cy) = (center.x, center.y);
    let mut p = match shape {
        FrameShape::Circle => Circle::new(center, r).to_path(TOLERANCE),
        FrameShape::Oval => Ellipse::new(center, (r, r * 1.25), 0.0).to_path(TOLERANCE),
        FrameShape::Rounded => {
            RoundedRect::new(cx - r, cy - r, cx + r, cy + r, r * 0.2).to_path(TOLERANCE)
        }
        FrameShape::Heart => {
            let s = r * 1.15;
            let mut p = BezPath::new();
            p.move_to((cx, cy + s * 0.7));
            p.curve_to(
                (cx - s * 1.3, cy - s * 0.2),
                (cx - s * 0.7, cy - s * 1.1),
                (cx, cy - s * 0.45),
            );
            p.curve_to(
                (cx + s * 0.7, cy - s * 1.1),
                (cx + s * 1.3, cy - s * 0.2),
                (cx, cy + s * 0.7),
            );
            p
        }
        FrameShape::Diamond => polygon(&[
            (cx, cy - r * 1.1),
            (cx + r * 0.75, cy),
            (cx, cy + r * 1.1),
            (cx - r * 0.75, cy),
        ]),
        FrameShape::Hexagon => {
            let pts: Vec<(f64, f64)> = (0..6u32)
                .map(|i| {
                    let a = std::f64::consts::FRAC_PI_3 * f64::from(i) - std::f64::consts::FRAC_PI_2;
                    (cx + r * a.cos(), cy + r * a.sin())
                })
                .collect();
            polygon(&pts)
        }
        FrameShape::Star => {
            let pts: Vec<(f64, f64)> = (0..10u32)
                .map(|i| {
                    let a = std::f64::consts::PI / 5.0 * f64::from(i) - std::f64::consts::FRAC_PI_2;
                    let rad = if i % 2 == 0 { r } else { r * 0.5 };
                    (cx + rad * a.cos(), cy + rad * a.sin())
                })
                .collect();
            polygon(&pts)
        }
        FrameShape::Arch => {
            // Straight sides down to 0.4r below center, semicircular top of radius r.
            let mut p = BezPath::new();
            p.move_to((cx - r, cy + r * 0.4));
            p.line_to((cx - r, cy));
            let top = kurbo::Arc {
                center,
                radii: kurbo::Vec2::new(r, r),
                start_angle: std::f64::consts::PI,
                sweep_angle: std::f64::consts::PI,
                x_rotation: 0.0,
            };
            top.to_cubic_beziers(TOLERANCE, |p1, p2, p3| p.curve_to(p1, p2, p3));
            p.line_to((cx + r, cy + r * 0.4));
            p
        }
    };
    ensure_closed(&mut p);
    p
}

/// Axis-aligned bounds of the frame outline.
pub fn frame_bounds(shape: FrameShape, center: Point, r: f64) -> Rect {
    frame_path(shape, center, r).bounding_box()
}

/// Closed polygon through `pts`.
pub fn polygon(pts: &[(f64, f64)]) -> BezPath {
    let mut p = BezPath::new();
    for (i, &pt) in pts.iter().enumerate() {
        if i == 0 {
            p.move_to(pt);
        } else {
            p.line_to(pt);
        }
    }
    p.close_path();
    p
}

/// Open polyline through `pts`.
pub fn polyline(pts: &[(f64, f64)]) -> BezPath {
    let mut p = BezPath::new();
    for (i, &pt) in pts.iter().enumerate() {
        if i == 0 {
            p.move_to(pt);
        } else {
            p.line_to(pt);
        }
    }
    p
}

/// Rounded rectangle outline.
pub fn rounded_rect(rect: Rect, radius: f64) -> BezPath {
    let mut p = RoundedRect::from_rect(rect, radius).to_path(TOLERANCE);
    ensure_closed(&mut p);
    p
}

/// Circle outline.
pub fn circle(center: Point, r: f64) -> BezPath {
    let mut p = Circle::new(center, r).to_path(TOLERANCE);
    ensure_closed(&mut p);
    p
}

fn ensure_closed(p: &mut BezPath) {
    if !matches!(p.elements().last(), Some(PathEl::ClosePath) | None) {
        p.close_path();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
