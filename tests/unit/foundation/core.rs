use super::*;

#[test]
fn card_canvas_percent_conversions() {
    let c = CARD_CANVAS;
    assert_eq!(c.pct_x(50.0), 400.0);
    assert_eq!(c.pct_y(10.0), 100.0);
    assert_eq!(c.min_side(), 800.0);
    assert_eq!(c.center(), Point::new(400.0, 500.0));
}

#[test]
fn premultiply_rounds_to_nearest() {
    let p = Rgba8Premul::from_straight_rgba(100, 50, 200, 128);
    assert_eq!(p.r, ((100u16 * 128 + 127) / 255) as u8);
    assert_eq!(p.g, ((50u16 * 128 + 127) / 255) as u8);
    assert_eq!(p.b, ((200u16 * 128 + 127) / 255) as u8);
    assert_eq!(p.a, 128);
}

#[test]
fn fade_scales_alpha() {
    let c = Rgba8::WHITE.fade(0.5);
    assert_eq!(c.a, 128);
    let c = Rgba8::rgba(0, 0, 0, 100).fade(2.0);
    assert_eq!(c.a, 100);
}
