use super::*;
use crate::foundation::core::CARD_CANVAS;
use crate::render::recording::{Op, RecordingSurface};

#[test]
fn gold_corners_double_only_at_the_top() {
    let mut s = RecordingSurface::default();
    let layer = draw_border_decor(&mut s, BorderDecor::Gold, CARD_CANVAS);
    assert!(layer.spans().is_empty());

    let strokes: Vec<Rect> = s
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Stroke { bounds, width, paint } => {
                assert_eq!(*width, 3.0);
                assert_eq!(*paint, Paint::Solid(Rgba8::GOLD.fade(0.25)));
                Some(*bounds)
            }
            _ => None,
        })
        .collect();
    assert_eq!(strokes.len(), 6);
    assert_eq!(strokes[0], Rect::new(20.0, 20.0, 80.0, 80.0));
    assert_eq!(strokes[1], Rect::new(30.0, 30.0, 70.0, 70.0));
    assert_eq!(strokes[3], Rect::new(730.0, 30.0, 770.0, 70.0));
    assert_eq!(strokes[5], Rect::new(720.0, 920.0, 780.0, 980.0));
}

#[test]
fn floral_lines_top_and_bottom_edges() {
    let mut s = RecordingSurface::default();
    let layer = draw_border_decor(&mut s, BorderDecor::Floral, CARD_CANVAS);
    assert!(s.ops.is_empty());
    let spans = layer.spans();
    assert_eq!(spans.len(), 16);
    assert_eq!((spans[0].text.as_str(), spans[0].x, spans[0].y), ("❀", 30.0, 35.0));
    assert_eq!((spans[1].text.as_str(), spans[1].y), ("❁", 982.0));
    assert!((spans[14].x - 770.0).abs() < 1e-9);
}

#[test]
fn sparkle_ring_is_inset() {
    let mut s = RecordingSurface::default();
    let layer = draw_border_decor(&mut s, BorderDecor::Sparkle, CARD_CANVAS);
    let spans = layer.spans();
    assert_eq!(spans.len(), 20);
    assert!((spans[0].x - 775.0).abs() < 1e-9);
    assert!((spans[0].y - 500.0).abs() < 1e-9);
    assert_eq!(spans[0].fill, Rgba8::GOLD);
    assert_eq!(spans[0].opacity, 0.2);
}

#[test]
fn ribbon_draws_outer_bars_then_inner_frame() {
    let mut s = RecordingSurface::default();
    draw_border_decor(&mut s, BorderDecor::Ribbon, CARD_CANVAS);
    let rects: Vec<(Rect, Paint)> = s
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::FillRect { rect, paint } => Some((*rect, paint.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(rects.len(), 8);
    assert_eq!(rects[0].0, Rect::new(0.0, 0.0, 800.0, 8.0));
    assert_eq!(rects[4].0, Rect::new(15.0, 15.0, 785.0, 19.0));
    assert_eq!(rects[7].0, Rect::new(781.0, 15.0, 785.0, 985.0));
    assert_ne!(rects[0].1, rects[4].1);
}

#[test]
fn none_is_a_no_op() {
    let mut s = RecordingSurface::default();
    let layer = draw_border_decor(&mut s, BorderDecor::None, CARD_CANVAS);
    assert!(s.ops.is_empty());
    assert!(layer.spans().is_empty());
}

#[test]
fn emoji_placement() {
    let deco = Decorations {
        top_emoji: Some("🎂".into()),
        bottom_emoji: Some("🎉".into()),
        corner_emojis: Some(["🎈".into(), "🎁".into()]),
        border_decor: BorderDecor::None,
    };
    let layer = emoji_layer(&deco, CARD_CANVAS);
    let spans = layer.spans();
    assert_eq!(spans.len(), 6);
    assert_eq!((spans[0].x, spans[0].y, spans[0].size), (400.0, 60.0, 48.0));
    assert_eq!(spans[1].y, 960.0);
    assert!(spans.iter().all(|s| s.anchor == Anchor::Middle));

    let corners: Vec<(&str, f64, f64)> = spans[2..]
        .iter()
        .map(|s| (s.text.as_str(), s.x, s.y))
        .collect();
    assert_eq!(
        corners,
        vec![
            ("🎈", 40.0, 50.0),
            ("🎁", 760.0, 50.0),
            ("🎈", 40.0, 970.0),
            ("🎁", 760.0, 970.0),
        ]
    );
    assert!(spans[2..].iter().all(|s| s.opacity == 0.5 && s.size == 32.0));
}

#[test]
fn no_emoji_means_empty_layer() {
    let layer = emoji_layer(&Decorations::default(), CARD_CANVAS);
    assert!(layer.is_empty());
}
