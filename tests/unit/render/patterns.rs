use super::*;
use crate::foundation::core::CARD_CANVAS;
use crate::render::recording::{Op, RecordingSurface};

fn run(tag: PatternTag) -> (RecordingSurface, TextLayer) {
    let mut s = RecordingSurface::default();
    let layer = draw_pattern(&mut s, tag, CARD_CANVAS);
    (s, layer)
}

#[test]
fn none_draws_nothing() {
    let (s, layer) = run(PatternTag::None);
    assert!(s.ops.is_empty());
    assert!(layer.spans().is_empty());
}

#[test]
fn glyph_motifs_only_emit_text() {
    let expected = [
        (PatternTag::Stars, 25),
        (PatternTag::Hearts, 20),
        (PatternTag::Floral, 18),
        (PatternTag::Sparkles, 30),
        (PatternTag::Diyas, 15),
        (PatternTag::Snowflakes, 20),
        (PatternTag::Crescents, 15),
        (PatternTag::Balloons, 12),
    ];
    for (tag, n) in expected {
        let (s, layer) = run(tag);
        assert!(s.ops.is_empty(), "{tag:?} drew shapes");
        assert_eq!(layer.spans().len(), n, "{tag:?}");
        assert!(layer.spans().iter().all(|sp| sp.anchor == Anchor::Start));
    }
}

#[test]
fn stars_follow_the_index_hash() {
    let (_, layer) = run(PatternTag::Stars);
    let first = &layer.spans()[0];
    assert_eq!(first.text, "★");
    assert!((first.x - 400.0).abs() < 1e-9);
    assert!((first.y - 950.0).abs() < 1e-9);
    assert_eq!(first.opacity, 0.1);
    assert_eq!(first.size, 28.0);
    assert_eq!(layer.spans()[1].text, "✦");
    assert_eq!(layer.spans()[3].text, "★");
}

#[test]
fn dots_cover_the_grid() {
    let (s, layer) = run(PatternTag::Dots);
    assert!(layer.spans().is_empty());
    // 16 columns (20..=770) by 20 rows (20..=970).
    assert_eq!(s.count(|op| matches!(op, Op::Fill { .. })), 320);
    let Some(Op::Fill { paint, .. }) = s.ops.first() else {
        panic!("expected a fill");
    };
    assert_eq!(*paint, Paint::Solid(Rgba8::rgba(255, 255, 255, 15)));
}

#[test]
fn confetti_cycles_palette_and_resets_transform() {
    let (s, _) = run(PatternTag::Confetti);
    let fills: Vec<&Paint> = s
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::FillRect { paint, .. } => Some(paint),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 40);
    assert_eq!(*fills[0], Paint::Solid(CONFETTI_COLORS[0].fade(0.12)));
    assert_eq!(*fills[7], Paint::Solid(CONFETTI_COLORS[1].fade(0.12)));
    assert_eq!(s.ops.last(), Some(&Op::Transform(Affine::IDENTITY)));
}

#[test]
fn stroked_motifs_have_expected_counts() {
    let strokes = |tag| {
        let (s, _) = run(tag);
        s.count(|op| matches!(op, Op::Stroke { .. }))
    };
    assert_eq!(strokes(PatternTag::Waves), 8);
    assert_eq!(strokes(PatternTag::Mandala), 6 + 6 * 12);
    assert_eq!(strokes(PatternTag::Rangoli), 4);
    assert_eq!(strokes(PatternTag::Ribbons), 5);
}

#[test]
fn ribbons_are_deterministic() {
    let (a, _) = run(PatternTag::Ribbons);
    let (b, _) = run(PatternTag::Ribbons);
    assert_eq!(a.ops, b.ops);
    let Some(Op::Stroke { bounds, width, .. }) = a.ops.first() else {
        panic!("expected a stroke");
    };
    assert_eq!(*width, 3.0);
    assert!((bounds.min_y() - 0.0).abs() < 1e-9);
    assert!((bounds.max_y() - 1000.0).abs() < 1e-9);
}

#[test]
fn rangoli_outer_diamond_size() {
    let (s, _) = run(PatternTag::Rangoli);
    let Some(Op::Stroke { bounds, .. }) = s.ops.last() else {
        panic!("expected a stroke");
    };
    assert!((bounds.width() - 2.0 * 310.0).abs() < 1e-9);
}
