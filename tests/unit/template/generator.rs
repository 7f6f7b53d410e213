use super::*;
use crate::template::model::{BorderDecor, PatternTag};

fn book() -> ThemeBook {
    ThemeBook::builtin()
}

#[test]
fn count_is_exact() {
    let themes = book();
    assert_eq!(generate_templates(&themes, "birthday-friend", 12).len(), 12);
    assert_eq!(generate_templates(&themes, "birthday-friend", 0).len(), 0);
    assert_eq!(generate_templates(&themes, "birthday-friend", 40).len(), 40);
}

#[test]
fn first_friend_template_matches_expected_design() {
    let t = &generate_templates(&book(), "birthday-friend", 12)[0];
    assert_eq!(t.id, "birthday-friend-t0");
    assert_eq!(t.occasion_id, "birthday-friend");
    assert_eq!(t.layout.kind, LayoutType::Center);
    assert_eq!(t.frame.shape, FrameShape::Circle);
    assert_eq!(t.greeting.line1, "Happy Birthday!");
    assert_eq!(t.greeting.line2.as_deref(), Some("To My Amazing Friend"));
    // center base (50, 40, 26) with jitter -4 / -3 at index 0.
    assert_eq!((t.frame.x, t.frame.y, t.frame.size), (50.0, 37.0, 22.0));
    assert_eq!(t.greeting.y, 10.0);
    assert_eq!(t.name_style.y, 78.0);
    assert_eq!(t.greeting.line1_size, 32.0);
    assert_eq!(t.greeting.line2_size, Some(20.0));
    assert_eq!(t.greeting.font_style, FontStyle::Bold);
    assert_eq!(t.frame.border_color, "rgba(255,255,255,0.9)");
    assert_eq!(t.frame.border_width, 3.0);
    assert_eq!(t.frame.glow_color.as_deref(), Some("rgba(255,215,0,0.3)"));
    assert!(t.frame.shadow);
    assert_eq!(t.background.pattern, PatternTag::Balloons);
    assert_eq!(t.decorations.border_decor, BorderDecor::Sparkle);
    assert_eq!(t.name_style.prefix.as_deref(), Some("Dear "));
    assert!(t.name_style.badge);
    assert_eq!(t.name_style.badge_color.as_deref(), Some("rgba(255,215,0,0.3)"));
    assert_eq!(t.decorations.top_emoji.as_deref(), Some("🎂"));
    assert!(t.decorations.bottom_emoji.is_none());
    assert_eq!(
        t.decorations.corner_emojis,
        Some(["🎂".to_string(), "🎈".to_string()])
    );
}

#[test]
fn index_seven_is_banner_star() {
    let ts = generate_templates(&book(), "birthday-friend", 12);
    assert_eq!(ts[7].layout.kind, LayoutType::Banner);
    assert_eq!(ts[7].frame.shape, FrameShape::Star);
    assert!(!ts[7].frame.shadow);
}

#[test]
fn layouts_and_shapes_cycle_in_index_order() {
    let ts = generate_templates(&book(), "festival-diwali", 15);
    for (i, t) in ts.iter().enumerate() {
        assert_eq!(t.layout.kind, LayoutType::CYCLE[i % 8]);
        assert_eq!(t.frame.shape, FrameShape::CYCLE[i % 8]);
        assert_eq!(t.id, format!("festival-diwali-t{i}"));
    }
}

#[test]
fn generation_is_deterministic() {
    let themes = book();
    let a = generate_templates(&themes, "love-valentine", 12);
    let b = generate_templates(&themes, "love-valentine", 12);
    assert_eq!(a, b);
}

#[test]
fn unknown_occasion_uses_default_theme_and_count() {
    let themes = book();
    let catalog = Catalog::builtin();
    let ts = templates_for_occasion(&catalog, &themes, "nonexistent-occasion-id");
    assert_eq!(ts.len(), 10);
    assert_eq!(ts[0].greeting.line1, "Best Wishes!");
    assert_eq!(ts[1].greeting.line1, "Warm Greetings!");
    assert_eq!(ts[0].background.pattern, PatternTag::Sparkles);
    assert_eq!(
        ts[0].background.gradient,
        "linear-gradient(135deg, #667eea, #764ba2)"
    );
}

#[test]
fn catalog_counts_drive_occasion_generation() {
    let themes = book();
    let catalog = Catalog::builtin();
    assert_eq!(templates_for_occasion(&catalog, &themes, "birthday-friend").len(), 12);
    assert_eq!(templates_for_occasion(&catalog, &themes, "festival-diwali").len(), 15);
}

#[test]
fn every_generated_template_is_valid() {
    let themes = book();
    let catalog = Catalog::builtin();
    for occ in catalog.occasions() {
        for t in templates_for_occasion(&catalog, &themes, occ.id) {
            t.validate().unwrap();
            assert!((0.0..=100.0).contains(&t.frame.x));
            assert!((0.0..=100.0).contains(&t.frame.y));
            assert!(t.frame.size >= MIN_FRAME_SIZE && t.frame.size <= 100.0);
            if t.name_style.badge {
                assert!(t.name_style.badge_color.is_some());
            }
            if t.greeting.line2.is_some() {
                assert!(t.greeting.line2_size.is_some());
            }
        }
    }
}

#[test]
fn cyclic_palettes_follow_index() {
    let ts = generate_templates(&book(), "birthday-friend", 12);
    assert!(ts[4].frame.glow_color.is_none());
    assert_eq!(ts[3].name_style.badge_color.as_deref(), Some("rgba(255,255,255,0.15)"));
    assert!(!ts[1].name_style.badge);
    assert!(ts[1].name_style.badge_color.is_none());
    assert_eq!(ts[1].decorations.bottom_emoji.as_deref(), Some("🥳"));
    assert!(ts[1].decorations.top_emoji.is_none());
    assert_eq!(ts[2].frame.border_width, 5.0);
    assert_eq!(ts[3].greeting.line1_size, 44.0);
    assert_eq!(ts[3].name_style.font_size, 32.0);
    assert_eq!(ts[2].greeting.font_style, FontStyle::Elegant);
}

#[test]
fn layout_base_table() {
    let b = LayoutBase::of(LayoutType::Left);
    assert_eq!((b.frame_x, b.frame_y, b.frame_size), (30.0, 45.0, 22.0));
    assert_eq!((b.greeting_y, b.name_y), (10.0, 80.0));
    assert_eq!(LayoutBase::of(LayoutType::FullBg).frame_size, 30.0);
}

fn base(frame_y: f64, frame_size: f64) -> LayoutBase {
    LayoutBase {
        frame_x: 50.0,
        frame_y,
        frame_size,
        greeting_y: 10.0,
        name_y: 80.0,
    }
}

#[test]
fn jitter_follows_index_formulas_inside_bounds() {
    let b = LayoutBase::of(LayoutType::Center);
    assert_eq!(b.jittered_frame(0), (37.0, 22.0));
    assert_eq!(b.jittered_frame(1), (40.0, 24.0));
    assert_eq!(b.jittered_frame(4), (40.0, 30.0));
    assert_eq!(b.jittered_frame(5), (43.0, 22.0));
}

#[test]
fn jitter_clamps_size_to_minimum() {
    let b = base(50.0, 11.0);
    // size 11 - 4 = 7 would fall below the minimum.
    assert_eq!(b.jittered_frame(0).1, MIN_FRAME_SIZE);
    assert_eq!(b.jittered_frame(3).1, 13.0);
}

#[test]
fn jitter_clamps_size_and_y_to_upper_bound() {
    let b = base(99.0, 98.0);
    // i = 4: size 98 + 4, i % 3 == 1: y unchanged.
    assert_eq!(b.jittered_frame(4), (99.0, 100.0));
    // i = 2: y 99 + 3.
    assert_eq!(b.jittered_frame(2), (100.0, 98.0));
}

#[test]
fn jitter_clamps_y_at_zero() {
    let b = base(1.0, 20.0);
    assert_eq!(b.jittered_frame(0).0, 0.0);
    assert_eq!(b.jittered_frame(1).0, 1.0);
}

#[test]
fn jittered_frames_stay_valid_for_large_counts() {
    let ts = generate_templates(&book(), "festival-diwali", 200);
    for t in &ts {
        assert!((MIN_FRAME_SIZE..=100.0).contains(&t.frame.size), "{}", t.id);
        assert!((0.0..=100.0).contains(&t.frame.y), "{}", t.id);
        t.validate().unwrap();
    }
}
