use super::*;

fn sample() -> Template {
    Template {
        id: "birthday-friend-t0".to_string(),
        occasion_id: "birthday-friend".to_string(),
        layout: TemplateLayout {
            kind: LayoutType::FullBg,
        },
        background: Background {
            gradient: "linear-gradient(135deg, #ff6b6b 0%, #feca57 100%)".to_string(),
            pattern: PatternTag::Confetti,
        },
        frame: FrameConfig {
            shape: FrameShape::Circle,
            x: 50.0,
            y: 37.0,
            size: 22.0,
            border_color: "rgba(255,255,255,0.9)".to_string(),
            border_width: 3.0,
            glow_color: Some("rgba(255,215,0,0.3)".to_string()),
            shadow: true,
        },
        greeting: GreetingConfig {
            line1: "Happy Birthday!".to_string(),
            line2: Some("To My Amazing Friend".to_string()),
            line1_size: 32.0,
            line2_size: Some(20.0),
            y: 10.0,
            color: "#ffffff".to_string(),
            font_style: FontStyle::Bold,
        },
        name_style: NameStyle {
            font_size: 26.0,
            color: "#ffffff".to_string(),
            y: 78.0,
            prefix: Some("🎉 ".to_string()),
            suffix: None,
            badge: true,
            badge_color: Some("rgba(255,215,0,0.3)".to_string()),
        },
        decorations: Decorations {
            top_emoji: Some("🎂".to_string()),
            bottom_emoji: None,
            corner_emojis: Some(["🎂".to_string(), "🎉".to_string()]),
            border_decor: BorderDecor::Gold,
        },
    }
}

#[test]
fn sample_is_valid() {
    sample().validate().unwrap();
}

#[test]
fn json_uses_camel_case_wire_names() {
    let json = sample().to_json().unwrap();
    for key in [
        "\"occasionId\"",
        "\"type\": \"fullBg\"",
        "\"borderColor\"",
        "\"glowColor\"",
        "\"line1Size\"",
        "\"fontStyle\": \"bold\"",
        "\"nameStyle\"",
        "\"badgeColor\"",
        "\"cornerEmojis\"",
        "\"borderDecor\": \"gold\"",
        "\"pattern\": \"confetti\"",
    ] {
        assert!(json.contains(key), "missing {key} in {json}");
    }
    assert!(!json.contains("\"suffix\""));

    let back = Template::from_json(&json).unwrap();
    assert_eq!(back, sample());
}

#[test]
fn missing_optional_fields_default() {
    let mut v = serde_json::to_value(sample()).unwrap();
    v["background"].as_object_mut().unwrap().remove("pattern");
    v["decorations"] = serde_json::json!({});
    let t: Template = serde_json::from_value(v).unwrap();
    assert_eq!(t.background.pattern, PatternTag::None);
    assert_eq!(t.decorations.border_decor, BorderDecor::None);
    assert!(t.decorations.corner_emojis.is_none());
}

#[test]
fn badge_without_color_is_rejected() {
    let mut t = sample();
    t.name_style.badge_color = None;
    let err = t.validate().unwrap_err();
    assert!(err.to_string().contains("badgeColor"));
}

#[test]
fn line2_without_size_is_rejected() {
    let mut t = sample();
    t.greeting.line2_size = None;
    assert!(t.validate().unwrap_err().to_string().contains("line2Size"));
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    let mut t = sample();
    t.frame.y = 101.0;
    assert!(t.validate().is_err());

    let mut t = sample();
    t.frame.size = 0.0;
    assert!(t.validate().is_err());

    let mut t = sample();
    t.name_style.y = f64::NAN;
    assert!(t.validate().is_err());
}

#[test]
fn bad_color_is_rejected() {
    let mut t = sample();
    t.greeting.color = "not-a-color".to_string();
    assert!(matches!(t.validate(), Err(CardError::Validation(_))));
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(
        Template::from_json("{\"id\": 3}"),
        Err(CardError::Serde(_))
    ));
}

#[test]
fn display_text_wraps_name() {
    let mut style = sample().name_style;
    assert_eq!(style.display_text("Alice"), "🎉 Alice");
    style.suffix = Some("!".to_string());
    style.prefix = None;
    assert_eq!(style.display_text("Bob"), "Bob!");
}

#[test]
fn font_families_follow_style() {
    assert_eq!(FontStyle::Bold.font_family(), FontStyle::Playful.font_family());
    assert_eq!(FontStyle::Script.font_family(), "Georgia, serif");
    assert!(FontStyle::Elegant.font_family().contains("Space Grotesk"));
}
