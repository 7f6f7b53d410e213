use serde::{Deserialize, Serialize};

use crate::foundation::color::parse_css_color;
use crate::foundation::error::{CardError, CardResult};

/// Layout family a template was generated from.
///
/// Only the generator reads this; positions are already baked into the other template fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutType {
    /// Frame centered, greeting on top.
    Center,
    /// Frame high, name below.
    Top,
    /// Frame low.
    Bottom,
    /// Frame shifted left.
    Left,
    /// Small frame, compact upper block.
    Split,
    /// Small frame toward the upper-left.
    Corner,
    /// Large frame dominating the card.
    FullBg,
    /// Banner-style greeting band.
    Banner,
}

impl LayoutType {
    /// Fixed generator cycle.
    pub const CYCLE: [LayoutType; 8] = [
        LayoutType::Center,
        LayoutType::Top,
        LayoutType::Bottom,
        LayoutType::Left,
        LayoutType::Split,
        LayoutType::Corner,
        LayoutType::FullBg,
        LayoutType::Banner,
    ];
}

/// Background motif drawn at low opacity over the gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternTag {
    Dots,
    Stars,
    Hearts,
    Floral,
    Sparkles,
    Confetti,
    Waves,
    Mandala,
    Diyas,
    Snowflakes,
    Crescents,
    Rangoli,
    Balloons,
    Ribbons,
    /// No motif.
    #[default]
    None,
}

/// Clip shape of the photo frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrameShape {
    Circle,
    Rounded,
    Heart,
    Diamond,
    Oval,
    Hexagon,
    Star,
    Arch,
}

impl FrameShape {
    /// Fixed generator cycle.
    pub const CYCLE: [FrameShape; 8] = [
        FrameShape::Circle,
        FrameShape::Rounded,
        FrameShape::Heart,
        FrameShape::Diamond,
        FrameShape::Oval,
        FrameShape::Hexagon,
        FrameShape::Star,
        FrameShape::Arch,
    ];
}

/// Greeting typeface family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontStyle {
    Bold,
    Script,
    Elegant,
    Playful,
}

impl FontStyle {
    /// Fixed generator cycle.
    pub const CYCLE: [FontStyle; 4] = [
        FontStyle::Bold,
        FontStyle::Script,
        FontStyle::Elegant,
        FontStyle::Playful,
    ];

    /// CSS font-family list for this style.
    pub fn font_family(self) -> &'static str {
        match self {
            FontStyle::Bold | FontStyle::Playful => "Outfit, sans-serif",
            FontStyle::Script => "Georgia, serif",
            FontStyle::Elegant => "'Space Grotesk', sans-serif",
        }
    }
}

/// Ornament anchored to the card edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderDecor {
    Gold,
    Floral,
    Sparkle,
    Ribbon,
    #[default]
    None,
}

/// Which layout the template was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateLayout {
    /// Layout family.
    #[serde(rename = "type")]
    pub kind: LayoutType,
}

/// Card background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    /// Gradient descriptor, e.g. `linear-gradient(135deg, #ff6b6b 0%, #feca57 100%)`.
    pub gradient: String,
    #[serde(default)]
    pub pattern: PatternTag,
}

/// Photo frame placement and styling. Positions are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameConfig {
    pub shape: FrameShape,
    /// Center x, percent of canvas width.
    pub x: f64,
    /// Center y, percent of canvas height.
    pub y: f64,
    /// Radius, percent of the shorter canvas side.
    pub size: f64,
    pub border_color: String,
    pub border_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glow_color: Option<String>,
    pub shadow: bool,
}

/// Two-line greeting block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreetingConfig {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub line1_size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2_size: Option<f64>,
    /// Baseline of line 1, percent of canvas height.
    pub y: f64,
    pub color: String,
    pub font_style: FontStyle,
}

/// Styling of the personalized name line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameStyle {
    pub font_size: f64,
    pub color: String,
    /// Baseline, percent of canvas height.
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default)]
    pub badge: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_color: Option<String>,
}

impl NameStyle {
    /// `prefix + name + suffix`, the exact text drawn on the card.
    pub fn display_text(&self, name: &str) -> String {
        format!(
            "{}{}{}",
            self.prefix.as_deref().unwrap_or(""),
            name,
            self.suffix.as_deref().unwrap_or("")
        )
    }
}

/// Emoji and border ornaments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decorations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_emoji: Option<String>,
    /// Left/right pair repeated in the top and bottom corners.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_emojis: Option<[String; 2]>,
    #[serde(default)]
    pub border_decor: BorderDecor,
}

/// One fully specified card design.
///
/// This is the wire format between template generation and rendering; JSON field names are
/// camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub occasion_id: String,
    pub layout: TemplateLayout,
    pub background: Background,
    pub frame: FrameConfig,
    pub greeting: GreetingConfig,
    pub name_style: NameStyle,
    pub decorations: Decorations,
}

impl Template {
    /// Check structural invariants and color syntax.
    pub fn validate(&self) -> CardResult<()> {
        if self.id.trim().is_empty() {
            return Err(CardError::validation("template id must be non-empty"));
        }
        if self.background.gradient.trim().is_empty() {
            return Err(CardError::validation(format!(
                "template '{}' background gradient must be non-empty",
                self.id
            )));
        }

        for (field, value) in [
            ("frame.x", self.frame.x),
            ("frame.y", self.frame.y),
            ("frame.size", self.frame.size),
            ("greeting.y", self.greeting.y),
            ("nameStyle.y", self.name_style.y),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(CardError::validation(format!(
                    "template '{}' {field} must be within 0..=100, got {value}",
                    self.id
                )));
            }
        }
        if self.frame.size <= 0.0 {
            return Err(CardError::validation(format!(
                "template '{}' frame.size must be > 0",
                self.id
            )));
        }
        if !self.frame.border_width.is_finite() || self.frame.border_width < 0.0 {
            return Err(CardError::validation(format!(
                "template '{}' frame.borderWidth must be finite and >= 0",
                self.id
            )));
        }

        for (field, value) in [
            ("greeting.line1Size", Some(self.greeting.line1_size)),
            ("greeting.line2Size", self.greeting.line2_size),
            ("nameStyle.fontSize", Some(self.name_style.font_size)),
        ] {
            if let Some(v) = value
                && (!v.is_finite() || v <= 0.0)
            {
                return Err(CardError::validation(format!(
                    "template '{}' {field} must be finite and > 0",
                    self.id
                )));
            }
        }

        if self.greeting.line2.is_some() && self.greeting.line2_size.is_none() {
            return Err(CardError::validation(format!(
                "template '{}' greeting.line2Size is required when line2 is set",
                self.id
            )));
        }
        if self.name_style.badge && self.name_style.badge_color.is_none() {
            return Err(CardError::validation(format!(
                "template '{}' nameStyle.badgeColor is required when badge is set",
                self.id
            )));
        }

        let colors = [
            Some(self.frame.border_color.as_str()),
            self.frame.glow_color.as_deref(),
            Some(self.greeting.color.as_str()),
            Some(self.name_style.color.as_str()),
            self.name_style.badge_color.as_deref(),
        ];
        for c in colors.into_iter().flatten() {
            parse_css_color(c).map_err(|e| {
                CardError::validation(format!("template '{}' has a bad color: {e}", self.id))
            })?;
        }

        Ok(())
    }

    /// Serialize to the JSON wire format.
    pub fn to_json(&self) -> CardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from the JSON wire format and validate.
    pub fn from_json(s: &str) -> CardResult<Self> {
        let t: Self = serde_json::from_str(s)?;
        t.validate()?;
        Ok(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/model.rs"]
mod tests;
