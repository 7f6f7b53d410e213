use crate::template::catalog::Catalog;
use crate::template::model::{
    Background, Decorations, FontStyle, FrameConfig, FrameShape, GreetingConfig, LayoutType,
    NameStyle, Template, TemplateLayout,
};
use crate::template::theme::{Theme, ThemeBook};

/// Base positions (percent units) for one layout family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBase {
    pub frame_x: f64,
    pub frame_y: f64,
    pub frame_size: f64,
    pub greeting_y: f64,
    pub name_y: f64,
}

impl LayoutBase {
    /// Base table. Layout affects nothing else.
    pub fn of(layout: LayoutType) -> Self {
        let (frame_x, frame_y, frame_size, greeting_y, name_y) = match layout {
            LayoutType::Center => (50.0, 40.0, 26.0, 10.0, 78.0),
            LayoutType::Top => (50.0, 28.0, 24.0, 8.0, 60.0),
            LayoutType::Bottom => (50.0, 52.0, 26.0, 10.0, 85.0),
            LayoutType::Left => (30.0, 45.0, 22.0, 10.0, 80.0),
            LayoutType::Split => (50.0, 30.0, 22.0, 6.0, 62.0),
            LayoutType::Corner => (35.0, 35.0, 20.0, 8.0, 70.0),
            LayoutType::FullBg => (50.0, 42.0, 30.0, 8.0, 82.0),
            LayoutType::Banner => (50.0, 45.0, 25.0, 6.0, 80.0),
        };
        Self {
            frame_x,
            frame_y,
            frame_size,
            greeting_y,
            name_y,
        }
    }

    /// Apply the per-index jitter to the frame: `size += (i % 5) * 2 - 4`, `y += (i % 3) * 3 - 3`.
    ///
    /// The size is clamped to `[MIN_FRAME_SIZE, 100]` and `y` to `[0, 100]`. Returns `(y, size)`.
    pub fn jittered_frame(&self, i: usize) -> (f64, f64) {
        let size = (self.frame_size + ((i % 5) * 2) as f64 - 4.0).clamp(MIN_FRAME_SIZE, 100.0);
        let y = (self.frame_y + ((i % 3) * 3) as f64 - 3.0).clamp(0.0, 100.0);
        (y, size)
    }
}

/// Lower bound for the jittered frame size.
pub const MIN_FRAME_SIZE: f64 = 10.0;

const BORDER_COLORS: [&str; 5] = [
    "rgba(255,255,255,0.9)",
    "rgba(255,215,0,0.8)",
    "rgba(255,200,150,0.8)",
    "rgba(200,200,255,0.7)",
    "rgba(255,182,193,0.8)",
];

const GLOW_COLORS: [Option<&str>; 5] = [
    Some("rgba(255,215,0,0.3)"),
    Some("rgba(255,100,100,0.2)"),
    Some("rgba(100,200,255,0.2)"),
    Some("rgba(255,255,255,0.25)"),
    None,
];

const BADGE_GOLD: &str = "rgba(255,215,0,0.3)";
const BADGE_WHITE: &str = "rgba(255,255,255,0.15)";
const TEXT_COLOR: &str = "#ffffff";

/// Generate `count` templates for an occasion.
///
/// Pure function of `(themes, occasion_id, count)`: the same inputs always produce the same
/// templates. Unknown occasions use the default theme.
#[tracing::instrument(skip(themes))]
pub fn generate_templates(themes: &ThemeBook, occasion_id: &str, count: usize) -> Vec<Template> {
    let theme = themes.resolve(occasion_id);
    let out: Vec<Template> = (0..count)
        .map(|i| template_at(theme, occasion_id, i))
        .collect();
    tracing::debug!(count = out.len(), "generated templates");
    out
}

/// Generate the catalog-configured number of templates for an occasion.
pub fn templates_for_occasion(
    catalog: &Catalog,
    themes: &ThemeBook,
    occasion_id: &str,
) -> Vec<Template> {
    generate_templates(themes, occasion_id, catalog.template_count(occasion_id))
}

fn pick<T>(list: &[T], i: usize) -> &T {
    &list[i % list.len()]
}

fn template_at(theme: &Theme, occasion_id: &str, i: usize) -> Template {
    let greeting = pick(&theme.greetings, i);
    let layout = *pick(&LayoutType::CYCLE, i);
    let shape = *pick(&FrameShape::CYCLE, i);

    let base = LayoutBase::of(layout);
    let (frame_y, frame_size) = base.jittered_frame(i);

    let badge = i % 3 == 0;
    let badge_color = badge.then(|| {
        let c = if i % 2 == 0 { BADGE_GOLD } else { BADGE_WHITE };
        c.to_string()
    });

    Template {
        id: format!("{occasion_id}-t{i}"),
        occasion_id: occasion_id.to_string(),
        layout: TemplateLayout { kind: layout },
        background: Background {
            gradient: pick(&theme.gradients, i).clone(),
            pattern: *pick(&theme.patterns, i),
        },
        frame: FrameConfig {
            shape,
            x: base.frame_x,
            y: frame_y,
            size: frame_size,
            border_color: pick(&BORDER_COLORS, i).to_string(),
            border_width: (3 + i % 3) as f64,
            glow_color: pick(&GLOW_COLORS, i).map(str::to_string),
            shadow: i % 4 != 3,
        },
        greeting: GreetingConfig {
            line1: greeting.line1.clone(),
            line2: greeting.line2.clone(),
            line1_size: (32 + (i % 4) * 4) as f64,
            line2_size: greeting
                .line2
                .as_ref()
                .map(|_| (20 + (i % 3) * 2) as f64),
            y: base.greeting_y,
            color: TEXT_COLOR.to_string(),
            font_style: *pick(&FontStyle::CYCLE, i),
        },
        name_style: NameStyle {
            font_size: (26 + (i % 4) * 2) as f64,
            color: TEXT_COLOR.to_string(),
            y: base.name_y,
            prefix: Some(pick(&theme.name_prefixes, i).clone()),
            suffix: None,
            badge,
            badge_color,
        },
        decorations: Decorations {
            top_emoji: (i % 2 == 0).then(|| pick(&theme.emojis, i).clone()),
            bottom_emoji: (i % 3 == 1).then(|| pick(&theme.emojis, i + 2).clone()),
            corner_emojis: (i % 4 == 0)
                .then(|| [pick(&theme.emojis, 0).clone(), pick(&theme.emojis, 1).clone()]),
            border_decor: *pick(&theme.border_decors, i),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/generator.rs"]
mod tests;
