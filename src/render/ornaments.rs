use std::f64::consts::TAU;

use crate::foundation::core::{Canvas, Rect, Rgba8};
use crate::render::shapes::polyline;
use crate::render::surface::{DrawSurface, Paint};
use crate::render::text::{Anchor, TextLayer, TextSpan};
use crate::template::model::{BorderDecor, Decorations};

const GLYPH_FAMILY: &str = "serif";
const EDGE_FLOWERS: [&str; 5] = ["❀", "✿", "❁", "✾", "🌸"];

/// Draw the border ornament for `decor`. Glyph ornaments come back as a text layer.
pub fn draw_border_decor(
    surface: &mut dyn DrawSurface,
    decor: BorderDecor,
    canvas: Canvas,
) -> TextLayer {
    let (w, h) = (canvas.w(), canvas.h());
    let mut glyphs = TextLayer::new();
    match decor {
        BorderDecor::None => {}
        BorderDecor::Gold => {
            let paint = Paint::Solid(Rgba8::GOLD.fade(0.25));
            let s = 60.0;
            let corners = [
                // Top corners carry a second, inner bracket.
                vec![(20.0, s + 20.0), (20.0, 20.0), (s + 20.0, 20.0)],
                vec![(30.0, s + 10.0), (30.0, 30.0), (s + 10.0, 30.0)],
                vec![(w - 20.0, s + 20.0), (w - 20.0, 20.0), (w - s - 20.0, 20.0)],
                vec![(w - 30.0, s + 10.0), (w - 30.0, 30.0), (w - s - 10.0, 30.0)],
                vec![(20.0, h - s - 20.0), (20.0, h - 20.0), (s + 20.0, h - 20.0)],
                vec![(w - 20.0, h - s - 20.0), (w - 20.0, h - 20.0), (w - s - 20.0, h - 20.0)],
            ];
            for pts in &corners {
                surface.stroke_path(&polyline(pts), 3.0, &paint);
            }
        }
        BorderDecor::Floral => {
            let step = (w - 60.0) / 7.0;
            for i in 0..8usize {
                let x = 30.0 + i as f64 * step;
                for (y, k) in [(35.0, i), (h - 18.0, i + 2)] {
                    glyphs.push(
                        TextSpan::new(EDGE_FLOWERS[k % EDGE_FLOWERS.len()], x, y, 28.0)
                            .family(GLYPH_FAMILY)
                            .anchor(Anchor::Start)
                            .opacity(0.15),
                    );
                }
            }
        }
        BorderDecor::Sparkle => {
            let c = canvas.center();
            for i in 0..20u32 {
                let a = TAU * f64::from(i) / 20.0;
                glyphs.push(
                    TextSpan::new(
                        "✦",
                        c.x + (c.x - 25.0) * a.cos(),
                        c.y + (c.y - 25.0) * a.sin(),
                        18.0,
                    )
                    .family(GLYPH_FAMILY)
                    .fill(Rgba8::GOLD)
                    .anchor(Anchor::Start)
                    .opacity(0.2),
                );
            }
        }
        BorderDecor::Ribbon => {
            let outer = Paint::Solid(Rgba8::GOLD.fade(0.12));
            for r in [
                Rect::new(0.0, 0.0, w, 8.0),
                Rect::new(0.0, h - 8.0, w, h),
                Rect::new(0.0, 0.0, 8.0, h),
                Rect::new(w - 8.0, 0.0, w, h),
            ] {
                surface.fill_rect(r, &outer);
            }
            let inner = Paint::Solid(Rgba8::GOLD.fade(0.06));
            for r in [
                Rect::new(15.0, 15.0, w - 15.0, 19.0),
                Rect::new(15.0, h - 19.0, w - 15.0, h - 15.0),
                Rect::new(15.0, 15.0, 19.0, h - 15.0),
                Rect::new(w - 19.0, 15.0, w - 15.0, h - 15.0),
            ] {
                surface.fill_rect(r, &inner);
            }
        }
    }
    glyphs
}

/// Top, bottom and corner emoji, centered on their anchor points.
pub fn emoji_layer(decorations: &Decorations, canvas: Canvas) -> TextLayer {
    let (w, h) = (canvas.w(), canvas.h());
    let mut layer = TextLayer::new();
    let big = |text: &str, y: f64| {
        TextSpan::new(text, w / 2.0, y, 48.0)
            .family(GLYPH_FAMILY)
            .opacity(0.8)
    };

    if let Some(top) = &decorations.top_emoji {
        layer.push(big(top.as_str(), 60.0));
    }
    if let Some(bottom) = &decorations.bottom_emoji {
        layer.push(big(bottom.as_str(), h - 40.0));
    }
    if let Some([left, right]) = &decorations.corner_emojis {
        for (text, x, y) in [
            (left, 40.0, 50.0),
            (right, w - 40.0, 50.0),
            (left, 40.0, h - 30.0),
            (right, w - 40.0, h - 30.0),
        ] {
            layer.push(
                TextSpan::new(text.as_str(), x, y, 32.0)
                    .family(GLYPH_FAMILY)
                    .opacity(0.5),
            );
        }
    }
    layer
}

#[cfg(test)]
#[path = "../../tests/unit/render/ornaments.rs"]
mod tests;
