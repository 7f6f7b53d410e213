use std::f64::consts::TAU;

use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8};
use crate::render::shapes::{circle, polygon, polyline};
use crate::render::surface::{DrawSurface, Paint};
use crate::render::text::{Anchor, TextLayer, TextSpan};
use crate::template::model::PatternTag;

const GLYPH_FAMILY: &str = "serif";

const CONFETTI_COLORS: [Rgba8; 6] = [
    Rgba8::rgb(0xff, 0x6b, 0x6b),
    Rgba8::rgb(0xfe, 0xca, 0x57),
    Rgba8::rgb(0x48, 0xdb, 0xfb),
    Rgba8::rgb(0xff, 0x9f, 0xf3),
    Rgba8::rgb(0x54, 0xa0, 0xff),
    Rgba8::rgb(0x5f, 0x27, 0xcd),
];

/// Glyph motif scattered over the canvas with a sine/cosine hash of the item index.
#[derive(Clone, Copy, Debug)]
struct Scatter {
    count: usize,
    alpha: f32,
    size: f64,
    freq: (f64, f64),
    spread: (f64, f64),
    glyph: fn(usize) -> &'static str,
}

impl Scatter {
    fn position(&self, i: usize, canvas: Canvas) -> Point {
        let t = i as f64;
        Point::new(
            ((t * self.freq.0).sin() * self.spread.0 + 0.5) * canvas.w(),
            ((t * self.freq.1).cos() * self.spread.1 + 0.5) * canvas.h(),
        )
    }
}

const fn scatter(
    count: usize,
    alpha: f32,
    size: f64,
    freq: (f64, f64),
    spread: (f64, f64),
    glyph: fn(usize) -> &'static str,
) -> Scatter {
    Scatter {
        count,
        alpha,
        size,
        freq,
        spread,
        glyph,
    }
}

fn scatter_for(tag: PatternTag) -> Option<Scatter> {
    Some(match tag {
        PatternTag::Stars => scatter(25, 0.1, 28.0, (4.7, 3.3), (0.45, 0.45), |i| {
            if i % 3 == 0 { "★" } else { "✦" }
        }),
        PatternTag::Hearts => scatter(20, 0.08, 24.0, (5.1, 3.7), (0.45, 0.45), |_| "♥"),
        PatternTag::Floral => scatter(18, 0.07, 30.0, (4.2, 2.9), (0.45, 0.45), |i| {
            ["❀", "✿", "❁", "✾"][i % 4]
        }),
        PatternTag::Sparkles => scatter(30, 0.12, 22.0, (3.9, 2.7), (0.48, 0.48), |i| {
            if i % 2 == 0 { "✧" } else { "✦" }
        }),
        PatternTag::Diyas => scatter(15, 0.1, 32.0, (5.3, 3.1), (0.45, 0.45), |i| {
            if i % 2 == 0 { "🪔" } else { "🕯️" }
        }),
        PatternTag::Snowflakes => scatter(20, 0.12, 26.0, (4.5, 3.2), (0.48, 0.48), |i| {
            if i % 3 == 0 { "❄" } else { "❆" }
        }),
        PatternTag::Crescents => scatter(15, 0.08, 30.0, (5.7, 3.4), (0.45, 0.45), |i| {
            if i % 2 == 0 { "☪" } else { "⭐" }
        }),
        PatternTag::Balloons => scatter(12, 0.1, 36.0, (4.3, 2.8), (0.4, 0.35), |_| "🎈"),
        _ => return None,
    })
}

/// Draw the background motif for `tag`.
///
/// Geometric motifs are drawn straight onto `surface`. Glyph motifs are returned as a text layer
/// for the caller to rasterize and composite at this point in the pass order.
pub fn draw_pattern(surface: &mut dyn DrawSurface, tag: PatternTag, canvas: Canvas) -> TextLayer {
    let mut glyphs = TextLayer::new();
    if let Some(sc) = scatter_for(tag) {
        for i in 0..sc.count {
            let p = sc.position(i, canvas);
            glyphs.push(
                TextSpan::new((sc.glyph)(i), p.x, p.y, sc.size)
                    .family(GLYPH_FAMILY)
                    .anchor(Anchor::Start)
                    .opacity(sc.alpha),
            );
        }
        return glyphs;
    }

    let (w, h) = (canvas.w(), canvas.h());
    let white = |alpha: f32| Paint::Solid(Rgba8::WHITE.fade(alpha));
    match tag {
        PatternTag::Dots => {
            let paint = white(0.06);
            let mut y: f64 = 20.0;
            while y < h {
                let mut x: f64 = 20.0;
                while x < w {
                    surface.fill_path(&circle(Point::new(x + y.sin() * 5.0, y), 4.0), &paint);
                    x += 50.0;
                }
                y += 50.0;
            }
        }
        PatternTag::Confetti => {
            for i in 0..40usize {
                let t = i as f64;
                let x = ((t * 7.3).sin() * 0.5 + 0.5) * w;
                let y = ((t * 4.1).cos() * 0.5 + 0.5) * h;
                surface.set_transform(Affine::translate((x, y)) * Affine::rotate(t * 0.7));
                surface.fill_rect(
                    Rect::new(-6.0, -2.0, 6.0, 2.0),
                    &Paint::Solid(CONFETTI_COLORS[i % CONFETTI_COLORS.len()].fade(0.12)),
                );
            }
            surface.set_transform(Affine::IDENTITY);
        }
        PatternTag::Waves => {
            let paint = white(0.05);
            for row in 0..8u32 {
                let r = f64::from(row);
                let pts: Vec<(f64, f64)> = (0u32..)
                    .map(|k| f64::from(k) * 5.0)
                    .take_while(|&x| x < w)
                    .map(|x| (x, r * (h / 7.0) + (x * 0.02 + r).sin() * 20.0))
                    .collect();
                surface.stroke_path(&polyline(&pts), 2.0, &paint);
            }
        }
        PatternTag::Mandala => {
            let paint = white(0.06);
            let c = canvas.center();
            for ring in 1..=6u32 {
                let outer = f64::from(ring) * 80.0;
                let inner = outer - 80.0;
                surface.stroke_path(&circle(c, outer), 1.0, &paint);
                for j in 0..12u32 {
                    let a = TAU * f64::from(j) / 12.0;
                    let spoke = polyline(&[
                        (c.x + inner * a.cos(), c.y + inner * a.sin()),
                        (c.x + outer * a.cos(), c.y + outer * a.sin()),
                    ]);
                    surface.stroke_path(&spoke, 1.0, &paint);
                }
            }
        }
        PatternTag::Rangoli => {
            let paint = white(0.06);
            let c = canvas.center();
            for i in 0..4u32 {
                let s = 100.0 + f64::from(i) * 70.0;
                let diamond = polygon(&[(c.x, c.y - s), (c.x + s, c.y), (c.x, c.y + s), (c.x - s, c.y)]);
                surface.stroke_path(&diamond, 1.5, &paint);
            }
        }
        PatternTag::Ribbons => {
            let paint = white(0.07);
            for i in 0..5u32 {
                let start_x = ((f64::from(i) * 2.3).sin() * 0.45 + 0.5) * w;
                surface.stroke_path(&ribbon(start_x, h), 3.0, &paint);
            }
        }
        _ => {}
    }
    glyphs
}

fn ribbon(start_x: f64, h: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((start_x, 0.0));
    p.curve_to(
        (start_x + 100.0, h * 0.3),
        (start_x - 100.0, h * 0.6),
        (start_x + 50.0, h),
    );
    p
}

#[cfg(test)]
#[path = "../../tests/unit/render/patterns.rs"]
mod tests;
