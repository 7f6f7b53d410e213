use std::sync::Arc;

use crate::assets::decode::{DecodedPhoto, PhotoLoad};
use crate::foundation::color::parse_css_color;
use crate::foundation::core::{Affine, BezPath, CARD_CANVAS, Canvas, Point, Rect, Rgba8, Vec2};
use crate::foundation::error::CardResult;
use crate::render::blur::{blur_mask, tint_mask};
use crate::render::encode::encode_png;
use crate::render::gradient::LinearSpec;
use crate::render::ornaments::{draw_border_decor, emoji_layer};
use crate::render::patterns::draw_pattern;
use crate::render::shapes::{frame_path, rounded_rect};
use crate::render::surface::{CpuSurface, DrawSurface, FrameRGBA, Paint, PremulImage};
use crate::render::text::{FontConfig, TextEngine, TextLayer, TextShadow, TextSpan};
use crate::template::model::{FrameConfig, GreetingConfig, NameStyle, Template};

/// Caption drawn at the bottom of every card.
pub const WATERMARK_TEXT: &str = "Made with WishCraft ✨";

const NAME_FAMILY: &str = "'Space Grotesk', sans-serif";
const WATERMARK_FAMILY: &str = "Outfit, sans-serif";

const DEFAULT_SHADOW_SCALE: f32 = 0.5;

/// Photo is drawn this many radii across along its longer side.
const PHOTO_SPAN_RADII: f64 = 2.2;
const GLOW_SIGMA: f64 = 15.0;
const SHADOW_SIGMA: f64 = 12.5;
const SHADOW_OFFSET_Y: f64 = 10.0;

const BADGE_PAD: f64 = 20.0;
const BADGE_RADIUS: f64 = 12.0;

/// Compositor configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositorOpts {
    pub fonts: FontConfig,
    /// Resolution factor of the offscreen raster used for photo glow and shadow, in `(0, 1]`.
    pub shadow_scale: f32,
}

impl Default for CompositorOpts {
    fn default() -> Self {
        Self {
            fonts: FontConfig::default(),
            shadow_scale: DEFAULT_SHADOW_SCALE,
        }
    }
}

/// A finished card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedCard {
    pub width: u32,
    pub height: u32,
    /// PNG bytes.
    pub png: Vec<u8>,
    /// The exact name line drawn on the card (`prefix + name + suffix`).
    pub name_text: String,
}

/// Renders templates into fixed-size cards.
///
/// Holds the shared font database; construct once and reuse for every card.
#[derive(Clone, Debug)]
pub struct Compositor {
    canvas: Canvas,
    text: TextEngine,
    shadow_scale: f32,
}

impl Compositor {
    pub fn new(opts: CompositorOpts) -> Self {
        Self::with_text_engine(TextEngine::from_config(&opts.fonts), opts.shadow_scale)
    }

    /// Build around an existing text engine (shares its font database).
    pub fn with_text_engine(text: TextEngine, shadow_scale: f32) -> Self {
        let shadow_scale = if shadow_scale.is_finite() && shadow_scale > 0.0 {
            shadow_scale.min(1.0)
        } else {
            DEFAULT_SHADOW_SCALE
        };
        Self {
            canvas: CARD_CANVAS,
            text,
            shadow_scale,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn text_engine(&self) -> &TextEngine {
        &self.text
    }

    /// Render one card and encode it as PNG.
    #[tracing::instrument(skip_all, fields(template = %template.id))]
    pub fn render(
        &self,
        template: &Template,
        photo: &PhotoLoad,
        name: &str,
    ) -> CardResult<RenderedCard> {
        let frame = self.render_frame(template, photo, name)?;
        let png = encode_png(&frame)?;
        tracing::debug!(bytes = png.len(), "card encoded");
        Ok(RenderedCard {
            width: frame.width,
            height: frame.height,
            png,
            name_text: template.name_style.display_text(name),
        })
    }

    /// [`Compositor::render`] with the photo decoded inline.
    pub fn render_bytes(
        &self,
        template: &Template,
        photo_bytes: &[u8],
        name: &str,
    ) -> CardResult<RenderedCard> {
        self.render(template, &PhotoLoad::from_bytes(photo_bytes), name)
    }

    /// Render one card to a premultiplied frame without encoding.
    pub fn render_frame(
        &self,
        template: &Template,
        photo: &PhotoLoad,
        name: &str,
    ) -> CardResult<FrameRGBA> {
        template.validate()?;
        let mut surface = CpuSurface::new(self.canvas.width, self.canvas.height)?;
        self.draw_card(&mut surface, template, photo, name)?;
        surface.finish()
    }

    /// Run every drawing pass, back to front.
    pub(crate) fn draw_card(
        &self,
        s: &mut dyn DrawSurface,
        t: &Template,
        photo: &PhotoLoad,
        name: &str,
    ) -> CardResult<()> {
        let canvas = self.canvas;

        self.draw_background(s, &t.background.gradient);
        tracing::debug!(pass = "background");

        let glyphs = draw_pattern(s, t.background.pattern, canvas);
        self.blit_text(s, &glyphs)?;
        tracing::debug!(pass = "pattern", pattern = ?t.background.pattern);

        let glyphs = draw_border_decor(s, t.decorations.border_decor, canvas);
        self.blit_text(s, &glyphs)?;
        tracing::debug!(pass = "border", decor = ?t.decorations.border_decor);

        self.blit_text(s, &emoji_layer(&t.decorations, canvas))?;
        tracing::debug!(pass = "emoji");

        self.blit_text(s, &greeting_layer(&t.greeting, canvas)?)?;
        tracing::debug!(pass = "greeting");

        self.draw_photo(s, &t.frame, photo)?;
        tracing::debug!(pass = "photo", placeholder = photo.is_failed());

        self.draw_name(s, &t.name_style, name)?;
        tracing::debug!(pass = "name");

        let ny = canvas.pct_y(t.name_style.y);
        s.fill_rect(
            Rect::new(canvas.w() * 0.25, ny + 20.0, canvas.w() * 0.75, ny + 21.5),
            &Paint::Solid(Rgba8::WHITE.fade(0.15)),
        );
        tracing::debug!(pass = "divider");

        let mut mark = TextLayer::new();
        mark.push(
            TextSpan::new(WATERMARK_TEXT, canvas.w() / 2.0, canvas.h() * 0.96, 13.0)
                .family(WATERMARK_FAMILY)
                .opacity(0.25),
        );
        self.blit_text(s, &mark)?;
        tracing::debug!(pass = "watermark");
        Ok(())
    }

    fn draw_background(&self, s: &mut dyn DrawSurface, gradient: &str) {
        let canvas = self.canvas;
        let spec = LinearSpec::parse(gradient);
        let (start, end) = spec.axis(canvas);
        s.fill_rect(
            canvas.rect(),
            &Paint::Linear {
                start,
                end,
                stops: spec.offsets(),
            },
        );

        // Depth overlay: light near the upper third, darkening toward the edges.
        s.fill_rect(
            canvas.rect(),
            &Paint::Radial {
                start_center: Point::new(canvas.w() / 2.0, canvas.h() * 0.35),
                start_radius: 50.0,
                end_center: canvas.center(),
                end_radius: canvas.w() as f32,
                stops: vec![
                    (0.0, Rgba8::WHITE.with_alpha_f(0.08)),
                    (1.0, Rgba8::BLACK.with_alpha_f(0.15)),
                ],
            },
        );
    }

    fn blit_text(&self, s: &mut dyn DrawSurface, layer: &TextLayer) -> CardResult<()> {
        if let Some(img) = self.text.rasterize(layer, self.canvas)? {
            s.draw_image(&img, self.canvas.rect())?;
        }
        Ok(())
    }

    fn draw_photo(
        &self,
        s: &mut dyn DrawSurface,
        frame: &FrameConfig,
        photo: &PhotoLoad,
    ) -> CardResult<()> {
        let canvas = self.canvas;
        let center = Point::new(canvas.pct_x(frame.x), canvas.pct_y(frame.y));
        let r = frame.size / 100.0 * canvas.min_side();
        let path = frame_path(frame.shape, center, r);

        let Some(p) = photo.decoded() else {
            tracing::debug!(shape = ?frame.shape, "photo unavailable, drawing placeholder");
            s.fill_path(&path, &Paint::Solid(Rgba8::WHITE.with_alpha_f(0.15)));
            return Ok(());
        };

        let border = parse_css_color(&frame.border_color)?;
        let glow = frame
            .glow_color
            .as_deref()
            .map(parse_css_color)
            .transpose()?;
        let dest = photo_rect(center, r, p);

        if let Some(glow) = glow {
            self.soft_shadow(s, &path, dest, glow, GLOW_SIGMA, Vec2::ZERO)?;
        }
        if frame.shadow {
            self.soft_shadow(
                s,
                &path,
                dest,
                Rgba8::BLACK.with_alpha_f(0.35),
                SHADOW_SIGMA,
                Vec2::new(0.0, SHADOW_OFFSET_Y),
            )?;
        }

        s.push_clip(&path);
        let drawn = s.draw_image(&PremulImage::from(p), dest);
        s.pop_layer();
        drawn?;

        s.stroke_path(&path, frame.border_width, &Paint::Solid(border));
        Ok(())
    }

    /// Blurred silhouette of the clipped photo, composited under it.
    fn soft_shadow(
        &self,
        s: &mut dyn DrawSurface,
        path: &BezPath,
        dest: Rect,
        color: Rgba8,
        sigma: f64,
        offset: Vec2,
    ) -> CardResult<()> {
        use kurbo::Shape;

        let silhouette = path.bounding_box().intersect(dest);
        if silhouette.area() <= 0.0 {
            return Ok(());
        }
        let pad = 3.0 * sigma;
        let region = silhouette.inflate(pad, pad);
        let scale = f64::from(self.shadow_scale);
        let w = (region.width() * scale).ceil().max(1.0) as u32;
        let h = (region.height() * scale).ceil().max(1.0) as u32;

        let mut off = CpuSurface::new(w, h)?;
        off.set_transform(Affine::scale(scale) * Affine::translate(-region.origin().to_vec2()));
        off.push_clip(path);
        off.fill_rect(dest, &Paint::Solid(Rgba8::WHITE));
        off.pop_layer();
        let coverage: Vec<u8> = off.finish()?.data.chunks_exact(4).map(|px| px[3]).collect();

        let blurred = blur_mask(&coverage, w, h, (sigma * scale) as f32)?;
        let target = Rect::from_origin_size(
            region.origin() + offset,
            (f64::from(w) / scale, f64::from(h) / scale),
        );
        s.draw_image(
            &PremulImage {
                width: w,
                height: h,
                data: Arc::new(tint_mask(&blurred, color.premultiplied())),
            },
            target,
        )
    }

    fn draw_name(&self, s: &mut dyn DrawSurface, ns: &NameStyle, name: &str) -> CardResult<()> {
        let canvas = self.canvas;
        let ty = canvas.pct_y(ns.y);
        let span = TextSpan::new(ns.display_text(name), canvas.w() / 2.0, ty, ns.font_size)
            .family(NAME_FAMILY)
            .weight(700)
            .fill(parse_css_color(&ns.color)?)
            .shadow(TextShadow {
                color: Rgba8::BLACK.with_alpha_f(0.4),
                blur: 5.0,
                dx: 1.0,
                dy: 2.0,
            });

        if let (true, Some(badge)) = (ns.badge, ns.badge_color.as_deref()) {
            let fill = parse_css_color(badge)?;
            s.fill_path(&badge_path(canvas, ty, ns.font_size, self.text.measure(&span)), &Paint::Solid(fill));
        }

        let mut layer = TextLayer::new();
        layer.push(span);
        self.blit_text(s, &layer)
    }
}

/// Destination of the photo: `2.2r` along its longer side, aspect preserved, centered.
fn photo_rect(center: Point, r: f64, photo: &DecodedPhoto) -> Rect {
    let span = r * PHOTO_SPAN_RADII;
    let aspect = photo.aspect();
    let (dw, dh) = if aspect > 1.0 {
        (span, span / aspect)
    } else {
        (span * aspect, span)
    };
    Rect::from_center_size(center, (dw, dh))
}

fn badge_path(canvas: Canvas, ty: f64, font_size: f64, text_width: f64) -> BezPath {
    let bw = text_width + BADGE_PAD * 2.0;
    let bh = font_size + BADGE_PAD;
    let rect = Rect::from_origin_size(
        (canvas.w() / 2.0 - bw / 2.0, ty - bh / 2.0 - font_size * 0.3),
        (bw, bh),
    );
    rounded_rect(rect, BADGE_RADIUS)
}

fn greeting_layer(g: &GreetingConfig, canvas: Canvas) -> CardResult<TextLayer> {
    let fill = parse_css_color(&g.color)?;
    let family = g.font_style.font_family();
    let shadow = TextShadow {
        color: Rgba8::BLACK.with_alpha_f(0.35),
        blur: 6.0,
        dx: 2.0,
        dy: 3.0,
    };
    let x = canvas.w() / 2.0;
    let y1 = canvas.pct_y(g.y);

    let mut layer = TextLayer::new();
    layer.push(
        TextSpan::new(g.line1.as_str(), x, y1, g.line1_size)
            .family(family)
            .weight(800)
            .fill(fill)
            .shadow(shadow),
    );
    if let (Some(line2), Some(size)) = (g.line2.as_deref(), g.line2_size) {
        layer.push(
            TextSpan::new(line2, x, y1 + g.line1_size + 10.0, size)
                .family(family)
                .weight(500)
                .fill(fill)
                .shadow(shadow),
        );
    }
    Ok(layer)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
