use std::sync::Arc;

use crate::assets::decode::DecodedPhoto;
use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8};
use crate::foundation::error::{CardError, CardResult};

/// Final rendered frame (RGBA8, premultiplied).
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Raw pixel bytes in row-major RGBA8 layout.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// A premultiplied RGBA8 raster that can be blitted onto a surface.
#[derive(Clone, Debug)]
pub struct PremulImage {
    pub width: u32,
    pub height: u32,
    pub data: Arc<Vec<u8>>,
}

impl From<&DecodedPhoto> for PremulImage {
    fn from(p: &DecodedPhoto) -> Self {
        Self {
            width: p.width,
            height: p.height,
            data: p.rgba8_premul.clone(),
        }
    }
}

impl From<FrameRGBA> for PremulImage {
    fn from(f: FrameRGBA) -> Self {
        Self {
            width: f.width,
            height: f.height,
            data: Arc::new(f.data),
        }
    }
}

/// Fill or stroke paint.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba8),
    Linear {
        start: Point,
        end: Point,
        stops: Vec<(f32, Rgba8)>,
    },
    /// Two-point radial gradient.
    Radial {
        start_center: Point,
        start_radius: f32,
        end_center: Point,
        end_radius: f32,
        stops: Vec<(f32, Rgba8)>,
    },
}

/// Minimal 2D drawing surface used by the card passes.
///
/// Clip layers nest; every `push_clip` must be matched by a `pop_layer`.
pub trait DrawSurface {
    /// Transform applied to subsequent geometry, clips and images.
    fn set_transform(&mut self, transform: Affine);

    fn fill_path(&mut self, path: &BezPath, paint: &Paint);

    fn stroke_path(&mut self, path: &BezPath, width: f64, paint: &Paint);

    fn fill_rect(&mut self, rect: Rect, paint: &Paint);

    /// Restrict drawing to the interior of `path` until the matching `pop_layer`.
    fn push_clip(&mut self, path: &BezPath);

    fn pop_layer(&mut self);

    /// Draw `image` stretched into `dest`.
    fn draw_image(&mut self, image: &PremulImage, dest: Rect) -> CardResult<()>;
}

/// [`DrawSurface`] backed by `vello_cpu`.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    transform: Affine,
    depth: usize,
}

impl CpuSurface {
    /// Allocate a transparent surface.
    pub fn new(width: u32, height: u32) -> CardResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| CardError::render("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| CardError::render("surface height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(CardError::render("surface width/height must be > 0"));
        }
        Ok(Self {
            width: width_u16,
            height: height_u16,
            ctx: vello_cpu::RenderContext::new(width_u16, height_u16),
            transform: Affine::IDENTITY,
            depth: 0,
        })
    }

    /// Flush all drawing and read the pixels back.
    pub fn finish(mut self) -> CardResult<FrameRGBA> {
        if self.depth != 0 {
            return Err(CardError::render(format!(
                "{} layer(s) still pushed at finish",
                self.depth
            )));
        }
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn apply_paint(&mut self, paint: &Paint) {
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        match paint {
            Paint::Solid(c) => self.ctx.set_paint(color_to_cpu(*c)),
            Paint::Linear { start, end, stops } => {
                let stops = stops_to_cpu(stops);
                let g = vello_cpu::peniko::Gradient::new_linear(point_to_cpu(*start), point_to_cpu(*end))
                    .with_stops(stops.as_slice());
                self.ctx.set_paint(g);
            }
            Paint::Radial {
                start_center,
                start_radius,
                end_center,
                end_radius,
                stops,
            } => {
                let stops = stops_to_cpu(stops);
                let g = vello_cpu::peniko::Gradient::new_two_point_radial(
                    point_to_cpu(*start_center),
                    *start_radius,
                    point_to_cpu(*end_center),
                    *end_radius,
                )
                .with_stops(stops.as_slice());
                self.ctx.set_paint(g);
            }
        }
    }
}

impl DrawSurface for CpuSurface {
    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.ctx.set_transform(affine_to_cpu(transform));
    }

    fn fill_path(&mut self, path: &BezPath, paint: &Paint) {
        self.apply_paint(paint);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, paint: &Paint) {
        if width <= 0.0 {
            return;
        }
        self.apply_paint(paint);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.apply_paint(paint);
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    fn push_clip(&mut self, path: &BezPath) {
        self.ctx.push_clip_layer(&bezpath_to_cpu(path));
        self.depth += 1;
    }

    fn pop_layer(&mut self) {
        if self.depth > 0 {
            self.ctx.pop_layer();
            self.depth -= 1;
        }
    }

    fn draw_image(&mut self, image: &PremulImage, dest: Rect) -> CardResult<()> {
        if dest.width() <= 0.0 || dest.height() <= 0.0 {
            return Ok(());
        }
        let pixmap = image_premul_bytes_to_pixmap(&image.data, image.width, image.height)?;
        let (w, h) = (f64::from(image.width), f64::from(image.height));
        let local = self.transform
            * Affine::translate((dest.x0, dest.y0))
            * Affine::scale_non_uniform(dest.width() / w, dest.height() / h);

        self.ctx.set_transform(affine_to_cpu(local));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        });
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
        self.ctx.set_transform(affine_to_cpu(self.transform));
        Ok(())
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn stops_to_cpu(stops: &[(f32, Rgba8)]) -> Vec<(f32, vello_cpu::peniko::Color)> {
    stops
        .iter()
        .map(|&(offset, c)| (offset.clamp(0.0, 1.0), color_to_cpu(c)))
        .collect()
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> CardResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CardError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CardError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(CardError::render("image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
