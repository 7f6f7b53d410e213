//! Test double that records drawing calls instead of rasterizing them.

use crate::foundation::core::{Affine, BezPath, Rect};
use crate::foundation::error::CardResult;
use crate::render::surface::{DrawSurface, Paint, PremulImage};
use kurbo::Shape;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    Transform(Affine),
    Fill { bounds: Rect, paint: Paint },
    Stroke { bounds: Rect, width: f64, paint: Paint },
    FillRect { rect: Rect, paint: Paint },
    Clip { bounds: Rect },
    Pop,
    Image { dest: Rect, width: u32, height: u32 },
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) ops: Vec<Op>,
}

impl RecordingSurface {
    pub(crate) fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn set_transform(&mut self, transform: Affine) {
        self.ops.push(Op::Transform(transform));
    }

    fn fill_path(&mut self, path: &BezPath, paint: &Paint) {
        self.ops.push(Op::Fill {
            bounds: path.bounding_box(),
            paint: paint.clone(),
        });
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, paint: &Paint) {
        self.ops.push(Op::Stroke {
            bounds: path.bounding_box(),
            width,
            paint: paint.clone(),
        });
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.ops.push(Op::FillRect {
            rect,
            paint: paint.clone(),
        });
    }

    fn push_clip(&mut self, path: &BezPath) {
        self.ops.push(Op::Clip {
            bounds: path.bounding_box(),
        });
    }

    fn pop_layer(&mut self) {
        self.ops.push(Op::Pop);
    }

    fn draw_image(&mut self, image: &PremulImage, dest: Rect) -> CardResult<()> {
        self.ops.push(Op::Image {
            dest,
            width: image.width,
            height: image.height,
        });
        Ok(())
    }
}
