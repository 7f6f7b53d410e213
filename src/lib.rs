//! Wishcraft turns one photo and one name into a set of occasion greeting cards.
//!
//! The pipeline has two halves:
//!
//! - [`generate_templates`] deterministically expands an occasion id into fully specified
//!   [`Template`] values using the occasion's [`Theme`] (or the default theme).
//! - [`Compositor`] rasterizes one template with the user's photo and name into an 800x1000 PNG
//!   through a fixed sequence of drawing passes.
//!
//! [`CardSession`] ties both together for a whole occasion.
#![forbid(unsafe_code)]

pub mod assets;
pub mod foundation;
pub mod render;
pub mod session;
pub mod template;

pub use crate::assets::decode::{
    DecodedPhoto, MAX_PHOTO_SIDE, PhotoLoad, decode_image, sniff_format,
};
pub use crate::foundation::color::parse_css_color;
pub use crate::foundation::core::{
    Affine, BezPath, CARD_CANVAS, Canvas, Point, Rect, Rgba8, Rgba8Premul, Vec2,
};
pub use crate::foundation::error::{CardError, CardResult};
pub use crate::render::compositor::{Compositor, CompositorOpts, RenderedCard, WATERMARK_TEXT};
pub use crate::render::surface::{CpuSurface, DrawSurface, FrameRGBA, Paint, PremulImage};
pub use crate::render::text::{FONT_DIR_ENV, FontConfig};
pub use crate::session::batch::{BatchError, CardSession};
pub use crate::template::catalog::{Catalog, Category, DEFAULT_TEMPLATE_COUNT, Occasion};
pub use crate::template::generator::{generate_templates, templates_for_occasion};
pub use crate::template::model::{
    Background, BorderDecor, Decorations, FontStyle, FrameConfig, FrameShape, GreetingConfig,
    LayoutType, NameStyle, PatternTag, Template, TemplateLayout,
};
pub use crate::template::theme::{Theme, ThemeBook, ThemeGreeting};
