use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::color::to_css_rgb;
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{CardError, CardResult};
use crate::render::surface::PremulImage;

/// Environment variable holding extra font directories (platform path-list syntax).
pub const FONT_DIR_ENV: &str = "WISHCRAFT_FONT_DIR";

/// Advance estimate per character, as a fraction of the font size, when no face is available.
const FALLBACK_ADVANCE_EM: f64 = 0.55;

/// Where text faces come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontConfig {
    /// Scan the platform font directories.
    pub load_system_fonts: bool,
    /// Extra directories scanned for `ttf`/`otf`/`ttc` files.
    pub font_dirs: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
            font_dirs: Vec::new(),
        }
    }
}

impl FontConfig {
    /// Defaults plus any directories listed in [`FONT_DIR_ENV`].
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(raw) = std::env::var_os(FONT_DIR_ENV) {
            cfg.font_dirs
                .extend(std::env::split_paths(&raw).filter(|p| !p.as_os_str().is_empty()));
        }
        cfg
    }

    /// Build the shared face database.
    pub fn build_db(&self) -> Arc<usvg::fontdb::Database> {
        let mut db = usvg::fontdb::Database::new();
        if self.load_system_fonts {
            db.load_system_fonts();
        }
        for dir in &self.font_dirs {
            load_fonts_from_dir(&mut db, dir);
        }
        tracing::debug!(faces = db.len(), "font database ready");
        Arc::new(db)
    }
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let rd = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), %err, "font directory unreadable");
            return;
        }
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(err) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), %err, "font file skipped");
        }
    }
}

/// Resolve CSS family lists against the database, falling back to generic families and then to
/// any face at all.
fn make_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::SansSerif);
            families.push(usvg::fontdb::Family::Serif);

            let style = match font.style() {
                usvg::FontStyle::Normal => usvg::fontdb::Style::Normal,
                usvg::FontStyle::Italic => usvg::fontdb::Style::Italic,
                usvg::FontStyle::Oblique => usvg::fontdb::Style::Oblique,
            };

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style,
            };

            if let Some(id) = fontdb.query(&query) {
                return Some(id);
            }
            fontdb.faces().next().map(|f| f.id)
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

/// Horizontal alignment of a span relative to its `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Text starts at `x`.
    Start,
    /// Text is centered on `x`.
    Middle,
}

impl Anchor {
    fn svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Blurred drop shadow under a text span. `blur` follows canvas `shadowBlur` semantics
/// (the Gaussian sigma is half of it).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextShadow {
    pub color: Rgba8,
    pub blur: f64,
    pub dx: f64,
    pub dy: f64,
}

/// One line of text placed on the alphabetic baseline at `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// CSS family list, e.g. `"Outfit, sans-serif"`.
    pub family: String,
    pub weight: u16,
    pub fill: Rgba8,
    /// Whole-span opacity, applied to glyphs and shadow alike (color glyphs included).
    pub opacity: f32,
    pub anchor: Anchor,
    pub shadow: Option<TextShadow>,
}

impl TextSpan {
    /// White, regular weight, centered sans-serif text.
    pub fn new(text: impl Into<String>, x: f64, y: f64, size: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
            family: "sans-serif".to_string(),
            weight: 400,
            fill: Rgba8::WHITE,
            opacity: 1.0,
            anchor: Anchor::Middle,
            shadow: None,
        }
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn fill(mut self, fill: Rgba8) -> Self {
        self.fill = fill;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn shadow(mut self, shadow: TextShadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Width guess used when no face can lay the span out.
    pub fn estimated_width(&self) -> f64 {
        self.text.chars().count() as f64 * self.size * FALLBACK_ADVANCE_EM
    }
}

/// A batch of spans rasterized together into one canvas-sized layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLayer {
    spans: Vec<TextSpan>,
}

impl TextLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, span: TextSpan) {
        self.spans.push(span);
    }

    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }

    /// SVG document covering `canvas` with one `<text>` element per span.
    pub fn to_svg(&self, canvas: Canvas) -> String {
        let (w, h) = (canvas.width, canvas.height);
        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );

        let mut defs = String::new();
        for (i, span) in self.spans.iter().enumerate() {
            let Some(sh) = span.shadow else {
                continue;
            };
            let _ = write!(
                defs,
                concat!(
                    r#"<filter id="shadow{i}" filterUnits="userSpaceOnUse" x="0" y="0" width="{w}" height="{h}">"#,
                    r#"<feDropShadow dx="{dx}" dy="{dy}" stdDeviation="{sd}" flood-color="{fc}" flood-opacity="{fo}"/>"#,
                    "</filter>"
                ),
                i = i,
                w = w,
                h = h,
                dx = sh.dx,
                dy = sh.dy,
                sd = (sh.blur / 2.0).max(0.0),
                fc = to_css_rgb(sh.color),
                fo = sh.color.alpha_f(),
            );
        }
        if !defs.is_empty() {
            let _ = write!(svg, "<defs>{defs}</defs>");
        }

        for (i, span) in self.spans.iter().enumerate() {
            if span.text.is_empty() {
                continue;
            }
            let _ = write!(
                svg,
                concat!(
                    r#"<text x="{x}" y="{y}" font-size="{size}" font-family="{family}" font-weight="{weight}" "#,
                    r#"fill="{fill}" fill-opacity="{fo}" opacity="{op}" text-anchor="{anchor}" xml:space="preserve""#
                ),
                x = span.x,
                y = span.y,
                size = span.size,
                family = xml_escape(&span.family),
                weight = span.weight,
                fill = to_css_rgb(span.fill),
                fo = span.fill.alpha_f(),
                op = span.opacity.clamp(0.0, 1.0),
                anchor = span.anchor.svg_value(),
            );
            if span.shadow.is_some() {
                let _ = write!(svg, r#" filter="url(#shadow{i})""#);
            }
            let _ = write!(svg, ">{}</text>", xml_escape(&span.text));
        }
        svg.push_str("</svg>");
        svg
    }
}

/// Escape the five XML special characters and drop characters XML 1.0 cannot carry.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(ch),
            '\u{0}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}' => {}
            c => out.push(c),
        }
    }
    out
}

/// Lays out and rasterizes text against a shared face database.
#[derive(Clone)]
pub struct TextEngine {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for TextEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEngine")
            .field("faces", &self.fontdb.len())
            .finish()
    }
}

impl TextEngine {
    pub fn new(fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self { fontdb }
    }

    pub fn from_config(cfg: &FontConfig) -> Self {
        Self::new(cfg.build_db())
    }

    /// Number of faces available for layout.
    pub fn face_count(&self) -> usize {
        self.fontdb.len()
    }

    fn parse(&self, svg: &str) -> CardResult<usvg::Tree> {
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            font_resolver: make_font_resolver(),
            ..Default::default()
        };
        usvg::Tree::from_str(svg, &opts).map_err(|e| CardError::render(format!("text layout: {e}")))
    }

    /// Rasterize `layer` into a premultiplied canvas-sized image.
    ///
    /// Returns `None` when nothing could be laid out.
    pub fn rasterize(&self, layer: &TextLayer, canvas: Canvas) -> CardResult<Option<PremulImage>> {
        if layer.is_empty() {
            return Ok(None);
        }
        let tree = self.parse(&layer.to_svg(canvas))?;
        if tree.root().children().is_empty() {
            tracing::debug!(spans = layer.spans().len(), "text layer produced no glyphs");
            return Ok(None);
        }

        let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
            .ok_or_else(|| CardError::render("text pixmap allocation failed"))?;
        resvg::render(&tree, resvg::tiny_skia::Transform::identity(), &mut pixmap.as_mut());

        Ok(Some(PremulImage {
            width: canvas.width,
            height: canvas.height,
            data: Arc::new(pixmap.take()),
        }))
    }

    /// Laid-out width of `span` in pixels, or an estimate when no face can render it.
    pub fn measure(&self, span: &TextSpan) -> f64 {
        if span.text.is_empty() {
            return 0.0;
        }
        let unplaced = TextSpan {
            x: 0.0,
            y: span.size,
            anchor: Anchor::Start,
            shadow: None,
            opacity: 1.0,
            ..span.clone()
        };
        let mut layer = TextLayer::new();
        layer.push(unplaced);

        let width = (span.estimated_width() * 2.0 + span.size).ceil().max(1.0) as u32;
        let height = (span.size * 2.0).ceil().max(1.0) as u32;
        let canvas = Canvas { width, height };

        match self.parse(&layer.to_svg(canvas)) {
            Ok(tree) if !tree.root().children().is_empty() => {
                f64::from(tree.root().bounding_box().width())
            }
            Ok(_) => span.estimated_width(),
            Err(err) => {
                tracing::debug!(%err, "text measurement fell back to estimate");
                span.estimated_width()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
