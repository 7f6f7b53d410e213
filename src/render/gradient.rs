use crate::foundation::core::{Canvas, Point, Rgba8};

/// Stops used when a descriptor carries no hex colors.
pub const FALLBACK_STOPS: [Rgba8; 2] = [Rgba8::rgb(0x66, 0x7e, 0xea), Rgba8::rgb(0x76, 0x4b, 0xa2)];

/// Angle used when a descriptor carries no `<n>deg` token.
pub const DEFAULT_ANGLE_DEG: f64 = 135.0;

/// A parsed background gradient descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSpec {
    /// Colors distributed evenly from offset 0 to 1.
    pub stops: Vec<Rgba8>,
    pub angle_deg: f64,
}

impl LinearSpec {
    /// Parse a CSS-like descriptor such as `linear-gradient(160deg, #f093fb, #f5576c)`.
    ///
    /// Only `#rrggbb` tokens and the first `<digits>deg` token are read. Anything else is
    /// ignored, and missing parts fall back to [`FALLBACK_STOPS`] and [`DEFAULT_ANGLE_DEG`].
    pub fn parse(descriptor: &str) -> Self {
        let mut stops = hex6_tokens(descriptor);
        if stops.is_empty() {
            stops = FALLBACK_STOPS.to_vec();
        }
        let angle_deg = first_deg_token(descriptor).unwrap_or(DEFAULT_ANGLE_DEG);
        Self { stops, angle_deg }
    }

    /// Gradient axis through the canvas center.
    ///
    /// The endpoints are offset by `cos(angle) * width / 2` and `sin(angle) * height / 2`.
    pub fn axis(&self, canvas: Canvas) -> (Point, Point) {
        let rad = self.angle_deg.to_radians();
        let dx = rad.cos() * canvas.w();
        let dy = rad.sin() * canvas.h();
        let c = canvas.center();
        (
            Point::new(c.x - dx / 2.0, c.y - dy / 2.0),
            Point::new(c.x + dx / 2.0, c.y + dy / 2.0),
        )
    }

    /// `(offset, color)` pairs, evenly spaced.
    pub fn offsets(&self) -> Vec<(f32, Rgba8)> {
        let n = self.stops.len();
        if n == 1 {
            return vec![(0.0, self.stops[0]), (1.0, self.stops[0])];
        }
        self.stops
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as f32 / (n - 1) as f32, c))
            .collect()
    }
}

fn hex6_tokens(s: &str) -> Vec<Rgba8> {
    let b = s.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < b.len() {
        if b[i] == b'#' && i + 7 <= b.len() && b[i + 1..i + 7].iter().all(u8::is_ascii_hexdigit) {
            let hex = &s[i + 1..i + 7];
            if let Ok(v) = u32::from_str_radix(hex, 16) {
                out.push(Rgba8::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8));
            }
            i += 7;
        } else {
            i += 1;
        }
    }
    out
}

fn first_deg_token(s: &str) -> Option<f64> {
    let b = s.as_bytes();
    let mut i = 0;
    while i < b.len() {
        if b[i].is_ascii_digit() {
            let start = i;
            while i < b.len() && b[i].is_ascii_digit() {
                i += 1;
            }
            if s[i..].starts_with("deg") {
                return s[start..i].parse::<f64>().ok();
            }
        } else {
            i += 1;
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
