use crate::foundation::core::{Rgba8, unit_to_u8};
use crate::foundation::error::{CardError, CardResult};

/// Parse a CSS color string as used in templates.
///
/// Accepted forms: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r,g,b)`, `rgba(r,g,b,a)`,
/// `hsl(h,s%,l%)`, `hsla(h,s%,l%,a)` and `transparent`. Channel values in `rgb()` are `0..=255`,
/// alpha is `0..=1`.
pub fn parse_css_color(s: &str) -> CardResult<Rgba8> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("transparent") {
        return Ok(Rgba8::rgba(0, 0, 0, 0));
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    let (name, args) = lower
        .split_once('(')
        .and_then(|(name, rest)| rest.strip_suffix(')').map(|args| (name.trim(), args)))
        .ok_or_else(|| CardError::validation(format!("unsupported color \"{s}\"")))?;

    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    match (name, parts.len()) {
        ("rgb", 3) | ("rgba", 4) => {
            let r = parse_channel(parts[0], s)?;
            let g = parse_channel(parts[1], s)?;
            let b = parse_channel(parts[2], s)?;
            let a = match parts.get(3) {
                Some(a) => parse_alpha(a, s)?,
                None => 1.0,
            };
            Ok(Rgba8::rgb(r, g, b).with_alpha_f(a))
        }
        ("hsl", 3) | ("hsla", 4) => {
            let h = parse_number(parts[0], s)?;
            let sat = parse_percent(parts[1], s)?;
            let l = parse_percent(parts[2], s)?;
            let a = match parts.get(3) {
                Some(a) => parse_alpha(a, s)?,
                None => 1.0,
            };
            let (r, g, b) = hsl_to_rgb(h, sat, l);
            Ok(Rgba8::rgb(
                unit_to_u8(r as f32),
                unit_to_u8(g as f32),
                unit_to_u8(b as f32),
            )
            .with_alpha_f(a))
        }
        _ => Err(CardError::validation(format!(
            "unsupported color function \"{s}\""
        ))),
    }
}

/// Format the color channels as a CSS `rgb()` string. Alpha is carried separately (SVG
/// `fill-opacity` and friends).
pub fn to_css_rgb(c: Rgba8) -> String {
    format!("rgb({},{},{})", c.r, c.g, c.b)
}

fn parse_hex(hex: &str) -> CardResult<Rgba8> {
    fn hex_byte(pair: &str) -> CardResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| CardError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if !hex.is_ascii() {
        return Err(CardError::validation("hex color must be ASCII"));
    }

    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, ch) in hex.chars().enumerate() {
                let v = hex_byte(&ch.to_string())?;
                out[i] = v * 17;
            }
            Ok(Rgba8::rgb(out[0], out[1], out[2]))
        }
        6 => Ok(Rgba8::rgb(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
        )),
        8 => Ok(Rgba8::rgba(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            hex_byte(&hex[6..8])?,
        )),
        _ => Err(CardError::validation(
            "hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)",
        )),
    }
}

fn parse_number(v: &str, whole: &str) -> CardResult<f64> {
    let x: f64 = v
        .parse()
        .map_err(|_| CardError::validation(format!("invalid number \"{v}\" in color \"{whole}\"")))?;
    if !x.is_finite() {
        return Err(CardError::validation(format!(
            "non-finite number in color \"{whole}\""
        )));
    }
    Ok(x)
}

fn parse_channel(v: &str, whole: &str) -> CardResult<u8> {
    let x = parse_number(v, whole)?;
    Ok(x.clamp(0.0, 255.0).round() as u8)
}

fn parse_alpha(v: &str, whole: &str) -> CardResult<f32> {
    let x = match v.strip_suffix('%') {
        Some(p) => parse_number(p, whole)? / 100.0,
        None => parse_number(v, whole)?,
    };
    Ok(x.clamp(0.0, 1.0) as f32)
}

fn parse_percent(v: &str, whole: &str) -> CardResult<f64> {
    let p = v.strip_suffix('%').unwrap_or(v);
    Ok((parse_number(p, whole)? / 100.0).clamp(0.0, 1.0))
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    // Standard HSL -> RGB conversion (sRGB space, normalized 0..1 inputs).
    let h = (h % 360.0 + 360.0) % 360.0 / 360.0;
    if s == 0.0 {
        return (l, l, l);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
