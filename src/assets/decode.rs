use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::CardResult;

/// A decoded user photo in premultiplied RGBA8.
#[derive(Clone, Debug)]
pub struct DecodedPhoto {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes, row-major.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl DecodedPhoto {
    /// Width divided by height.
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Outcome of loading the user photo.
///
/// Rendering consumes this before the framed-photo pass. A failed load is not an error for the
/// card: the frame is filled with a translucent placeholder instead.
#[derive(Clone, Debug)]
pub enum PhotoLoad {
    /// The photo decoded successfully.
    Decoded(DecodedPhoto),
    /// The photo could not be read or decoded. Carries the reason for logging.
    Failed(String),
}

impl PhotoLoad {
    /// Decode JPEG/PNG/WEBP bytes. Never fails; failures become [`PhotoLoad::Failed`].
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match decode_image(bytes) {
            Ok(photo) => Self::Decoded(photo),
            Err(err) => {
                tracing::warn!(error = %err, "photo decode failed");
                Self::Failed(err.to_string())
            }
        }
    }

    /// Read and decode a photo file. IO failures are absorbed like decode failures.
    pub fn from_path(path: &Path) -> Self {
        match std::fs::read(path).with_context(|| format!("read photo '{}'", path.display())) {
            Ok(bytes) => Self::from_bytes(&bytes),
            Err(err) => {
                tracing::warn!(error = %err, "photo read failed");
                Self::Failed(format!("{err:#}"))
            }
        }
    }

    /// The decoded photo, if any.
    pub fn decoded(&self) -> Option<&DecodedPhoto> {
        match self {
            Self::Decoded(p) => Some(p),
            Self::Failed(_) => None,
        }
    }

    /// Whether the load failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Longest side kept after decoding. Larger photos are downscaled with their aspect ratio.
pub const MAX_PHOTO_SIDE: u32 = 2048;

/// Decode encoded image bytes into premultiplied RGBA8, downscaled to fit [`MAX_PHOTO_SIDE`].
pub fn decode_image(bytes: &[u8]) -> CardResult<DecodedPhoto> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let (src_w, src_h) = (dyn_img.width(), dyn_img.height());
    if src_w == 0 || src_h == 0 {
        return Err(anyhow::anyhow!("decoded image has zero size").into());
    }

    let (fit_w, fit_h) = fit_within(src_w, src_h, MAX_PHOTO_SIDE);
    let rgba = if (fit_w, fit_h) == (src_w, src_h) {
        dyn_img.to_rgba8()
    } else {
        tracing::debug!(src_w, src_h, fit_w, fit_h, "downscaling photo");
        dyn_img
            .resize_exact(fit_w, fit_h, image::imageops::FilterType::Triangle)
            .to_rgba8()
    };
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(DecodedPhoto {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Largest size with the aspect ratio of `width x height` whose sides are at most `max_side`.
/// Neither side drops below one pixel.
pub(crate) fn fit_within(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max_side {
        return (width, height);
    }
    let scale = f64::from(max_side) / f64::from(longest);
    let side = |v: u32| ((f64::from(v) * scale).round() as u32).clamp(1, max_side);
    (side(width), side(height))
}

/// Sniff the container format of encoded image bytes.
pub fn sniff_format(bytes: &[u8]) -> Option<image::ImageFormat> {
    image::guess_format(bytes).ok()
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
