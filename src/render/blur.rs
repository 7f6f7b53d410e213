//! Soft shadow and glow masks.
//!
//! A card shadow is one color modulated by a blurred coverage mask, so only the coverage channel
//! is blurred and the color is applied afterwards with [`tint_mask`].

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{CardError, CardResult};

/// Kernel radius covering `3 * sigma` on each side.
pub fn radius_for_sigma(sigma: f32) -> u32 {
    if !sigma.is_finite() || sigma <= 0.0 {
        return 0;
    }
    (sigma * 3.0).ceil() as u32
}

/// Separable Gaussian blur of an 8-bit coverage mask with clamp-to-edge sampling.
///
/// The kernel spans [`radius_for_sigma`]. Weights are quantized to Q16 so the result is
/// bit-identical across runs. Rows that are empty before the horizontal pass stay empty and
/// are skipped.
pub fn blur_mask(mask: &[u8], width: u32, height: u32, sigma: f32) -> CardResult<Vec<u8>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(CardError::validation("blur sigma must be > 0"));
    }
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| CardError::render("blur mask size overflow"))?;
    if mask.len() != expected_len {
        return Err(CardError::render(format!(
            "blur mask has {} bytes, expected {width}x{height}",
            mask.len()
        )));
    }
    if expected_len == 0 {
        return Ok(Vec::new());
    }

    let kernel = gaussian_kernel_q16(radius_for_sigma(sigma), sigma)?;
    let w = width as usize;
    let mut tmp = vec![0u8; expected_len];
    for (src_row, dst_row) in mask.chunks_exact(w).zip(tmp.chunks_exact_mut(w)) {
        if src_row.iter().any(|&m| m != 0) {
            blur_line(src_row, dst_row, &kernel);
        }
    }

    let mut out = vec![0u8; expected_len];
    let mut column = vec![0u8; height as usize];
    let mut blurred = vec![0u8; height as usize];
    for x in 0..w {
        for (y, c) in column.iter_mut().enumerate() {
            *c = tmp[y * w + x];
        }
        if column.iter().all(|&m| m == 0) {
            continue;
        }
        blur_line(&column, &mut blurred, &kernel);
        for (y, &b) in blurred.iter().enumerate() {
            out[y * w + x] = b;
        }
    }
    Ok(out)
}

/// Expand a coverage mask into premultiplied RGBA8 of `color`.
pub fn tint_mask(mask: &[u8], color: Rgba8Premul) -> Vec<u8> {
    let scale = |c: u8, m: u8| ((u16::from(c) * u16::from(m) + 127) / 255) as u8;
    let mut out = Vec::with_capacity(mask.len() * 4);
    for &m in mask {
        out.extend_from_slice(&[
            scale(color.r, m),
            scale(color.g, m),
            scale(color.b, m),
            scale(color.a, m),
        ]);
    }
    out
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> CardResult<Vec<u32>> {
    let r = radius as i32;
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    let weights_f: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = f64::from(i);
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = weights_f.iter().sum();
    if sum <= 0.0 {
        return Err(CardError::render("gaussian kernel sum is zero"));
    }

    let mut weights: Vec<u32> = weights_f
        .iter()
        .map(|wf| (((wf / sum) * 65536.0).round() as i64).clamp(0, 65536) as u32)
        .collect();
    // Rounding drift goes to the center tap so the kernel sums to exactly 1.0.
    let acc: i64 = weights.iter().map(|&q| i64::from(q)).sum();
    let mid = weights.len() / 2;
    weights[mid] = (i64::from(weights[mid]) + 65536 - acc).clamp(0, 65536) as u32;
    Ok(weights)
}

fn blur_line(src: &[u8], dst: &mut [u8], k: &[u32]) {
    let n = src.len();
    let radius = (k.len() / 2) as isize;
    let last = n as isize - 1;
    for i in 0..n {
        let acc: u64 = k
            .iter()
            .enumerate()
            .map(|(ki, &kw)| {
                let s = (i as isize + ki as isize - radius).clamp(0, last) as usize;
                u64::from(kw) * u64::from(src[s])
            })
            .sum();
        dst[i] = ((acc + 32768) >> 16).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
