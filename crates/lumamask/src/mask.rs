use image::{Rgba, RgbaImage};

use crate::params::MaskParams;

/// Perceptual luminance of an 8-bit RGB triple, in [0, 255].
///
/// Rec. 601 luma weights.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// Map a luminance value to an output alpha.
///
/// Below the threshold the pixel is background noise and becomes fully
/// transparent; at or above it, alpha is `min(255, round(luma * gain))`.
#[inline]
pub fn alpha_for_luminance(luma: f32, params: &MaskParams) -> u8 {
    if luma < params.luma_threshold {
        0
    } else {
        (luma * params.alpha_gain).round().min(255.0) as u8
    }
}

/// Rewrite every pixel in place: color forced to white, alpha derived from
/// the pixel's original luminance. Source alpha is ignored.
pub fn apply_in_place(img: &mut RgbaImage, params: &MaskParams) {
    for px in img.pixels_mut() {
        let Rgba([r, g, b, _]) = *px;
        let alpha = alpha_for_luminance(luminance(r, g, b), params);
        *px = Rgba([255, 255, 255, alpha]);
    }
}

/// Like [`apply_in_place`], but produces a new buffer with identical
/// dimensions, leaving the input untouched.
pub fn apply(img: &RgbaImage, params: &MaskParams) -> RgbaImage {
    let mut out = img.clone();
    apply_in_place(&mut out, params);
    out
}
