//! File-level pipeline: decode, mask, encode.

use std::path::Path;

use image::{ImageFormat, ImageReader, RgbaImage};
use log::{debug, info};

use crate::error::MaskError;
use crate::mask::apply_in_place;
use crate::params::MaskParams;
use crate::report::MaskReport;

/// Load an image from disk and normalize it to 8-bit RGBA.
///
/// A missing input is reported as [`MaskError::InputNotFound`] before any
/// decoding is attempted, so callers can treat it as a benign condition.
/// Any decodable format is accepted; a source alpha channel, if present,
/// survives the conversion but is ignored by the transform.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, MaskError> {
    if !path.exists() {
        return Err(MaskError::InputNotFound(path.to_path_buf()));
    }
    let img = ImageReader::open(path)?
        .decode()
        .map_err(MaskError::Decode)?
        .to_rgba8();
    debug!("decoded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img)
}

/// Encode a buffer as a 4-channel PNG at `path`.
///
/// The parent directory is assumed to exist and be writable.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), MaskError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(MaskError::Encode)
}

/// Run the whole pipeline on one file: decode `input`, rewrite every pixel
/// to white with luminance-derived alpha, and write `output` as PNG.
///
/// On any failure no output file is written. On success the returned
/// [`MaskReport`] summarizes the run.
pub fn mask_file(
    input: &Path,
    output: &Path,
    params: &MaskParams,
) -> Result<MaskReport, MaskError> {
    let mut img = load_rgba(input)?;
    apply_in_place(&mut img, params);

    let transparent = img.pixels().filter(|px| px.0[3] == 0).count();
    let opaque = img.pixels().len() - transparent;

    save_png(&img, output)?;
    info!(
        "masked {} -> {} ({} transparent, {} kept)",
        input.display(),
        output.display(),
        transparent,
        opaque
    );

    Ok(MaskReport {
        input_path: input.to_path_buf(),
        output_path: output.to_path_buf(),
        width: img.width(),
        height: img.height(),
        transparent,
        opaque,
    })
}
