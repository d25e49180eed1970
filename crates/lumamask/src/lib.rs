//! Luminance-to-alpha masking.
//!
//! Turns a raster image into a white-on-transparent PNG: each pixel's alpha
//! is computed from its perceptual luminance, the color channels are forced
//! to white. Useful for lifting light-colored patterns (wax-resist motifs,
//! stamps, line art) off dark backgrounds.
//!
//! The file-level entry point is [`mask_file`]; the in-memory transform is
//! [`apply`] / [`apply_in_place`].

mod error;
mod io;
mod logger;
mod mask;
mod params;
mod report;

pub use error::MaskError;
pub use io::{load_rgba, mask_file, save_png};
pub use logger::init_with_level;
pub use mask::{alpha_for_luminance, apply, apply_in_place, luminance};
pub use params::MaskParams;
pub use report::{write_json_report, MaskReport};
