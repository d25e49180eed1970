use std::path::PathBuf;

/// Errors returned by the masking pipeline.
///
/// Each failure kind is a separate variant so callers can map them to
/// distinct exit codes instead of parsing message text.
#[derive(thiserror::Error, Debug)]
pub enum MaskError {
    #[error("file not found: {0}")]
    InputNotFound(PathBuf),
    #[error("failed to decode input image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to encode output image: {0}")]
    Encode(#[source] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
