use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::MaskError;

/// Summary of a completed masking run.
///
/// `transparent` and `opaque` partition the pixel grid: a pixel counts as
/// transparent when its output alpha is exactly 0, opaque otherwise (even
/// if only partially so).
#[derive(Debug, Clone, Serialize)]
pub struct MaskReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub transparent: usize,
    pub opaque: usize,
}

/// Serialize a report as pretty JSON to `path`.
pub fn write_json_report(report: &MaskReport, path: &Path) -> Result<(), MaskError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}
