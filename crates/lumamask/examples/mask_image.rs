use std::{env, path::PathBuf};

use log::{info, LevelFilter};
use lumamask::{init_with_level, mask_file, MaskParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(LevelFilter::Info)?;

    let input = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("testdata/batik.jpg"));
    let output = env::args()
        .nth(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("testdata/batik-transparent.png"));

    let report = mask_file(&input, &output, &MaskParams::default())?;
    info!(
        "{}x{} masked, {} pixels kept",
        report.width, report.height, report.opaque
    );
    Ok(())
}
