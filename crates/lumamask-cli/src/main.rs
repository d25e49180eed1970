//! `lumamask` binary: mask one image file from the command line.
//!
//! Status lines go to stdout (processing / success / failure), diagnostics
//! to stderr via the logger, and each failure kind maps to its own exit
//! code so scripts never have to parse text.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;

use lumamask::{init_with_level, mask_file, write_json_report, MaskError, MaskParams};

#[derive(Parser, Debug)]
#[command(
    name = "lumamask",
    version,
    about = "Turn an image into a white-on-transparent PNG by mapping luminance to alpha"
)]
struct Args {
    /// Source image (any format the decoder supports)
    input: PathBuf,

    /// Destination PNG; defaults to `<input stem>-transparent.png` next to
    /// the input
    output: Option<PathBuf>,

    /// Luminance below this value is cleared to full transparency
    #[arg(long)]
    threshold: Option<f32>,

    /// Gain applied to luminance when deriving alpha
    #[arg(long)]
    gain: Option<f32>,

    /// Write a JSON run summary to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Logger verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}-transparent.png"))
}

fn build_params(args: &Args) -> MaskParams {
    let mut params = MaskParams::default();
    if let Some(threshold) = args.threshold {
        params.luma_threshold = threshold;
    }
    if let Some(gain) = args.gain {
        params.alpha_gain = gain;
    }
    params
}

fn failure_code(err: &MaskError) -> u8 {
    match err {
        MaskError::InputNotFound(_) => 2,
        MaskError::Decode(_) => 3,
        MaskError::Encode(_) => 4,
        MaskError::Io(_) | MaskError::Json(_) => 5,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = LevelFilter::from_str(&args.log_level).unwrap_or(LevelFilter::Info);
    // a previously installed logger keeps receiving diagnostics
    let _ = init_with_level(level);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input));
    let params = build_params(&args);

    println!("Processing {}...", args.input.display());

    let report = match mask_file(&args.input, &output, &params) {
        Ok(report) => report,
        Err(MaskError::InputNotFound(path)) => {
            println!("File not found: {}", path.display());
            return ExitCode::from(2);
        }
        Err(err) => {
            println!("Error: {err}");
            return ExitCode::from(failure_code(&err));
        }
    };

    println!("Successfully saved to {}", output.display());

    if let Some(report_path) = &args.report {
        if let Err(err) = write_json_report(&report, report_path) {
            println!("Error: {err}");
            return ExitCode::from(failure_code(&err));
        }
    }

    ExitCode::SUCCESS
}
