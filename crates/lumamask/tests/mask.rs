use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageReader, Rgba, RgbaImage};
use lumamask::{mask_file, MaskError, MaskParams};
use tempfile::TempDir;

fn write_png(dir: &Path, name: &str, img: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).expect("write fixture png");
    path
}

fn load_png(path: &Path) -> RgbaImage {
    ImageReader::open(path)
        .expect("open output")
        .decode()
        .expect("decode output")
        .to_rgba8()
}

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let v = ((x + y * width) * 255 / (width * height)) as u8;
        Rgba([v, v, v, 255])
    })
}

#[test]
fn output_dimensions_match_input() {
    let tmp = TempDir::new().unwrap();
    for (w, h) in [(1u32, 1u32), (5, 3), (2, 9)] {
        let input = write_png(tmp.path(), &format!("in_{w}x{h}.png"), &gradient(w, h));
        let output = tmp.path().join(format!("out_{w}x{h}.png"));

        let report = mask_file(&input, &output, &MaskParams::default()).expect("mask");
        assert_eq!((report.width, report.height), (w, h));

        let out = load_png(&output);
        assert_eq!((out.width(), out.height()), (w, h));
    }
}

#[test]
fn dark_background_cleared_bright_pattern_kept_white() {
    let tmp = TempDir::new().unwrap();
    let mut img = RgbaImage::new(2, 2);
    img.put_pixel(0, 0, Rgba([10, 10, 10, 255])); // background
    img.put_pixel(1, 0, Rgba([40, 45, 48, 255])); // still below threshold
    img.put_pixel(0, 1, Rgba([100, 100, 100, 255])); // mid pattern
    img.put_pixel(1, 1, Rgba([230, 220, 240, 255])); // bright pattern
    let input = write_png(tmp.path(), "in.png", &img);
    let output = tmp.path().join("out.png");

    mask_file(&input, &output, &MaskParams::default()).expect("mask");
    let out = load_png(&output);

    assert_eq!(*out.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
    assert_eq!(*out.get_pixel(1, 0), Rgba([255, 255, 255, 0]));
    assert_eq!(*out.get_pixel(0, 1), Rgba([255, 255, 255, 150]));
    assert_eq!(*out.get_pixel(1, 1), Rgba([255, 255, 255, 255]));
}

#[test]
fn source_alpha_is_ignored() {
    let tmp = TempDir::new().unwrap();
    let mut img = RgbaImage::new(1, 2);
    // fully transparent in the source, but bright: must still be kept
    img.put_pixel(0, 0, Rgba([200, 200, 200, 0]));
    // fully opaque but dark: must still be cleared
    img.put_pixel(0, 1, Rgba([5, 5, 5, 255]));
    let input = write_png(tmp.path(), "in.png", &img);
    let output = tmp.path().join("out.png");

    mask_file(&input, &output, &MaskParams::default()).expect("mask");
    let out = load_png(&output);

    assert_eq!(out.get_pixel(0, 0).0[3], 255); // round(200 * 1.5) saturates
    assert_eq!(out.get_pixel(0, 1).0[3], 0);
}

#[test]
fn report_counts_partition_the_pixel_grid() {
    let tmp = TempDir::new().unwrap();
    let mut img = RgbaImage::new(3, 1);
    img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([20, 20, 20, 255]));
    img.put_pixel(2, 0, Rgba([180, 180, 180, 255]));
    let input = write_png(tmp.path(), "in.png", &img);
    let output = tmp.path().join("out.png");

    let report = mask_file(&input, &output, &MaskParams::default()).expect("mask");
    assert_eq!(report.transparent, 2);
    assert_eq!(report.opaque, 1);
    assert_eq!(report.transparent + report.opaque, 3);
}

// Re-running the mask on its own output is not a no-op: every pixel that
// survived the first pass is now pure white, so its luminance reads as 255
// and its alpha saturates. Pinned here so nobody assumes re-applying is safe.
#[test]
fn rerunning_on_own_output_saturates_surviving_pixels() {
    let tmp = TempDir::new().unwrap();
    let mut img = RgbaImage::new(2, 1);
    img.put_pixel(0, 0, Rgba([100, 100, 100, 255])); // first pass: alpha 150
    img.put_pixel(1, 0, Rgba([10, 10, 10, 255])); // first pass: alpha 0
    let input = write_png(tmp.path(), "in.png", &img);
    let once = tmp.path().join("once.png");
    let twice = tmp.path().join("twice.png");

    mask_file(&input, &once, &MaskParams::default()).expect("first pass");
    let first = load_png(&once);
    assert_eq!(first.get_pixel(0, 0).0[3], 150);

    mask_file(&once, &twice, &MaskParams::default()).expect("second pass");
    let second = load_png(&twice);

    for (x, y, px) in first.enumerate_pixels() {
        if px.0[3] > 0 {
            assert_eq!(second.get_pixel(x, y).0[3], 255);
        }
    }
}

#[test]
fn missing_input_reports_not_found_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("no_such.jpg");
    let output = tmp.path().join("out.png");

    let err = mask_file(&input, &output, &MaskParams::default()).unwrap_err();
    assert!(matches!(err, MaskError::InputNotFound(p) if p == input));
    assert!(!output.exists());
}

#[test]
fn corrupt_input_reports_decode_error_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("garbage.png");
    fs::write(&input, b"definitely not a png").unwrap();
    let output = tmp.path().join("out.png");

    let err = mask_file(&input, &output, &MaskParams::default()).unwrap_err();
    assert!(matches!(err, MaskError::Decode(_)));
    assert!(!output.exists());
}
