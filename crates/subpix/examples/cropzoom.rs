//! Example: progressive crop zoom on a still image.
//!
//! Loads an image, then renders N frames of a smooth zoom toward a target
//! point: each frame's crop rectangle shrinks by a constant factor around the
//! target while the output size stays fixed, exercising sub-pixel crop
//! coordinates on the packed RGB path.
//!
//! Frames are written as numbered PNGs next to the input, plus a JSON timing
//! report.
//!
//! Run from the workspace root:
//!   cargo run -p subpix --example cropzoom -- --help
//!   cargo run -p subpix --example cropzoom -- --input data/still.png

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use subpix::{CropRect, PixelFormat, PlaneRef, PlaneRefMut, resize_cropped};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Render a progressive crop-zoom sequence from a still image")]
struct Args {
    /// Path to the input image (default: data/still.png)
    #[arg(long, default_value = "data/still.png")]
    input: String,

    /// Number of frames to render
    #[arg(long, default_value_t = 24)]
    frames: usize,

    /// Per-frame crop shrink factor (1.0 = no zoom)
    #[arg(long, default_value_t = 0.92)]
    shrink: f32,

    /// Zoom target x as a fraction of source width
    #[arg(long, default_value_t = 0.5)]
    target_x: f32,

    /// Zoom target y as a fraction of source height
    #[arg(long, default_value_t = 0.5)]
    target_y: f32,

    /// Output frame width (default: source width)
    #[arg(long)]
    width: Option<u32>,

    /// Output frame height (default: source height)
    #[arg(long)]
    height: Option<u32>,

    /// Output directory (default: <input stem>_zoom next to the input)
    #[arg(long)]
    out: Option<String>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct FrameDto {
    frame: usize,
    crop_x: f32,
    crop_y: f32,
    crop_w: f32,
    crop_h: f32,
    elapsed_ms: f64,
}

#[derive(Serialize)]
struct ZoomReport {
    input: String,
    frames: Vec<FrameDto>,
    total_ms: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.frames == 0 {
        bail!("--frames must be at least 1");
    }
    if !(args.shrink > 0.0 && args.shrink <= 1.0) {
        bail!("--shrink must be in (0, 1]");
    }

    let src = image::open(&args.input)
        .with_context(|| format!("failed to open {}", &args.input))?
        .to_rgb8();
    let (src_w, src_h) = src.dimensions();

    let dst_w = args.width.unwrap_or(src_w) as usize;
    let dst_h = args.height.unwrap_or(src_h) as usize;

    let out_dir = match &args.out {
        Some(dir) => PathBuf::from(dir),
        None => {
            let input = PathBuf::from(&args.input);
            let stem = input
                .file_stem()
                .context("input path has no file stem")?
                .to_string_lossy()
                .into_owned();
            input.with_file_name(format!("{stem}_zoom"))
        }
    };
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let target = (
        args.target_x * (src_w - 1) as f32,
        args.target_y * (src_h - 1) as f32,
    );

    let mut crop = CropRect::full_frame(src_w as usize, src_h as usize);
    let mut out = vec![0u8; dst_w * dst_h * 3];
    let mut report = ZoomReport {
        input: args.input.clone(),
        frames: Vec::with_capacity(args.frames),
        total_ms: 0.0,
    };

    let run_started = Instant::now();
    for frame in 0..args.frames {
        let started = Instant::now();
        resize_cropped(
            &[PlaneRef {
                data: src.as_raw(),
                stride: src_w as usize * 3,
            }],
            src_w as usize,
            src_h as usize,
            crop,
            &mut [PlaneRefMut {
                data: &mut out,
                stride: dst_w * 3,
            }],
            dst_w,
            dst_h,
            PixelFormat::Rgb24,
        )
        .with_context(|| format!("resize failed at frame {frame}"))?;
        let elapsed_ms = started.elapsed().as_secs_f64() * 1e3;

        let frame_path = out_dir.join(format!("frame_{frame:03}.png"));
        image::RgbImage::from_raw(dst_w as u32, dst_h as u32, out.clone())
            .context("output buffer does not match frame size")?
            .save(&frame_path)
            .with_context(|| format!("failed to write {}", frame_path.display()))?;

        println!(
            "frame {frame:3}: crop ({:.2}, {:.2}) {:.2}x{:.2} in {elapsed_ms:.2} ms",
            crop.x, crop.y, crop.w, crop.h
        );
        report.frames.push(FrameDto {
            frame,
            crop_x: crop.x,
            crop_y: crop.y,
            crop_w: crop.w,
            crop_h: crop.h,
            elapsed_ms,
        });

        crop = shrink_towards(crop, target, args.shrink);
    }
    report.total_ms = run_started.elapsed().as_secs_f64() * 1e3;

    let report_path = out_dir.join("zoom_report.json");
    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    fs::write(&report_path, json)
        .with_context(|| format!("failed to write {}", report_path.display()))?;
    println!(
        "{} frames in {:.2} ms, report: {}",
        args.frames,
        report.total_ms,
        report_path.display()
    );

    Ok(())
}

/// Shrinks the crop by `factor` while keeping `target` at the same relative
/// position inside it.
fn shrink_towards(crop: CropRect, target: (f32, f32), factor: f32) -> CropRect {
    let (tx, ty) = target;
    let fx = if crop.w > 0.0 { (tx - crop.x) / crop.w } else { 0.5 };
    let fy = if crop.h > 0.0 { (ty - crop.y) / crop.h } else { 0.5 };

    let w = crop.w * factor;
    let h = crop.h * factor;
    CropRect::new(tx - fx * w, ty - fy * h, w, h)
}
