use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use image::{GrayImage, RgbImage, RgbaImage};
use serde::Serialize;
use spx_core::CropRect;
use spx_resize::{PixelFormat, PlaneRef, PlaneRefMut, resize_cropped};

#[derive(Parser, Debug)]
#[command(name = "spx_gallery")]
#[command(about = "Run subpix crop-resampling on external image fixtures")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crop-resize as packed RGB (rgb24 path)
    #[command(name = "resize")]
    Resize(ResizeArgs),
    /// Crop-resize the grayscale conversion (gray8 path)
    #[command(name = "gray")]
    Gray(ResizeArgs),
    /// Crop-resize with alpha preserved (rgba path)
    #[command(name = "rgba")]
    Rgba(ResizeArgs),
}

#[derive(Args, Debug, Clone)]
struct ResizeArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, required = true)]
    out: PathBuf,

    /// Destination width in pixels
    #[arg(long, required = true)]
    width: u32,
    /// Destination height in pixels
    #[arg(long, required = true)]
    height: u32,

    /// Crop origin x, in source pixels. All four crop values must be given
    /// together; the default is the full frame.
    #[arg(long)]
    crop_x: Option<f32>,
    #[arg(long)]
    crop_y: Option<f32>,
    #[arg(long)]
    crop_w: Option<f32>,
    #[arg(long)]
    crop_h: Option<f32>,

    /// Write a JSON timing report next to the output image
    #[arg(long, default_value_t = false)]
    report: bool,
}

#[derive(Serialize)]
struct CropDto {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

#[derive(Serialize)]
struct ResizeReport {
    input: String,
    output: String,
    format: String,
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
    crop: CropDto,
    /// Wall-clock time of the resize call, in milliseconds.
    elapsed_ms: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Resize(args) => run_rgb(&args),
        Command::Gray(args) => run_gray(&args),
        Command::Rgba(args) => run_rgba(&args),
    }
}

fn crop_from_args(args: &ResizeArgs, src_w: u32, src_h: u32) -> Result<CropRect> {
    let given = [args.crop_x, args.crop_y, args.crop_w, args.crop_h];
    if given.iter().all(Option::is_none) {
        return Ok(CropRect::full_frame(src_w as usize, src_h as usize));
    }
    match given {
        [Some(x), Some(y), Some(w), Some(h)] => Ok(CropRect::new(x, y, w, h)),
        _ => bail!("--crop-x/--crop-y/--crop-w/--crop-h must be given together"),
    }
}

fn run_rgb(args: &ResizeArgs) -> Result<()> {
    let src = image::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?
        .to_rgb8();
    let (src_w, src_h) = src.dimensions();
    let crop = crop_from_args(args, src_w, src_h)?;

    let mut out = vec![0u8; args.width as usize * args.height as usize * 3];
    let elapsed_ms = timed_resize(
        &[PlaneRef {
            data: src.as_raw(),
            stride: src_w as usize * 3,
        }],
        src_w,
        src_h,
        crop,
        &mut [PlaneRefMut {
            data: &mut out,
            stride: args.width as usize * 3,
        }],
        args,
        PixelFormat::Rgb24,
    )?;

    let out_img = RgbImage::from_raw(args.width, args.height, out)
        .context("output buffer does not match destination size")?;
    save(&args.out, |p| out_img.save(p))?;
    finish(args, src_w, src_h, crop, PixelFormat::Rgb24, elapsed_ms)
}

fn run_gray(args: &ResizeArgs) -> Result<()> {
    let src = image::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?
        .to_luma8();
    let (src_w, src_h) = src.dimensions();
    let crop = crop_from_args(args, src_w, src_h)?;

    let mut out = vec![0u8; args.width as usize * args.height as usize];
    let elapsed_ms = timed_resize(
        &[PlaneRef {
            data: src.as_raw(),
            stride: src_w as usize,
        }],
        src_w,
        src_h,
        crop,
        &mut [PlaneRefMut {
            data: &mut out,
            stride: args.width as usize,
        }],
        args,
        PixelFormat::Gray8,
    )?;

    let out_img = GrayImage::from_raw(args.width, args.height, out)
        .context("output buffer does not match destination size")?;
    save(&args.out, |p| out_img.save(p))?;
    finish(args, src_w, src_h, crop, PixelFormat::Gray8, elapsed_ms)
}

fn run_rgba(args: &ResizeArgs) -> Result<()> {
    let src = image::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?
        .to_rgba8();
    let (src_w, src_h) = src.dimensions();
    let crop = crop_from_args(args, src_w, src_h)?;

    let mut out = vec![0u8; args.width as usize * args.height as usize * 4];
    let elapsed_ms = timed_resize(
        &[PlaneRef {
            data: src.as_raw(),
            stride: src_w as usize * 4,
        }],
        src_w,
        src_h,
        crop,
        &mut [PlaneRefMut {
            data: &mut out,
            stride: args.width as usize * 4,
        }],
        args,
        PixelFormat::Rgba,
    )?;

    let out_img = RgbaImage::from_raw(args.width, args.height, out)
        .context("output buffer does not match destination size")?;
    save(&args.out, |p| out_img.save(p))?;
    finish(args, src_w, src_h, crop, PixelFormat::Rgba, elapsed_ms)
}

fn timed_resize(
    src: &[PlaneRef<'_>],
    src_w: u32,
    src_h: u32,
    crop: CropRect,
    dst: &mut [PlaneRefMut<'_>],
    args: &ResizeArgs,
    format: PixelFormat,
) -> Result<f64> {
    let started = Instant::now();
    resize_cropped(
        src,
        src_w as usize,
        src_h as usize,
        crop,
        dst,
        args.width as usize,
        args.height as usize,
        format,
    )
    .with_context(|| format!("{format} resize failed"))?;
    Ok(started.elapsed().as_secs_f64() * 1e3)
}

fn save(path: &Path, write: impl FnOnce(&Path) -> image::ImageResult<()>) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    write(path).with_context(|| format!("failed to write {}", path.display()))
}

fn finish(
    args: &ResizeArgs,
    src_w: u32,
    src_h: u32,
    crop: CropRect,
    format: PixelFormat,
    elapsed_ms: f64,
) -> Result<()> {
    println!(
        "{} {}x{} -> {}x{} in {elapsed_ms:.2} ms",
        format, src_w, src_h, args.width, args.height
    );

    if args.report {
        let report = ResizeReport {
            input: args.input.display().to_string(),
            output: args.out.display().to_string(),
            format: format.to_string(),
            src_width: src_w,
            src_height: src_h,
            dst_width: args.width,
            dst_height: args.height,
            crop: CropDto {
                x: crop.x,
                y: crop.y,
                w: crop.w,
                h: crop.h,
            },
            elapsed_ms,
        };
        let report_path = args.out.with_extension("json");
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        fs::write(&report_path, json)
            .with_context(|| format!("failed to write {}", report_path.display()))?;
        println!("report: {}", report_path.display());
    }

    Ok(())
}
