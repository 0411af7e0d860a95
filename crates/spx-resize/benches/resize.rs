use criterion::{Criterion, black_box, criterion_group, criterion_main};
use spx_core::{CropRect, Plane};
use spx_resize::{PixelFormat, PlaneRef, PlaneRefMut, resize_cropped, resize_plane};

fn bench_resize_plane_halve(c: &mut Criterion) {
    let width = 1280usize;
    let height = 1024usize;
    let mut data = Vec::with_capacity(width * height);
    for i in 0..(width * height) {
        data.push((i % 251) as u8);
    }
    let img = Plane::from_vec(width, height, data).expect("valid plane");
    let view = img.as_view();
    let crop = CropRect::full_frame(width, height);

    c.bench_function("resize_plane_1280x1024_to_640x512", |b| {
        b.iter(|| {
            let out = resize_plane(black_box(&view), black_box(crop), 640, 512);
            black_box(out);
        });
    });
}

fn bench_resize_cropped_rgb24(c: &mut Criterion) {
    let width = 640usize;
    let height = 480usize;
    let mut data = Vec::with_capacity(width * height * 3);
    for i in 0..(width * height * 3) {
        data.push((i % 251) as u8);
    }
    let crop = CropRect::new(100.25, 60.5, 400.0, 300.0);
    let mut out = vec![0u8; 320 * 240 * 3];

    c.bench_function("resize_cropped_rgb24_640x480_to_320x240", |b| {
        b.iter(|| {
            resize_cropped(
                &[PlaneRef {
                    data: black_box(&data),
                    stride: width * 3,
                }],
                width,
                height,
                black_box(crop),
                &mut [PlaneRefMut {
                    data: &mut out,
                    stride: 320 * 3,
                }],
                320,
                240,
                PixelFormat::Rgb24,
            )
            .expect("resize succeeds");
            black_box(&out);
        });
    });
}

criterion_group!(benches, bench_resize_plane_halve, bench_resize_cropped_rgb24);
criterion_main!(benches);
