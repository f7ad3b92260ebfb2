use criterion::{criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgb, RgbImage};
use png2jpg::{encode_jpeg, jpeg_output_name, JpegOptions};
use std::hint::black_box;

fn generate_gradient(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        let r = ((x * 255) / width.max(1)) as u8;
        let g = ((y * 255) / height.max(1)) as u8;
        Rgb([r, g, 128])
    });
    DynamicImage::ImageRgb8(img)
}

fn bench_encode_256(c: &mut Criterion) {
    let image = generate_gradient(256, 256);
    let opts = JpegOptions::default();

    c.bench_function("encode_jpeg_256x256_q95", |b| {
        b.iter(|| {
            let result = encode_jpeg(black_box(&image), &opts);
            assert!(result.is_ok());
            result
        })
    });
}

fn bench_output_name(c: &mut Criterion) {
    let name = "some/deeply/nested/directory/holiday_photo_0123.PNG";

    c.bench_function("jpeg_output_name", |b| {
        b.iter(|| jpeg_output_name(black_box(name)))
    });
}

criterion_group!(benches, bench_encode_256, bench_output_name);
criterion_main!(benches);
