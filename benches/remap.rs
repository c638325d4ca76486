use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mr_remap_rs::image_pipeline::{
    remap_texture, ConversionConfig, PngCompression, RgbTexture, SpecularToMrPipeline,
};
use std::hint::black_box;
use std::io::Cursor;

fn generate_texture(width: u32, height: u32) -> RgbTexture {
    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            data.push((x % 256) as u8);
            data.push((y % 256) as u8);
            data.push(((x + y) % 256) as u8);
        }
    }
    RgbTexture { width, height, data }
}

fn generate_png(width: u32, height: u32) -> Vec<u8> {
    let texture = generate_texture(width, height);
    let image = image::RgbImage::from_raw(width, height, texture.data)
        .expect("buffer matches dimensions");
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, image::ImageFormat::Png)
        .expect("encode benchmark input");
    bytes.into_inner()
}

fn benchmark_remap_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("remap_by_size");

    for (width, height, label) in [(256, 256, "256x256"), (1024, 1024, "1024x1024")] {
        let texture = generate_texture(width, height);
        group.bench_with_input(BenchmarkId::from_parameter(label), &texture, |b, texture| {
            b.iter_batched(
                || texture.clone(),
                |mut texture| {
                    remap_texture(&mut texture);
                    black_box(texture)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn benchmark_conversion_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_compression");
    let input = generate_png(512, 512);

    for (compression, label) in [
        (PngCompression::Fast, "fast"),
        (PngCompression::Default, "default"),
        (PngCompression::Best, "best"),
    ] {
        let config = ConversionConfig::builder().compression(compression).build();
        let pipeline = SpecularToMrPipeline::new(config);

        group.bench_function(label, |b| {
            b.iter(|| {
                let mut output = Vec::new();
                pipeline
                    .convert(black_box(&input), &mut output)
                    .expect("conversion");
                black_box(output)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_remap_sizes, benchmark_conversion_compression);
criterion_main!(benches);
