//! Criterion microbenches for img2segy header computation and writing.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the performance of:
//! - Per-trace header computation (interpolation + field mapping)
//! - Writing a complete SEG-Y image to memory

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use image::{GrayImage, Luma};
use std::hint::black_box;

use img2segy::config::Config;
use img2segy::dataset::ImageDataset;
use img2segy::geometry::Geometry;
use img2segy::mapper::TraceHeaderMapper;
use img2segy::segy::{write_segy, Dataset};

// Include the example configuration at compile time (no file I/O during benchmark)
const CONFIG_FIXTURE: &str = include_str!("../tests/fixtures/example.toml");

const WIDTH: u32 = 512;
const HEIGHT: u32 = 2150;

fn setup() -> (Geometry, TraceHeaderMapper, GrayImage) {
    let config = Config::from_toml_str(CONFIG_FIXTURE).unwrap();
    let geometry = Geometry::from_config(&config).unwrap();
    let mapper = TraceHeaderMapper::from_config(&config);
    let image = GrayImage::from_fn(WIDTH, HEIGHT, |x, y| Luma([(x ^ y) as u8]));
    (geometry, mapper, image)
}

/// Benchmark computing every trace header of an image.
fn bench_trace_headers(c: &mut Criterion) {
    let (geometry, mapper, image) = setup();
    let dataset = ImageDataset::from_luma(&image, &geometry, &mapper);

    let mut group = c.benchmark_group("trace_headers");
    group.throughput(Throughput::Elements(WIDTH as u64));

    group.bench_function("trace_header", |b| {
        b.iter(|| {
            for i in 0..dataset.num_traces() {
                black_box(dataset.trace_header(black_box(i)).unwrap());
            }
        })
    });

    group.finish();
}

/// Benchmark writing a full SEG-Y file into memory.
fn bench_write_segy(c: &mut Criterion) {
    let (geometry, mapper, image) = setup();
    let dataset = ImageDataset::from_luma(&image, &geometry, &mapper);
    let total = 3600 + WIDTH as usize * (240 + HEIGHT as usize);

    let mut group = c.benchmark_group("write_segy");
    group.throughput(Throughput::Bytes(total as u64));

    group.bench_function("to_vec", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(total);
            write_segy(&mut out, black_box(&dataset)).unwrap();
            black_box(out)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_trace_headers, bench_write_segy);
criterion_main!(benches);
