// In pixlzw-core/benches/codec_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pixlzw::kernels::{bitstream, lzw, row_delta};
use pixlzw::{compress_bytes, compress_image, decompress_bytes, decompress_image};
use pixlzw::{CodecConfig, ImageGeometry};

/// Generates a vector of highly compressible data.
fn generate_low_entropy_bytes(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let pattern = b"abcdefgABCDEFG12345";
    while data.len() < size {
        data.extend_from_slice(pattern);
    }
    data.truncate(size);
    data
}

/// Generates a smooth RGB gradient, the kind of plane row delta is built for.
fn generate_gradient_image(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x % 256) as u8);
            pixels.push((y % 256) as u8);
            pixels.push(((x + y) / 2 % 256) as u8);
        }
    }
    pixels
}

const BENCH_DATA_SIZE: usize = 65536; // 64 KB
const IMAGE_SIDE: usize = 256;

fn bench_kernels(c: &mut Criterion) {
    let data = generate_low_entropy_bytes(BENCH_DATA_SIZE);
    let encoded = lzw::encode(&data);
    let packed = bitstream::pack(&encoded.codes, encoded.codelength).unwrap();
    let plane = generate_low_entropy_bytes(IMAGE_SIDE * IMAGE_SIDE);

    let mut group = c.benchmark_group("Kernels");
    group.bench_function("lzw_encode", |b| b.iter(|| lzw::encode(black_box(&data))));
    group.bench_function("lzw_decode", |b| {
        b.iter(|| lzw::decode(black_box(&encoded.codes)).unwrap())
    });
    group.bench_function("bitstream_pack", |b| {
        b.iter(|| bitstream::pack(black_box(&encoded.codes), encoded.codelength).unwrap())
    });
    group.bench_function("bitstream_unpack", |b| {
        b.iter(|| bitstream::unpack(black_box(&packed)).unwrap())
    });
    group.bench_function("row_delta_forward", |b| {
        b.iter(|| row_delta::forward(black_box(&plane), IMAGE_SIDE, IMAGE_SIDE).unwrap())
    });
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let data = generate_low_entropy_bytes(BENCH_DATA_SIZE);
    let compressed_bytes = compress_bytes(&data).unwrap();

    let pixels = generate_gradient_image(IMAGE_SIDE, IMAGE_SIDE);
    let geometry = ImageGeometry::new(IMAGE_SIDE, IMAGE_SIDE, 3);
    let config = CodecConfig::color_diff();
    let compressed_image = compress_image(&pixels, geometry, &config).unwrap();

    let mut group = c.benchmark_group("EndToEnd");
    group.bench_function("compress_bytes", |b| {
        b.iter(|| compress_bytes(black_box(&data)).unwrap())
    });
    group.bench_function("decompress_bytes", |b| {
        b.iter(|| decompress_bytes(black_box(&compressed_bytes)).unwrap())
    });
    group.bench_function("compress_image_color_diff", |b| {
        b.iter(|| compress_image(black_box(&pixels), geometry, &config).unwrap())
    });
    group.bench_function("decompress_image_color_diff", |b| {
        b.iter(|| decompress_image(black_box(&compressed_image), &config).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_kernels, bench_end_to_end);
criterion_main!(benches);
