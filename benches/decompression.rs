use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huffpack::{compress, decompress, read_header};
use std::hint::black_box;
use std::time::Duration;

fn generate_test_data(size: usize, pattern: &str) -> Vec<u8> {
    match pattern {
        "text" => {
            // Lorem ipsum style text data
            let base = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
            let mut data = Vec::with_capacity(size);
            while data.len() < size {
                data.extend_from_slice(base);
            }
            data.truncate(size);
            data
        }
        "binary" => (0..size).map(|i| ((i * 17 + 11) % 256) as u8).collect(),
        "skewed" => {
            // Geometric-ish distribution: low byte values dominate
            (0..size)
                .map(|i| (i as u32 ^ (i as u32 >> 3)).trailing_zeros().min(255) as u8)
                .collect()
        }
        "single" => vec![0xAA; size],
        _ => panic!("Unknown pattern: {pattern}"),
    }
}

fn decompression_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_throughput");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    for size in [1024, 10240, 102400, 1048576].iter() {
        let size_label = match *size {
            1024 => "1KB",
            10240 => "10KB",
            102400 => "100KB",
            1048576 => "1MB",
            _ => "unknown",
        };

        for pattern in ["text", "binary", "skewed", "single"].iter() {
            let compressed =
                compress(&generate_test_data(*size, pattern)).expect("Compression failed");

            // Throughput is measured against the decompressed size
            group.throughput(Throughput::Bytes(*size as u64));
            group.bench_with_input(
                BenchmarkId::new(*pattern, size_label),
                &compressed,
                |b, compressed| {
                    b.iter(|| decompress(black_box(compressed)).expect("Decompression failed"))
                },
            );
        }
    }

    group.finish();
}

fn header_parsing(c: &mut Criterion) {
    let compressed = compress(&generate_test_data(102400, "binary")).expect("Compression failed");
    c.bench_function("read_header_256_symbols", |b| {
        b.iter(|| read_header(black_box(&compressed)).expect("Header parse failed"))
    });
}

criterion_group!(benches, decompression_throughput, header_parsing);
criterion_main!(benches);
