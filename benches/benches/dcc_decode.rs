//! Benchmark suite for DCC file decoding
//!
//! This benchmark measures the performance of the full decode pipeline:
//! header parsing, cell grid construction, pixel-buffer population and
//! frame synthesis.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dcc_benches::{generate_test_dcc_data, sizes};
use dcc_types::file::DccFile;
use std::hint::black_box;

/// Benchmark decoding across sprite sizes
fn bench_decode_sizes(c: &mut Criterion) {
	let mut group = c.benchmark_group("dcc_decode");

	let cases = [
		("tiny", sizes::TINY),
		("small", sizes::SMALL),
		("medium", sizes::MEDIUM),
		("large", sizes::LARGE),
	];

	for (name, (width, height)) in cases {
		let data = generate_test_dcc_data(1, 8, width, height);
		let pixels = u64::from(width) * u64::from(height) * 8;

		group.throughput(Throughput::Elements(pixels));
		group.bench_with_input(BenchmarkId::new("decode", name), &data, |b, data| {
			b.iter(|| {
				let result = DccFile::from_bytes(black_box(data));
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark decoding of a full 8-direction animation
fn bench_decode_directions(c: &mut Criterion) {
	let mut group = c.benchmark_group("dcc_decode_directions");

	let (width, height) = sizes::MEDIUM;
	let data = generate_test_dcc_data(8, 8, width, height);

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("eight_directions", |b| {
		b.iter(|| {
			let result = DccFile::from_bytes(black_box(&data));
			black_box(result)
		});
	});

	group.finish();
}

/// Benchmark the header path alone via a truncation-failure decode
fn bench_header_rejection(c: &mut Criterion) {
	let mut group = c.benchmark_group("dcc_header");

	let data = generate_test_dcc_data(1, 1, 4, 4);
	let truncated = &data[..16];

	group.bench_function("reject_truncated", |b| {
		b.iter(|| {
			let result = DccFile::from_bytes(black_box(truncated));
			black_box(result)
		});
	});

	group.finish();
}

criterion_group!(
	benches,
	bench_decode_sizes,
	bench_decode_directions,
	bench_header_rejection
);
criterion_main!(benches);
