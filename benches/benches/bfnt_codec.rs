//! Benchmark suite for BFNT decoding and encoding
//!
//! Every pixel layout is measured on a synthetic 16 x 16 glyph sheet.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;

use bfnt_benches::{generate_sheet, generate_test_bfnt_data};
use bfnt_types::file::bfnt::layout::{BitPacker, BitUnpacker};
use bfnt_types::file::bfnt::{self, DecodeOptions, EncodeOptions, Header, PixelLayout};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Color counts hitting the 1, 2, 4, 8 and 16 bit layouts
const COLOR_COUNTS: [usize; 5] = [2, 4, 16, 256, 1024];

/// Benchmark full decodes, one per layout
fn bench_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("bfnt_decode");

	for colors in COLOR_COUNTS {
		let data = generate_test_bfnt_data(16, 16, colors);
		group.throughput(Throughput::Elements(16 * 16 * 256));
		group.bench_with_input(BenchmarkId::new("decode", colors), &data, |b, data| {
			b.iter(|| {
				let result = bfnt::decode(black_box(data.as_slice()), &DecodeOptions::default());
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark full encodes, one per layout
fn bench_encode(c: &mut Criterion) {
	let mut group = c.benchmark_group("bfnt_encode");

	for colors in COLOR_COUNTS {
		let sheet = generate_sheet(16, 16, 16, 16, colors);
		group.throughput(Throughput::Elements(16 * 16 * 256));
		group.bench_with_input(BenchmarkId::new("encode", colors), &sheet, |b, sheet| {
			b.iter(|| {
				let result = bfnt::encode(black_box(sheet), &EncodeOptions::default());
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark split export of a sheet with ragged edges
fn bench_encode_split(c: &mut Criterion) {
	let mut group = c.benchmark_group("bfnt_split");

	let sheet = generate_sheet(16, 8, 12, 12, 16);
	group.bench_function("encode_split", |b| {
		b.iter(|| {
			let result = bfnt::encode_split(black_box(&sheet), &EncodeOptions::new(16, 16));
			black_box(result)
		});
	});

	group.finish();
}

/// Benchmark header parsing separately
fn bench_header_parsing(c: &mut Criterion) {
	let mut group = c.benchmark_group("bfnt_header");

	let data = generate_test_bfnt_data(8, 16, 2);
	group.bench_function("parse_header", |b| {
		b.iter(|| {
			let result = Header::from_bytes(black_box(&data));
			black_box(result)
		});
	});

	group.finish();
}

/// Benchmark the sub-byte packers on their own
fn bench_bit_packing(c: &mut Criterion) {
	let mut group = c.benchmark_group("bfnt_bit_ops");

	let pixels = 65536usize;
	for layout in [PixelLayout::Bit, PixelLayout::Crumb, PixelLayout::Nibble] {
		let mask = (1u32 << layout.bits_per_pixel()) - 1;
		let indices: Vec<u32> = (0..pixels as u32).map(|i| i.wrapping_mul(7) & mask).collect();
		let mut packer = BitPacker::with_capacity(layout, pixels);
		for &index in &indices {
			packer.push(index);
		}
		let packed = packer.finish();

		group.throughput(Throughput::Elements(pixels as u64));
		group.bench_with_input(BenchmarkId::new("pack", format!("{layout:?}")), &indices, |b, indices| {
			b.iter(|| {
				let mut packer = BitPacker::with_capacity(layout, indices.len());
				for &index in black_box(indices) {
					packer.push(index);
				}
				black_box(packer.finish())
			});
		});
		group.bench_with_input(BenchmarkId::new("unpack", format!("{layout:?}")), &packed, |b, packed| {
			b.iter(|| {
				let sum = BitUnpacker::new(black_box(packed), layout).fold(0u32, u32::wrapping_add);
				black_box(sum)
			});
		});
	}

	group.finish();
}

criterion_group!(
	benches,
	bench_decode,
	bench_encode,
	bench_encode_split,
	bench_header_parsing,
	bench_bit_packing
);
criterion_main!(benches);
