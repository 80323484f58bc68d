//! Benchmark helper utilities for bfnt-rs
//!
//! This module provides utilities for generating synthetic glyph sheets and
//! BFNT streams for the codec benchmarks. All generators are seeded, so every
//! run measures the same data.

use bfnt_types::file::bfnt::{self, EncodeOptions};
use image::{Rgba, RgbaImage};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seed shared by all generators
pub const SEED: u64 = 0x4246_4E54;

/// Generates a random palette of `colors` distinct opaque colors.
pub fn generate_palette(colors: usize) -> Vec<Rgba<u8>> {
	let mut rng = SmallRng::seed_from_u64(SEED);
	let mut palette: Vec<Rgba<u8>> = Vec::with_capacity(colors);

	while palette.len() < colors {
		let color = Rgba([rng.random(), rng.random(), rng.random(), 0xFF]);
		if !palette.contains(&color) {
			palette.push(color);
		}
	}

	palette
}

/// Generates a glyph sheet of `columns` x `rows` glyphs, each pixel picked
/// at random from `colors` colors.
pub fn generate_sheet(
	columns: u32,
	rows: u32,
	glyph_width: u16,
	glyph_height: u16,
	colors: usize,
) -> RgbaImage {
	let palette = generate_palette(colors);
	let mut rng = SmallRng::seed_from_u64(SEED ^ colors as u64);

	RgbaImage::from_fn(columns * u32::from(glyph_width), rows * u32::from(glyph_height), |_, _| {
		palette[rng.random_range(0..palette.len())]
	})
}

/// Generates an encoded BFNT stream holding a 16 x 16 glyph sheet.
pub fn generate_test_bfnt_data(glyph_width: u16, glyph_height: u16, colors: usize) -> Vec<u8> {
	let sheet = generate_sheet(16, 16, glyph_width, glyph_height, colors);
	bfnt::encode(&sheet, &EncodeOptions::new(glyph_width, glyph_height))
		.unwrap_or_else(|e| panic!("failed to encode benchmark sheet: {e}"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_palette_distinct() {
		let palette = generate_palette(64);
		assert_eq!(palette.len(), 64);
		for (i, color) in palette.iter().enumerate() {
			assert!(!palette[i + 1..].contains(color));
		}
	}

	#[test]
	fn test_generate_sheet_deterministic() {
		let a = generate_sheet(2, 2, 8, 8, 4);
		let b = generate_sheet(2, 2, 8, 8, 4);
		assert_eq!(a.dimensions(), (16, 16));
		assert_eq!(a, b);
	}

	#[test]
	fn test_generate_bfnt_data() {
		let data = generate_test_bfnt_data(8, 16, 2);
		assert!(bfnt::is_bfnt(&data));
	}
}
