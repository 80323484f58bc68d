//! BFNT palette support.
//!
//! Stored palettes hold `colorCount` entries of 3 bytes each. The three bytes
//! are not in RGB order: an entry `(c0, c1, c2)` maps to red `c0`, blue `c1`
//! and green `c2`. [`PaletteEntry`] keeps the raw triple and is the only place
//! that knows the mapping.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::{Read, Write};

use image::{Rgba, RgbaImage};

use crate::file::BfntError;

use super::constants::{MAX_COLOR_BITS, MAX_IMPLICIT_PALETTE_BITS, PALETTE_ENTRY_SIZE};
use super::header::{Header, color_count};

/// Raw 3-byte palette entry as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PaletteEntry(pub [u8; PALETTE_ENTRY_SIZE]);

impl PaletteEntry {
	/// Creates a gray entry.
	pub const fn gray(value: u8) -> Self {
		Self([value, value, value])
	}

	/// Converts the entry to a pixel with the given alpha.
	pub const fn to_rgba(self, alpha: u8) -> Rgba<u8> {
		let [c0, c1, c2] = self.0;
		Rgba([c0, c2, c1, alpha])
	}

	/// Converts a pixel to its stored form. Alpha is dropped.
	pub const fn from_rgba(pixel: Rgba<u8>) -> Self {
		let [r, g, b, _] = pixel.0;
		Self([r, b, g])
	}
}

impl fmt::Display for PaletteEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let Rgba([r, g, b, _]) = self.to_rgba(0xFF);
		write!(f, "#{r:02X}{g:02X}{b:02X}")
	}
}

/// Decoding palette, indexed by the values of the pixel stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
	entries: Vec<PaletteEntry>,
}

impl Palette {
	/// Creates a palette from entries.
	pub fn new(entries: Vec<PaletteEntry>) -> Self {
		Self {
			entries,
		}
	}

	/// Creates an evenly spaced grayscale ramp from black to white.
	///
	/// A `color_count` below 2 yields a single black entry.
	pub fn grayscale(color_count: usize) -> Self {
		if color_count < 2 {
			return Self::new(vec![PaletteEntry::gray(0)]);
		}

		let step = 255.0 / (color_count - 1) as f64;
		let entries =
			(0..color_count).map(|i| PaletteEntry::gray((step * i as f64).round() as u8)).collect();
		Self::new(entries)
	}

	/// Reads `color_count` stored entries.
	pub fn from_reader<R: Read>(reader: &mut R, color_count: usize) -> Result<Self, BfntError> {
		let mut raw = vec![0u8; color_count * PALETTE_ENTRY_SIZE];
		reader.read_exact(&mut raw)?;

		let entries =
			raw.chunks_exact(PALETTE_ENTRY_SIZE).map(|c| PaletteEntry([c[0], c[1], c[2]])).collect();
		Ok(Self::new(entries))
	}

	/// Builds the palette a header calls for: the stored palette when present,
	/// otherwise a grayscale ramp.
	///
	/// # Errors
	///
	/// Returns [`BfntError::UnsupportedPalette`] when no palette is stored and
	/// the header implies more than 256 colors.
	pub fn for_header<R: Read>(header: &Header, reader: &mut R) -> Result<Self, BfntError> {
		let count = header.color_count();
		if header.has_palette() {
			return Self::from_reader(reader, count as usize);
		}

		if header.color_bits() > MAX_IMPLICIT_PALETTE_BITS {
			return Err(BfntError::UnsupportedPalette {
				color_bits: header.color_bits(),
				color_count: count,
			});
		}

		Ok(Self::grayscale(count as usize))
	}

	/// Returns the entry at `index`.
	#[inline]
	pub fn get(&self, index: u32) -> Option<PaletteEntry> {
		self.entries.get(index as usize).copied()
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if the palette has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the entries.
	pub fn entries(&self) -> &[PaletteEntry] {
		&self.entries
	}

	/// Writes the palette padded with zero entries up to `color_count`.
	pub fn write<W: Write>(&self, writer: &mut W, color_count: usize) -> Result<(), BfntError> {
		let mut raw = Vec::with_capacity(color_count.max(self.len()) * PALETTE_ENTRY_SIZE);
		for entry in &self.entries {
			raw.extend_from_slice(&entry.0);
		}
		raw.resize(color_count.max(self.len()) * PALETTE_ENTRY_SIZE, 0);
		writer.write_all(&raw)?;
		Ok(())
	}
}

/// Returns the packed value used to order colors: red in the low byte,
/// alpha in the high byte.
#[inline]
pub const fn packed_rgba(pixel: Rgba<u8>) -> u32 {
	u32::from_le_bytes(pixel.0)
}

/// Returns the smallest color bits value whose color count holds `count`
/// colors, or `None` when more than 2^24 colors are needed.
pub fn select_color_bits(count: usize) -> Option<u8> {
	(0..=MAX_COLOR_BITS).find(|&bits| color_count(bits) as usize >= count)
}

/// Distinct colors of an image, indexed in ascending packed RGBA order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorTable {
	indices: BTreeMap<u32, u32>,
	transparent: BTreeSet<u32>,
}

impl ColorTable {
	/// Collects the colors of `image`, scanning rows top to bottom.
	pub fn from_image(image: &RgbaImage) -> Self {
		let mut indices = BTreeMap::new();
		for pixel in image.pixels() {
			indices.entry(packed_rgba(*pixel)).or_insert(0);
		}

		let mut transparent = BTreeSet::new();
		for (index, (packed, slot)) in indices.iter_mut().enumerate() {
			*slot = index as u32;
			if *packed >> 24 == 0 {
				transparent.insert(index as u32);
			}
		}

		Self {
			indices,
			transparent,
		}
	}

	/// Returns the number of distinct colors.
	pub fn len(&self) -> usize {
		self.indices.len()
	}

	/// Returns `true` if no colors were collected.
	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}

	/// Returns the palette index assigned to `pixel`.
	#[inline]
	pub fn index_of(&self, pixel: Rgba<u8>) -> Option<u32> {
		self.indices.get(&packed_rgba(pixel)).copied()
	}

	/// Returns the colors in index order.
	pub fn colors(&self) -> impl Iterator<Item = Rgba<u8>> + '_ {
		self.indices.keys().map(|packed| Rgba(packed.to_le_bytes()))
	}

	/// Returns the indices of colors with zero alpha.
	pub fn transparent_candidates(&self) -> &BTreeSet<u32> {
		&self.transparent
	}

	/// Returns the smallest color bits value able to index every color.
	pub fn color_bits(&self) -> Result<u8, BfntError> {
		select_color_bits(self.len()).ok_or(BfntError::TooManyColors {
			count: self.len(),
			max: color_count(MAX_COLOR_BITS) as usize,
		})
	}

	/// Converts the table to a stored palette.
	pub fn to_palette(&self) -> Palette {
		Palette::new(self.colors().map(PaletteEntry::from_rgba).collect())
	}
}
