//! Pixel index packing.
//!
//! The width of one palette index depends on the color bits:
//!
//! | color bits | colors       | layout                                   |
//! |------------|--------------|------------------------------------------|
//! | 0          | 2            | 1 bit, 8 pixels per byte, MSB first      |
//! | 1          | 4            | 2 bits, 4 pixels per byte, MSB first     |
//! | 2, 3       | 8, 16        | 4 bits, 2 pixels per byte, high nibble first |
//! | 4 - 7      | 32 - 256     | 1 byte                                   |
//! | 8 - 15     | 512 - 65536  | 2 bytes, big-endian                      |
//! | 16 - 23    | up to 2^24   | 3 bytes, big-endian                      |
//!
//! 8 colors still use a whole nibble per pixel, the top bit is always 0:
//!
//! ```text
//! MSB                           LSB
//! +---+---+---+---+---+---+---+---+
//! |0x0|   X + 0   |0x0|   X + 1   |
//! +---+---+---+---+---+---+---+---+
//! ```
//!
//! Sub-byte layouts form one continuous bit stream over all glyphs; a glyph
//! does not start on a byte boundary unless the previous one ended there.

use super::constants::MAX_COLOR_BITS;

/// Storage layout of one pixel index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLayout {
	/// 1 bit per pixel
	Bit,
	/// 2 bits per pixel
	Crumb,
	/// 4 bits per pixel
	Nibble,
	/// 1 byte per pixel
	Byte,
	/// 2 bytes per pixel, big-endian
	Word,
	/// 3 bytes per pixel, big-endian
	Triple,
}

impl PixelLayout {
	/// Returns the layout for a color bits value, `None` above 23.
	pub const fn from_color_bits(color_bits: u8) -> Option<Self> {
		let layout = match color_bits {
			0 => Self::Bit,
			1 => Self::Crumb,
			2 | 3 => Self::Nibble,
			4..=7 => Self::Byte,
			8..=15 => Self::Word,
			16..=MAX_COLOR_BITS => Self::Triple,
			_ => return None,
		};
		Some(layout)
	}

	/// Returns the number of bits one index occupies.
	pub const fn bits_per_pixel(self) -> usize {
		match self {
			Self::Bit => 1,
			Self::Crumb => 2,
			Self::Nibble => 4,
			Self::Byte => 8,
			Self::Word => 16,
			Self::Triple => 24,
		}
	}

	/// Returns how many pixels share one byte, `None` for whole-byte layouts.
	pub const fn pixels_per_byte(self) -> Option<usize> {
		match self {
			Self::Bit => Some(8),
			Self::Crumb => Some(4),
			Self::Nibble => Some(2),
			Self::Byte | Self::Word | Self::Triple => None,
		}
	}

	/// Returns the number of bytes `pixel_count` indices occupy, including a
	/// partially filled trailing byte.
	pub const fn stream_len(self, pixel_count: usize) -> usize {
		(pixel_count * self.bits_per_pixel()).div_ceil(8)
	}
}

/// Reads pixel indices from a packed stream.
#[derive(Debug)]
pub struct BitUnpacker<'a> {
	data: &'a [u8],
	layout: PixelLayout,
	bit_pos: usize,
}

impl<'a> BitUnpacker<'a> {
	/// Creates an unpacker over `data`.
	pub fn new(data: &'a [u8], layout: PixelLayout) -> Self {
		Self {
			data,
			layout,
			bit_pos: 0,
		}
	}

	/// Returns the number of bytes consumed so far, counting a partially
	/// read byte.
	pub fn consumed(&self) -> usize {
		self.bit_pos.div_ceil(8)
	}
}

impl Iterator for BitUnpacker<'_> {
	type Item = u32;

	fn next(&mut self) -> Option<u32> {
		let bpp = self.layout.bits_per_pixel();
		let byte_pos = self.bit_pos / 8;

		let index = if bpp < 8 {
			let byte = *self.data.get(byte_pos)?;
			let shift = 8 - bpp - self.bit_pos % 8;
			let mask = (1u8 << bpp) - 1;
			u32::from((byte >> shift) & mask)
		} else {
			let bytes = self.data.get(byte_pos..byte_pos + bpp / 8)?;
			bytes.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b))
		};

		self.bit_pos += bpp;
		Some(index)
	}
}

/// Writes pixel indices into a packed stream.
#[derive(Debug)]
pub struct BitPacker {
	data: Vec<u8>,
	layout: PixelLayout,
	bit_buffer: u8,
	bits_in_buffer: usize,
}

impl BitPacker {
	/// Creates a packer with room for `pixel_count` indices.
	pub fn with_capacity(layout: PixelLayout, pixel_count: usize) -> Self {
		Self {
			data: Vec::with_capacity(layout.stream_len(pixel_count)),
			layout,
			bit_buffer: 0,
			bits_in_buffer: 0,
		}
	}

	/// Appends one index. Bits above the layout width are dropped.
	pub fn push(&mut self, index: u32) {
		let bpp = self.layout.bits_per_pixel();

		if bpp < 8 {
			let mask = (1u8 << bpp) - 1;
			let shift = 8 - bpp - self.bits_in_buffer;
			self.bit_buffer |= (index as u8 & mask) << shift;
			self.bits_in_buffer += bpp;

			if self.bits_in_buffer == 8 {
				self.data.push(self.bit_buffer);
				self.bit_buffer = 0;
				self.bits_in_buffer = 0;
			}
		} else {
			let bytes = index.to_be_bytes();
			self.data.extend_from_slice(&bytes[4 - bpp / 8..]);
		}
	}

	/// Flushes a partially filled byte and returns the stream.
	pub fn finish(mut self) -> Vec<u8> {
		if self.bits_in_buffer > 0 {
			self.data.push(self.bit_buffer);
		}
		self.data
	}
}
