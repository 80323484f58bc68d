//! BFNT encoder.
//!
//! The encoder collects the distinct colors of the image, picks the smallest
//! color depth that indexes all of them and writes the glyphs in code order.
//! Extension records are never written; transparent colors are reported by
//! [`Encoder::transparent_candidates`] only.

use std::collections::BTreeSet;
use std::io::Write;

use image::{RgbaImage, imageops};
use log::debug;

use crate::file::BfntError;

use super::canvas::{TileGrid, split_cells};
use super::constants::{ENCODER_VERSION, HEADER_SIZE, MAX_IMPLICIT_PALETTE_BITS, PALETTE_ENTRY_SIZE};
use super::header::{Header, Version, color_count};
use super::layout::{BitPacker, PixelLayout};
use super::options::EncodeOptions;
use super::palette::{ColorTable, Palette, packed_rgba};

/// An image validated and prepared for encoding.
#[derive(Debug)]
pub struct Encoder<'a> {
	image: &'a RgbaImage,
	options: EncodeOptions,
	grid: TileGrid,
	colors: ColorTable,
	color_bits: u8,
}

impl<'a> Encoder<'a> {
	/// Prepares `image` for encoding.
	///
	/// # Errors
	///
	/// - [`BfntError::NotTileAligned`] when the image is not a whole number of glyphs
	/// - [`BfntError::InvalidRange`] when the last code does not fit in 16 bits
	/// - [`BfntError::TooManyColors`] above 2^24 distinct colors
	/// - [`BfntError::UnsupportedPalette`] when more than 256 colors are needed
	///   and the palette is not stored
	pub fn new(image: &'a RgbaImage, options: &EncodeOptions) -> Result<Self, BfntError> {
		let grid = TileGrid::for_canvas(
			image.width(),
			image.height(),
			options.glyph_width,
			options.glyph_height,
			options.start_code,
		)?;

		let colors = ColorTable::from_image(image);
		let color_bits = colors.color_bits()?;
		if !options.include_palette && color_bits > MAX_IMPLICIT_PALETTE_BITS {
			return Err(BfntError::UnsupportedPalette {
				color_bits,
				color_count: color_count(color_bits),
			});
		}

		debug!(
			"Encoding {}x{} image: {} colors, color bits {color_bits}, codes {}..={}",
			image.width(),
			image.height(),
			colors.len(),
			grid.start_code(),
			grid.end_code()
		);

		Ok(Self {
			image,
			options: *options,
			grid,
			colors,
			color_bits,
		})
	}

	/// Returns the tile grid the glyphs are read from.
	pub fn grid(&self) -> &TileGrid {
		&self.grid
	}

	/// Returns the selected color bits.
	pub fn color_bits(&self) -> u8 {
		self.color_bits
	}

	/// Returns the palette built from the image colors.
	pub fn palette(&self) -> Palette {
		self.colors.to_palette()
	}

	/// Returns the palette indices of fully transparent colors.
	///
	/// These are not written to the output.
	pub fn transparent_candidates(&self) -> &BTreeSet<u32> {
		self.colors.transparent_candidates()
	}

	/// Returns the header that will be written.
	pub fn header(&self) -> Header {
		Header::new(
			self.grid.glyph_width(),
			self.grid.glyph_height(),
			self.grid.start_code(),
			self.grid.end_code(),
			self.color_bits,
			self.options.include_palette,
		)
		.with_version(Version::from_byte(ENCODER_VERSION))
	}

	/// Encodes to a byte vector.
	pub fn to_bytes(&self) -> Result<Vec<u8>, BfntError> {
		let layout = PixelLayout::from_color_bits(self.color_bits)
			.ok_or(BfntError::InvalidColorBits(self.color_bits))?;
		let (gw, gh) = (u32::from(self.grid.glyph_width()), u32::from(self.grid.glyph_height()));
		let pixel_count = self.grid.glyph_count() * gw as usize * gh as usize;

		let color_count = color_count(self.color_bits) as usize;
		let palette_len = if self.options.include_palette {
			color_count * PALETTE_ENTRY_SIZE
		} else {
			0
		};

		let mut bytes = Vec::with_capacity(HEADER_SIZE + palette_len + layout.stream_len(pixel_count));
		self.header().write(&mut bytes)?;
		if self.options.include_palette {
			self.palette().write(&mut bytes, color_count)?;
		}

		let mut packer = BitPacker::with_capacity(layout, pixel_count);
		for code in self.grid.codes() {
			let (x0, y0) = self.grid.origin(code);
			for y in y0..y0 + gh {
				for x in x0..x0 + gw {
					let pixel = *self.image.get_pixel(x, y);
					let index = self
						.colors
						.index_of(pixel)
						.ok_or(BfntError::ColorNotInPalette(packed_rgba(pixel)))?;
					packer.push(index);
				}
			}
		}
		bytes.extend_from_slice(&packer.finish());

		Ok(bytes)
	}

	/// Encodes into `writer`. Nothing is written if encoding fails.
	pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), BfntError> {
		let bytes = self.to_bytes()?;
		writer.write_all(&bytes)?;
		Ok(())
	}
}

/// Encodes a composite image as one BFNT stream.
///
/// # Examples
///
/// ```
/// use bfnt_types::file::bfnt::{self, EncodeOptions};
/// use image::{Rgba, RgbaImage};
///
/// let image = RgbaImage::from_pixel(32, 16, Rgba([255, 255, 255, 255]));
/// let bytes = bfnt::encode(&image, &EncodeOptions::default()).unwrap();
/// assert!(bfnt::is_bfnt(&bytes));
/// ```
pub fn encode(image: &RgbaImage, options: &EncodeOptions) -> Result<Vec<u8>, BfntError> {
	Encoder::new(image, options)?.to_bytes()
}

/// Encodes every glyph cell of `image` as its own single-glyph stream.
///
/// Cells are taken in row-major order and numbered from `options.start_code`.
/// Edge cells are cropped to the image, so the image does not need to be a
/// whole number of glyphs.
pub fn encode_split(image: &RgbaImage, options: &EncodeOptions) -> Result<Vec<(u16, Vec<u8>)>, BfntError> {
	if options.glyph_width == 0 || options.glyph_height == 0 {
		return Err(BfntError::invalid_geometry("glyph size must be non-zero"));
	}
	let cells = split_cells(image.width(), image.height(), options.glyph_width, options.glyph_height);
	if cells.is_empty() {
		return Err(BfntError::invalid_geometry("image is empty"));
	}

	let last = usize::from(options.start_code) + cells.len() - 1;
	if last > usize::from(u16::MAX) {
		return Err(BfntError::InvalidRange {
			start_code: u32::from(options.start_code),
			end_code: u32::try_from(last).unwrap_or(u32::MAX),
		});
	}

	debug!("Splitting {}x{} image into {} glyphs", image.width(), image.height(), cells.len());

	cells
		.iter()
		.map(|cell| {
			// bounded by the range check above
			let code = options.start_code + cell.index as u16;
			let glyph = imageops::crop_imm(image, cell.x, cell.y, cell.width, cell.height).to_image();
			let cell_options = EncodeOptions {
				// cells are never larger than the requested glyph size
				glyph_width: cell.width as u16,
				glyph_height: cell.height as u16,
				start_code: code,
				include_palette: options.include_palette,
			};
			Ok((code, encode(&glyph, &cell_options)?))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use image::Rgba;

	use super::*;

	fn checker(width: u32, height: u32) -> RgbaImage {
		RgbaImage::from_fn(width, height, |x, y| {
			if (x + y) % 2 == 0 {
				Rgba([255, 255, 255, 255])
			} else {
				Rgba([0, 0, 0, 255])
			}
		})
	}

	#[test]
	fn test_encode_two_colors_layout() {
		let image = checker(8, 2);
		let bytes = encode(&image, &EncodeOptions::new(8, 2)).unwrap();

		let header = Header::from_bytes(&bytes).unwrap();
		assert_eq!(header.color_bits(), 0);
		assert!(header.has_palette());
		assert_eq!(header.version().to_byte(), ENCODER_VERSION);
		assert_eq!((header.start_code(), header.end_code()), (0, 0));
		assert!(header.extensions().is_empty());

		// black (packed 0xFF000000) sorts before white (0xFFFFFFFF)
		assert_eq!(&bytes[HEADER_SIZE..HEADER_SIZE + 6], &[0, 0, 0, 255, 255, 255]);
		// row 0 starts white, row 1 starts black
		assert_eq!(&bytes[HEADER_SIZE + 6..], &[0b1010_1010, 0b0101_0101]);
	}

	#[test]
	fn test_palette_written_rbg() {
		let image = RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 255]));
		let bytes = encode(&image, &EncodeOptions::new(1, 1)).unwrap();
		// one color still takes a 2-entry palette
		assert_eq!(&bytes[HEADER_SIZE..HEADER_SIZE + 6], &[1, 3, 2, 0, 0, 0]);
		assert_eq!(bytes.len(), HEADER_SIZE + 6 + 1);
	}

	#[test]
	fn test_encode_without_palette() {
		let image = checker(4, 4);
		let bytes = encode(&image, &EncodeOptions::new(4, 4).with_palette(false)).unwrap();
		assert_eq!(bytes[5], 0x00);
		assert_eq!(bytes.len(), HEADER_SIZE + 2);
	}

	#[test]
	fn test_transparent_candidates() {
		let mut image = checker(2, 2);
		image.put_pixel(0, 0, Rgba([9, 9, 9, 0]));

		let encoder = Encoder::new(&image, &EncodeOptions::new(2, 2)).unwrap();
		// packed 0x00090909 is the smallest value
		assert_eq!(encoder.transparent_candidates(), &BTreeSet::from([0]));
		assert_eq!(encoder.color_bits(), 1);

		let header = Header::from_bytes(&encoder.to_bytes().unwrap()).unwrap();
		assert!(header.transparent_indices().is_empty());
	}

	#[test]
	fn test_not_tile_aligned() {
		let image = checker(10, 8);
		let result = encode(&image, &EncodeOptions::new(8, 8));
		assert!(matches!(result, Err(BfntError::NotTileAligned { .. })));
	}

	#[test]
	fn test_too_many_colors_without_palette() {
		let image = RgbaImage::from_fn(32, 16, |x, y| Rgba([x as u8, y as u8, 0, 255]));
		let result = encode(&image, &EncodeOptions::new(16, 16).with_palette(false));
		assert!(matches!(
			result,
			Err(BfntError::UnsupportedPalette {
				color_bits: 8,
				color_count: 512
			})
		));

		let bytes = encode(&image, &EncodeOptions::new(16, 16)).unwrap();
		assert_eq!(bytes[5], 0x88);
	}

	#[test]
	fn test_write_nothing_on_error() {
		let image = checker(3, 3);
		let mut out = Vec::new();
		let result = Encoder::new(&image, &EncodeOptions::new(1, 1).with_start_code(0xFFFF))
			.and_then(|encoder| encoder.write(&mut out));
		assert!(matches!(result, Err(BfntError::InvalidRange { .. })));
		assert!(out.is_empty());
	}

	#[test]
	fn test_encode_split_codes_and_sizes() {
		let image = checker(20, 10);
		let parts = encode_split(&image, &EncodeOptions::new(8, 8).with_start_code(0x41)).unwrap();

		let codes: Vec<u16> = parts.iter().map(|(code, _)| *code).collect();
		assert_eq!(codes, (0x41..=0x46).collect::<Vec<u16>>());

		let last = Header::from_bytes(&parts[5].1).unwrap();
		assert_eq!((last.glyph_width(), last.glyph_height()), (4, 2));
		assert_eq!((last.start_code(), last.end_code()), (0x46, 0x46));
	}

	#[test]
	fn test_encode_split_range_overflow() {
		let image = checker(4, 1);
		let result = encode_split(&image, &EncodeOptions::new(1, 1).with_start_code(0xFFFE));
		assert!(matches!(
			result,
			Err(BfntError::InvalidRange {
				start_code: 0xFFFE,
				end_code: 0x10001
			})
		));
	}
}
