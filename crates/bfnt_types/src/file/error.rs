//! Error types for BFNT parsing and serialization.

use thiserror::Error;

/// Errors that can occur when decoding or encoding BFNT files
#[derive(Debug, Error)]
pub enum BfntError {
	/// The leading signature bytes are not `BFNT\x1A`
	#[error("Not a BFNT stream: signature {actual:02X?}")]
	FormatMismatch {
		/// Signature bytes actually read
		actual: [u8; 5],
	},

	/// Color bits field outside 0..=23
	#[error("Invalid color bits: {0} (maximum 23)")]
	InvalidColorBits(u8),

	/// No stored palette and more than 256 implied colors
	#[error(
		"Unsupported palette: {color_count} colors (color bits {color_bits}) without stored palette data"
	)]
	UnsupportedPalette {
		/// Color bits field of the header
		color_bits: u8,
		/// Implied color count
		color_count: u32,
	},

	/// Code range is empty or does not fit the 16-bit header fields
	#[error("Invalid code range: {start_code}..={end_code}")]
	InvalidRange {
		/// First code of the range
		start_code: u32,
		/// Last code of the range
		end_code: u32,
	},

	/// Glyph or grid geometry that cannot produce a canvas
	#[error("Invalid geometry: {reason}")]
	InvalidGeometry {
		/// What is wrong with the geometry
		reason: &'static str,
	},

	/// Canvas size is not a whole number of glyphs
	#[error(
		"Canvas {width}x{height} is not divisible by glyph size {glyph_width}x{glyph_height}; use split export"
	)]
	NotTileAligned {
		/// Canvas width in pixels
		width: u32,
		/// Canvas height in pixels
		height: u32,
		/// Glyph width in pixels
		glyph_width: u16,
		/// Glyph height in pixels
		glyph_height: u16,
	},

	/// Pixel stream references a palette entry that does not exist
	#[error("Palette index {index} out of range (palette size: {len})")]
	PaletteIndexOutOfRange {
		/// Index read from the pixel stream
		index: u32,
		/// Number of palette entries
		len: usize,
	},

	/// Image holds more distinct colors than 24-bit indices can address
	#[error("Too many colors: {count} distinct colors (maximum {max})")]
	TooManyColors {
		/// Distinct colors found in the image
		count: usize,
		/// Largest supported palette
		max: usize,
	},

	/// Extension record whose size cannot hold its own framing
	#[error("Malformed extension record: hdrSize {hdr_size}")]
	MalformedExtension {
		/// Offending record size
		hdr_size: i16,
	},

	/// Extension payload too long for the 16-bit record size
	#[error("Extension record 0x{id:02X} too large: {len} payload bytes")]
	ExtensionTooLarge {
		/// Record id
		id: u8,
		/// Payload length in bytes
		len: usize,
	},

	/// A pixel color was not collected into the palette
	#[error("Color {0:#010X} missing from palette")]
	ColorNotInPalette(u32),

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl BfntError {
	/// Creates an `InvalidGeometry` error.
	pub fn invalid_geometry(reason: &'static str) -> Self {
		Self::InvalidGeometry {
			reason,
		}
	}

	/// Returns `true` when the stream simply is not a BFNT file.
	pub fn is_format_mismatch(&self) -> bool {
		matches!(self, Self::FormatMismatch { .. })
	}
}
