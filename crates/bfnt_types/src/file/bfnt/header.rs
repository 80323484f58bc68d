//! BFNT header support.
//!
//! ```text
//!          +00 +01 +02 +03 +04 +05 +06 +07 +08 +09 +0A +0B +0C +0D +0E +0F
//!          +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//! 00000000 |'B'|'F'|'N'|'T'|x1a|col|ver|x00| Xdots | Ydots | START | END   |
//!          +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//! 00000010 |<-       font name           ->|<-   time    ->|extSize|hdrSize|
//!          +---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+---+
//! ```
//!
//! All multi-byte fields are little-endian. `col` holds the palette flag in
//! bit 7 and the color bits in bits 0-6.

use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::io::{Cursor, Read, Write};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::file::BfntError;

use super::constants::{
	COLOR_BITS_MASK, FONT_NAME_SIZE, HEADER_SIZE, MAGIC, MAX_COLOR_BITS, PALETTE_FLAG,
};
use super::extension::{self, Extension};

/// Format version, stored as one nibble pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Version {
	/// High nibble
	pub major: u8,
	/// Low nibble
	pub minor: u8,
}

impl Version {
	/// Splits a version byte into its nibbles.
	pub const fn from_byte(byte: u8) -> Self {
		Self {
			major: byte >> 4,
			minor: byte & 0x0F,
		}
	}

	/// Packs the version back into one byte.
	pub const fn to_byte(self) -> u8 {
		(self.major << 4) | (self.minor & 0x0F)
	}
}

impl Display for Version {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.major, self.minor)
	}
}

/// Returns the number of colors addressed by `color_bits`.
pub const fn color_count(color_bits: u8) -> u32 {
	1 << (color_bits as u32 + 1)
}

/// Header structure for BFNT files
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
	has_palette: bool,
	color_bits: u8,
	version: Version,
	glyph_width: u16,
	glyph_height: u16,
	start_code: u16,
	end_code: u16,
	font_name: [u8; FONT_NAME_SIZE],
	timestamp: u32,
	extensions: Vec<Extension>,
}

impl Header {
	/// Size of the fixed header in bytes
	pub const SIZE: usize = HEADER_SIZE;

	/// Creates a header for the given geometry and code range.
	///
	/// Font name and timestamp are zero and no extension records are attached.
	pub fn new(
		glyph_width: u16,
		glyph_height: u16,
		start_code: u16,
		end_code: u16,
		color_bits: u8,
		has_palette: bool,
	) -> Self {
		Self {
			has_palette,
			color_bits,
			version: Version::default(),
			glyph_width,
			glyph_height,
			start_code,
			end_code,
			font_name: [0; FONT_NAME_SIZE],
			timestamp: 0,
			extensions: Vec::new(),
		}
	}

	/// Sets the format version.
	pub fn with_version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	/// Sets the raw font name field.
	pub fn with_font_name(mut self, font_name: [u8; FONT_NAME_SIZE]) -> Self {
		self.font_name = font_name;
		self
	}

	/// Sets the timestamp in Unix seconds (0 clears it).
	pub fn with_timestamp(mut self, seconds: u32) -> Self {
		self.timestamp = seconds;
		self
	}

	/// Attaches extension records.
	pub fn with_extensions(mut self, extensions: Vec<Extension>) -> Self {
		self.extensions = extensions;
		self
	}

	/// Returns `true` when palette data follows the header.
	pub fn has_palette(&self) -> bool {
		self.has_palette
	}

	/// Returns the color bits field.
	pub fn color_bits(&self) -> u8 {
		self.color_bits
	}

	/// Returns the number of colors, `2^(color_bits + 1)`.
	pub fn color_count(&self) -> u32 {
		color_count(self.color_bits)
	}

	/// Returns the packed `col` byte.
	pub fn col(&self) -> u8 {
		let flag = if self.has_palette {
			PALETTE_FLAG
		} else {
			0
		};
		flag | (self.color_bits & COLOR_BITS_MASK)
	}

	/// Returns the format version.
	pub fn version(&self) -> Version {
		self.version
	}

	/// Returns the glyph width in pixels.
	pub fn glyph_width(&self) -> u16 {
		self.glyph_width
	}

	/// Returns the glyph height in pixels.
	pub fn glyph_height(&self) -> u16 {
		self.glyph_height
	}

	/// Returns the first code.
	pub fn start_code(&self) -> u16 {
		self.start_code
	}

	/// Returns the last code (inclusive).
	pub fn end_code(&self) -> u16 {
		self.end_code
	}

	/// Returns the number of glyphs in the code range, 0 when the range is
	/// inverted.
	pub fn glyph_count(&self) -> usize {
		if self.end_code < self.start_code {
			return 0;
		}
		usize::from(self.end_code - self.start_code) + 1
	}

	/// Returns the raw font name field.
	pub fn raw_font_name(&self) -> &[u8; FONT_NAME_SIZE] {
		&self.font_name
	}

	/// Returns the font name decoded from Shift-JIS.
	pub fn font_name(&self) -> String {
		extension::decode_text(&self.font_name)
	}

	/// Returns the raw timestamp field.
	pub fn raw_timestamp(&self) -> u32 {
		self.timestamp
	}

	/// Returns the creation time, if any.
	pub fn timestamp(&self) -> Option<DateTime<Utc>> {
		if self.timestamp == 0 {
			return None;
		}
		DateTime::from_timestamp(i64::from(self.timestamp), 0)
	}

	/// Returns all extension records in file order.
	pub fn extensions(&self) -> &[Extension] {
		&self.extensions
	}

	/// Returns the first extended font name record.
	pub fn ext_font_name(&self) -> Option<&str> {
		self.extensions.iter().find_map(|ext| match ext {
			Extension::ExtFontName(text) => Some(text.as_str()),
			_ => None,
		})
	}

	/// Returns the first author record.
	pub fn author(&self) -> Option<&str> {
		self.extensions.iter().find_map(|ext| match ext {
			Extension::Author(text) => Some(text.as_str()),
			_ => None,
		})
	}

	/// Returns the first comment record.
	pub fn comment(&self) -> Option<&str> {
		self.extensions.iter().find_map(|ext| match ext {
			Extension::Comment(text) => Some(text.as_str()),
			_ => None,
		})
	}

	/// Returns the palette indices rendered fully transparent.
	pub fn transparent_indices(&self) -> BTreeSet<u32> {
		self.extensions
			.iter()
			.filter_map(|ext| match ext {
				Extension::TransparentIndex(index) => Some(*index),
				_ => None,
			})
			.collect()
	}

	/// Returns the total size of the extension records, as stored in `extSize`.
	pub fn ext_size(&self) -> usize {
		self.extensions.iter().map(Extension::record_size).sum()
	}

	/// Parses a header, including its extension records, from a byte slice.
	pub fn from_bytes(data: &[u8]) -> Result<Self, BfntError> {
		let mut cursor = Cursor::new(data);
		Self::from_reader(&mut cursor)
	}

	/// Reads a header from any reader, leaving it positioned at the palette
	/// (or pixel data when no palette is stored).
	///
	/// # Errors
	///
	/// Returns [`BfntError::FormatMismatch`] when the signature is wrong, before
	/// reading anything past it.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, BfntError> {
		let mut prefix = Vec::with_capacity(MAGIC.len());
		reader.by_ref().take(MAGIC.len() as u64).read_to_end(&mut prefix)?;
		if prefix != MAGIC {
			let mut actual = [0u8; MAGIC.len()];
			actual[..prefix.len()].copy_from_slice(&prefix);
			return Err(BfntError::FormatMismatch {
				actual,
			});
		}

		let mut buf = [0u8; HEADER_SIZE - MAGIC.len()];
		reader.read_exact(&mut buf)?;

		let col = buf[0];
		let color_bits = col & COLOR_BITS_MASK;
		if color_bits > MAX_COLOR_BITS {
			return Err(BfntError::InvalidColorBits(color_bits));
		}

		let version = Version::from_byte(buf[1]);
		// buf[2] is reserved
		let glyph_width = u16::from_le_bytes([buf[3], buf[4]]);
		let glyph_height = u16::from_le_bytes([buf[5], buf[6]]);
		let start_code = u16::from_le_bytes([buf[7], buf[8]]);
		let end_code = u16::from_le_bytes([buf[9], buf[10]]);
		let mut font_name = [0u8; FONT_NAME_SIZE];
		font_name.copy_from_slice(&buf[11..19]);
		let timestamp = u32::from_le_bytes([buf[19], buf[20], buf[21], buf[22]]);
		let ext_size = i16::from_le_bytes([buf[23], buf[24]]);
		let hdr_size = i16::from_le_bytes([buf[25], buf[26]]);

		let extensions = if ext_size > 0 {
			extension::read_chain(reader, hdr_size)?
		} else {
			if hdr_size != 0 {
				debug!("extSize is {ext_size}, ignoring hdrSize {hdr_size}");
			}
			Vec::new()
		};

		let header = Self {
			has_palette: col & PALETTE_FLAG != 0,
			color_bits,
			version,
			glyph_width,
			glyph_height,
			start_code,
			end_code,
			font_name,
			timestamp,
			extensions,
		};
		header.warn_duplicates();
		debug!(
			"BFNT header: {}x{} codes {}..={} color bits {} palette {}",
			header.glyph_width,
			header.glyph_height,
			header.start_code,
			header.end_code,
			header.color_bits,
			header.has_palette
		);

		Ok(header)
	}

	/// Logs single-valued records that occur more than once. The first
	/// occurrence is the one reported by the accessors.
	fn warn_duplicates(&self) {
		let mut seen = BTreeSet::new();
		for ext in &self.extensions {
			match ext {
				Extension::ExtFontName(text) | Extension::Author(text) | Extension::Comment(text) => {
					if !seen.insert(ext.id()) {
						warn!("Duplicate extension record 0x{:02X} ignored: {text}", ext.id());
					}
				}
				Extension::Unknown {
					id,
					..
				} => warn!("Unknown extension record id 0x{id:02X} skipped"),
				Extension::TransparentIndex(_) => {}
			}
		}
	}

	/// Writes the header and its extension chain.
	pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), BfntError> {
		let ext_size = i16::try_from(self.ext_size()).map_err(|_| BfntError::ExtensionTooLarge {
			id: self.extensions.last().map_or(0, Extension::id),
			len: self.ext_size(),
		})?;

		writer.write_all(&MAGIC)?;
		writer.write_all(&[self.col(), self.version.to_byte(), 0])?;
		writer.write_all(&self.glyph_width.to_le_bytes())?;
		writer.write_all(&self.glyph_height.to_le_bytes())?;
		writer.write_all(&self.start_code.to_le_bytes())?;
		writer.write_all(&self.end_code.to_le_bytes())?;
		writer.write_all(&self.font_name)?;
		writer.write_all(&self.timestamp.to_le_bytes())?;
		writer.write_all(&ext_size.to_le_bytes())?;
		extension::write_chain(writer, &self.extensions)?;
		Ok(())
	}

	/// Converts the header to bytes.
	pub fn to_bytes(&self) -> Result<Vec<u8>, BfntError> {
		let mut bytes = Vec::with_capacity(HEADER_SIZE + self.ext_size());
		self.write(&mut bytes)?;
		Ok(bytes)
	}
}

impl Display for Header {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"BFNT File Header:\n\
			- Version: {}\n\
			- Colors: {} (color bits {})\n\
			- Palette: {}\n\
			- Glyph Size: {}x{} pixels\n\
			- Codes: {}..={}\n\
			- Font Name: {}\n\
			- Extension Records: {}",
			self.version,
			self.color_count(),
			self.color_bits,
			if self.has_palette {
				"stored"
			} else {
				"none"
			},
			self.glyph_width,
			self.glyph_height,
			self.start_code,
			self.end_code,
			self.font_name(),
			self.extensions.len(),
		)
	}
}
