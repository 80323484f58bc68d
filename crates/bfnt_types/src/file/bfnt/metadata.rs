//! Decoded header fields handed back to callers.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::file::BfntError;

use super::canvas::TileGrid;
use super::constants::FONT_NAME_SIZE;
use super::header::{Header, Version};

/// Header fields of a BFNT stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
	/// Format version
	pub version: Version,
	/// Whether palette data is stored in the file
	pub has_palette: bool,
	/// Color bits field
	pub color_bits: u8,
	/// Number of colors, `2^(color_bits + 1)`
	pub color_count: u32,
	/// Glyph width in pixels
	pub glyph_width: u16,
	/// Glyph height in pixels
	pub glyph_height: u16,
	/// First code
	pub start_code: u16,
	/// Last code (inclusive)
	pub end_code: u16,
	/// Font name decoded from Shift-JIS
	pub font_name: String,
	/// Font name field as stored
	pub raw_font_name: [u8; FONT_NAME_SIZE],
	/// Creation time, `None` when the field is zero
	pub timestamp: Option<DateTime<Utc>>,
	/// Extended font name record
	pub ext_font_name: Option<String>,
	/// Author record
	pub author: Option<String>,
	/// Comment record
	pub comment: Option<String>,
	/// Palette indices rendered fully transparent
	pub transparent_indices: BTreeSet<u32>,
}

impl Metadata {
	/// Returns the number of glyphs in the code range.
	pub fn glyph_count(&self) -> usize {
		if self.end_code < self.start_code {
			return 0;
		}
		usize::from(self.end_code - self.start_code) + 1
	}

	/// Returns the size of the composite image a decode with `columns`
	/// glyphs per row produces.
	pub fn canvas_size(&self, columns: u32) -> Result<(u32, u32), BfntError> {
		let grid = TileGrid::new(
			columns,
			self.glyph_width,
			self.glyph_height,
			self.start_code,
			self.end_code,
		)?;
		Ok(grid.canvas_size())
	}
}

impl From<&Header> for Metadata {
	fn from(header: &Header) -> Self {
		Self {
			version: header.version(),
			has_palette: header.has_palette(),
			color_bits: header.color_bits(),
			color_count: header.color_count(),
			glyph_width: header.glyph_width(),
			glyph_height: header.glyph_height(),
			start_code: header.start_code(),
			end_code: header.end_code(),
			font_name: header.font_name(),
			raw_font_name: *header.raw_font_name(),
			timestamp: header.timestamp(),
			ext_font_name: header.ext_font_name().map(str::to_owned),
			author: header.author().map(str::to_owned),
			comment: header.comment().map(str::to_owned),
			transparent_indices: header.transparent_indices(),
		}
	}
}

impl fmt::Display for Metadata {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} colors {}x{} {}-{} palette: {}",
			self.color_count,
			self.glyph_width,
			self.glyph_height,
			self.start_code,
			self.end_code,
			if self.has_palette {
				"yes"
			} else {
				"no"
			}
		)
	}
}
