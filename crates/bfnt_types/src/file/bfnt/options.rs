//! Decode and encode options.
//!
//! Both structs deserialize with every field optional, so a configuration
//! file only needs to name the values it changes.
//!
//! # Examples
//!
//! ```
//! use bfnt_types::file::bfnt::{DecodeOptions, EncodeOptions};
//!
//! let decode = DecodeOptions::new(32);
//! assert_eq!(decode.columns, 32);
//!
//! let encode = EncodeOptions::half_width().with_palette(false);
//! assert_eq!((encode.glyph_width, encode.glyph_height), (8, 16));
//! assert!(!encode.include_palette);
//! ```

use serde::{Deserialize, Serialize};

/// Glyphs per row used when the caller does not choose one.
pub const DEFAULT_COLUMNS: u32 = 16;

/// Options for decoding a BFNT stream to a composite image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
	/// Number of glyphs per row of the output image
	pub columns: u32,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			columns: DEFAULT_COLUMNS,
		}
	}
}

impl DecodeOptions {
	/// Creates options laying out `columns` glyphs per row.
	pub fn new(columns: u32) -> Self {
		Self {
			columns,
		}
	}
}

/// Options for encoding a composite image.
///
/// # Presets
///
/// - `default()`: 16x16 glyphs starting at code 0
/// - `half_width()`: 8x16 glyphs starting at code 0
/// - `ascii()`: 8x16 glyphs starting at the space character (0x20)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
	/// Glyph width in pixels
	pub glyph_width: u16,
	/// Glyph height in pixels
	pub glyph_height: u16,
	/// Code of the top-left glyph
	pub start_code: u16,
	/// Store the palette in the file instead of relying on a grayscale ramp
	pub include_palette: bool,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self {
			glyph_width: 16,
			glyph_height: 16,
			start_code: 0,
			include_palette: true,
		}
	}
}

impl EncodeOptions {
	/// Creates options for `glyph_width`x`glyph_height` glyphs with the
	/// remaining fields at their defaults.
	pub fn new(glyph_width: u16, glyph_height: u16) -> Self {
		Self {
			glyph_width,
			glyph_height,
			..Self::default()
		}
	}

	/// Half-width glyphs, 8x16.
	pub fn half_width() -> Self {
		Self::new(8, 16)
	}

	/// Half-width glyphs covering printable ASCII from 0x20.
	pub fn ascii() -> Self {
		Self::half_width().with_start_code(0x20)
	}

	/// Sets the code of the top-left glyph.
	pub fn with_start_code(mut self, start_code: u16) -> Self {
		self.start_code = start_code;
		self
	}

	/// Sets whether the palette is stored.
	pub fn with_palette(mut self, include_palette: bool) -> Self {
		self.include_palette = include_palette;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		assert_eq!(DecodeOptions::default().columns, 16);

		let options = EncodeOptions::default();
		assert_eq!(options.glyph_width, 16);
		assert_eq!(options.glyph_height, 16);
		assert_eq!(options.start_code, 0);
		assert!(options.include_palette);
	}

	#[test]
	fn test_presets() {
		assert_eq!(EncodeOptions::ascii().start_code, 0x20);
		assert_eq!(EncodeOptions::ascii().glyph_width, 8);
		assert_eq!(EncodeOptions::new(24, 24).with_palette(false), EncodeOptions {
			glyph_width: 24,
			glyph_height: 24,
			start_code: 0,
			include_palette: false,
		});
	}

	#[test]
	fn test_partial_deserialize() {
		let options: EncodeOptions = serde_json::from_str(r#"{"glyph_width": 8}"#).unwrap();
		assert_eq!(options, EncodeOptions {
			glyph_width: 8,
			..EncodeOptions::default()
		});

		let options: DecodeOptions = serde_json::from_str("{}").unwrap();
		assert_eq!(options, DecodeOptions::default());
	}
}
