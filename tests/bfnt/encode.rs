//! Encoding through the public API

use std::io::Cursor;

use bfnt_rs::file::bfnt::{Encoder, Header};
use bfnt_rs::prelude::*;
use image::{Rgba, RgbaImage};

use crate::fixtures::three_glyph_font;

fn gradient(width: u32, height: u32) -> RgbaImage {
	RgbaImage::from_fn(width, height, |x, y| Rgba([(x * 4) as u8, (y * 4) as u8, ((x + y) % 7) as u8, 255]))
}

#[test_log::test]
fn test_sheet_round_trip() {
	let image = gradient(64, 32);
	let options = EncodeOptions::new(16, 16);
	let bytes = encode(&image, &options).unwrap();

	let (decoded, metadata) = decode(Cursor::new(bytes), &DecodeOptions::new(4)).unwrap();
	assert_eq!(decoded, image);
	assert_eq!((metadata.start_code, metadata.end_code), (0, 7));
	assert!(metadata.has_palette);
}

#[test_log::test]
fn test_encoder_is_deterministic() {
	let image = gradient(32, 32);
	let a = encode(&image, &EncodeOptions::half_width()).unwrap();
	let b = encode(&image, &EncodeOptions::half_width()).unwrap();
	assert_eq!(a, b);
}

#[test_log::test]
fn test_reencode_decoded_font() {
	let (image, first) = decode(Cursor::new(three_glyph_font()), &DecodeOptions::new(1)).unwrap();

	// the decoded sheet starts at row 0x41 with one glyph per row
	let options = EncodeOptions::new(8, 8).with_start_code(first.start_code);
	let encoder = Encoder::new(&image, &options).unwrap();
	assert_eq!(encoder.grid().end_code(), first.end_code);
	assert_eq!(encoder.transparent_candidates().len(), 1);

	let bytes = encoder.to_bytes().unwrap();
	let header = Header::from_bytes(&bytes).unwrap();
	assert_eq!(header.version().to_byte(), 0x16);
	assert_eq!(header.raw_font_name(), &[0; 8]);
	assert_eq!(header.raw_timestamp(), 0);
	assert!(header.extensions().is_empty());

	let (again, second) = decode(Cursor::new(bytes), &DecodeOptions::new(1)).unwrap();
	assert_eq!(second.author, None);
	// colors survive, alpha becomes opaque
	for (before, after) in image.pixels().zip(again.pixels()) {
		assert_eq!(before.0[..3], after.0[..3]);
		assert_eq!(after.0[3], 255);
	}
}

#[test_log::test]
fn test_composite_requires_whole_glyphs() {
	let image = gradient(30, 16);
	let err = encode(&image, &EncodeOptions::new(16, 16)).unwrap_err();
	assert!(matches!(err, BfntError::NotTileAligned { width: 30, .. }));

	let parts = encode_split(&image, &EncodeOptions::new(16, 16)).unwrap();
	assert_eq!(parts.len(), 2);
	let second = identify(Cursor::new(&parts[1].1)).unwrap();
	assert_eq!((second.glyph_width, second.glyph_height), (14, 16));
}

#[test_log::test]
fn test_options_from_json() {
	let options: EncodeOptions =
		serde_json::from_str(r#"{"glyph_width": 8, "start_code": 32, "include_palette": false}"#).unwrap();
	assert_eq!(options, EncodeOptions::ascii().with_palette(false));
}
