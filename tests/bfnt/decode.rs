//! Decoding through the public API

use std::io::Cursor;

use bfnt_rs::prelude::*;
use image::Rgba;

use crate::fixtures::{font_with_noise, three_glyph_font};

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
const INK: Rgba<u8> = Rgba([0xFF, 0x80, 0x00, 0xFF]);

#[test_log::test]
fn test_identify_reports_every_record() {
	let metadata = identify(Cursor::new(three_glyph_font())).unwrap();

	assert_eq!(metadata.version.to_string(), "1.2");
	assert_eq!(metadata.font_name, "TESTFONT");
	assert_eq!(metadata.ext_font_name.as_deref(), Some("テスト"));
	assert_eq!(metadata.author.as_deref(), Some("bfnt-rs"));
	assert_eq!(metadata.comment.as_deref(), Some("three glyphs"));
	assert_eq!(
		metadata.timestamp.map(|t| t.to_rfc3339()).as_deref(),
		Some("2000-01-01T00:00:00+00:00")
	);
	assert!(metadata.transparent_indices.contains(&0));
	assert_eq!(metadata.to_string(), "2 colors 8x8 65-67 palette: yes");
}

#[test_log::test]
fn test_decode_places_codes_on_grid() {
	// 0x41 = 65: column 1 of row 4 with 16 columns
	let (image, metadata) = decode(Cursor::new(three_glyph_font()), &DecodeOptions::default()).unwrap();
	assert_eq!(image.dimensions(), metadata.canvas_size(16).unwrap());
	assert_eq!(image.dimensions(), (128, 8));

	// cell 0 holds no code
	assert!((0..8).all(|y| (0..8).all(|x| *image.get_pixel(x, y) == CLEAR)));

	// A is solid ink
	assert!((0..8).all(|y| (8..16).all(|x| *image.get_pixel(x, y) == INK)));

	// B has its diagonal on ink and the rest transparent
	for y in 0..8 {
		for x in 0..8 {
			let expected = if x == y {
				INK
			} else {
				CLEAR
			};
			assert_eq!(*image.get_pixel(16 + x, y), expected, "({x}, {y})");
		}
	}
}

#[test_log::test]
fn test_decode_narrow_grid() {
	// one glyph per row: rows 0x41..=0x43
	let (image, _) = decode(Cursor::new(three_glyph_font()), &DecodeOptions::new(1)).unwrap();
	assert_eq!(image.dimensions(), (8, 24));
	assert_eq!(*image.get_pixel(3, 3), INK);
	assert_eq!(*image.get_pixel(3, 11), INK);
	assert_eq!(*image.get_pixel(4, 11), CLEAR);
}

#[test_log::test]
fn test_noise_records_do_not_fail() {
	let metadata = identify(Cursor::new(font_with_noise())).unwrap();
	assert_eq!(metadata.author.as_deref(), Some("first"));

	let (image, _) = decode(Cursor::new(font_with_noise()), &DecodeOptions::new(4)).unwrap();
	assert_eq!(image.dimensions(), (32, 8));
}

#[test_log::test]
fn test_every_signature_byte_checked() {
	for i in 0..5 {
		let mut data = three_glyph_font();
		data[i] = data[i].wrapping_add(1);
		assert!(!is_bfnt(&data));

		let err = decode(Cursor::new(data), &DecodeOptions::default()).unwrap_err();
		assert!(matches!(err, BfntError::FormatMismatch { .. }), "byte {i}: {err}");
	}
}

#[test_log::test]
fn test_truncated_stream_is_io_error() {
	let data = three_glyph_font();
	for len in [20, 40, data.len() - 1] {
		let err = decode(Cursor::new(&data[..len]), &DecodeOptions::default()).unwrap_err();
		assert!(matches!(err, BfntError::Io(_)), "length {len}: {err}");
	}
}
