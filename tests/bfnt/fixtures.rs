//! Hand-built BFNT streams

use bfnt_rs::file::bfnt::{Extension, Header, PaletteEntry, Version};

/// 8x8 glyphs for codes 0x41..=0x43, 2 stored colors, 1 bit per pixel.
///
/// Glyph `A` is solid, `B` has a diagonal, `C` is empty. Palette index 0 is
/// marked transparent and the header carries every known text record.
pub fn three_glyph_font() -> Vec<u8> {
	let header = Header::new(8, 8, 0x41, 0x43, 0, true)
		.with_version(Version::from_byte(0x12))
		.with_font_name(*b"TESTFONT")
		.with_timestamp(946_684_800)
		.with_extensions(vec![
			Extension::ExtFontName("テスト".to_string()),
			Extension::Author("bfnt-rs".to_string()),
			Extension::TransparentIndex(0),
			Extension::Comment("three glyphs".to_string()),
		]);

	let mut data = header.to_bytes().expect("header fits");
	for entry in [PaletteEntry([0, 0, 0]), PaletteEntry([0xFF, 0x00, 0x80])] {
		data.extend_from_slice(&entry.0);
	}

	// A
	data.extend_from_slice(&[0xFF; 8]);
	// B
	data.extend((0..8).map(|row| 0x80u8 >> row));
	// C
	data.extend_from_slice(&[0x00; 8]);

	data
}

/// Same font with an unknown record and a second author appended.
pub fn font_with_noise() -> Vec<u8> {
	let header = Header::new(8, 8, 0x41, 0x43, 0, true).with_extensions(vec![
		Extension::Author("first".to_string()),
		Extension::Unknown {
			id: 0x20,
			payload: vec![1, 2, 3, 4],
		},
		Extension::Author("second".to_string()),
	]);

	let mut data = header.to_bytes().expect("header fits");
	let body = three_glyph_font();
	let body_start = body.len() - (2 * 3 + 3 * 8);
	data.extend_from_slice(&body[body_start..]);
	data
}
