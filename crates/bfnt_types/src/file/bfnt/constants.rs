//! Constants used in `.BFT`/`.FNT` files

/// Signature at the start of every BFNT stream
pub const MAGIC: [u8; 5] = [b'B', b'F', b'N', b'T', 0x1A];

/// Size of the fixed header in bytes, up to and including the first `hdrSize`
pub const HEADER_SIZE: usize = 0x20;

/// Size of the font name field in bytes
pub const FONT_NAME_SIZE: usize = 8;

/// Framing bytes of an extension record (`hdrSize` + `id`)
pub const EXTENSION_FRAMING_SIZE: usize = 3;

/// Bit of the `col` byte flagging stored palette data
pub const PALETTE_FLAG: u8 = 0x80;

/// Mask of the `col` byte holding the color bits
pub const COLOR_BITS_MASK: u8 = 0x7F;

/// Largest valid color bits value (16777216 colors)
pub const MAX_COLOR_BITS: u8 = 23;

/// Largest color bits value that may omit stored palette data (256 colors)
pub const MAX_IMPLICIT_PALETTE_BITS: u8 = 7;

/// Version byte written by the encoder (1.6)
pub const ENCODER_VERSION: u8 = 0x16;

/// Size of one stored palette entry in bytes
pub const PALETTE_ENTRY_SIZE: usize = 3;

/// Format name
pub const FORMAT_NAME: &str = "BFNT";

/// MIME type
pub const MIME_TYPE: &str = "image/x-bfnt";

/// File extensions
pub const FILE_EXTENSIONS: [&str; 2] = ["BFT", "FNT"];

/// Extension record ids
pub mod ids {
	/// Extended font name (variable length text)
	pub const EXT_FONT_NAME: u8 = 0x00;

	/// Author (variable length text)
	pub const AUTHOR: u8 = 0x03;

	/// Transparent palette index (3 bytes, big-endian)
	pub const TRANSPARENT_INDEX: u8 = 0x10;

	/// Comment (variable length text)
	pub const COMMENT: u8 = 0x3F;
}
