//! Bitmap font file support.
//!
//! A `.BFT`/`.FNT` file stores a run of same-sized glyphs, indexed by code,
//! as palette-indexed pixels:
//!
//! - 0x20-byte header: signature, color bits, glyph size and code range
//! - optional extension records (font name, author, comment, transparent
//!   palette index)
//! - optional palette of `colorCount` 3-byte entries; without one, a
//!   grayscale ramp is implied (256 colors at most)
//! - pixel indices of every glyph in code order, packed at 1, 2, 4, 8, 16
//!   or 24 bits per pixel
//!
//! Decoding lays the glyphs out on one image, a fixed number of glyphs per
//! row. Encoding reads them back from such an image.
//!
//! # Examples
//!
//! ## Decoding
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! use bfnt_types::file::bfnt::{self, DecodeOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = BufReader::new(File::open("FONT.BFT")?);
//! let (image, metadata) = bfnt::decode(reader, &DecodeOptions::new(16))?;
//!
//! println!("{metadata}");
//! if let Some(author) = &metadata.author {
//!     println!("author: {author}");
//! }
//! image.save("FONT.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Encoding
//!
//! ```no_run
//! use bfnt_types::file::bfnt::{self, EncodeOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let image = image::open("FONT.png")?.to_rgba8();
//! let bytes = bfnt::encode(&image, &EncodeOptions::ascii())?;
//! std::fs::write("FONT.BFT", bytes)?;
//! # Ok(())
//! # }
//! ```

pub mod canvas;
pub mod constants;
mod decoder;
mod encoder;
pub mod extension;
mod header;
pub mod layout;
mod metadata;
mod options;
pub mod palette;


pub use canvas::{Cell, TileGrid, is_tile_aligned, split_cells};
pub use constants::{FILE_EXTENSIONS, FORMAT_NAME, MAGIC, MIME_TYPE};
pub use decoder::{Decoder, decode, identify};
pub use encoder::{Encoder, encode, encode_split};
pub use extension::Extension;
pub use header::{Header, Version, color_count};
pub use layout::PixelLayout;
pub use metadata::Metadata;
pub use options::{DEFAULT_COLUMNS, DecodeOptions, EncodeOptions};
pub use palette::{ColorTable, Palette, PaletteEntry};

/// Returns `true` when `data` starts with the BFNT signature.
pub fn is_bfnt(data: &[u8]) -> bool {
	data.starts_with(&MAGIC)
}
