//! File type support for `bfnt-rs` project.

mod error;

pub mod bfnt;

// Re-export unified error type
pub use error::BfntError;

// Re-export main file types
pub use bfnt::{
	DecodeOptions, Decoder, EncodeOptions, Encoder, Extension, Header as BfntHeader, Metadata,
	Palette, PaletteEntry, TileGrid, Version,
};
