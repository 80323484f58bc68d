//! Prelude module for `bfnt_types`.
//!
//! This module provides a convenient way to import commonly used types, functions and constants.
//!
//! # Examples
//!
//! ```no_run
//! use bfnt_types::prelude::*;
//!
//! let options = EncodeOptions::ascii().with_palette(false);
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	BfntError,

	// Header types
	BfntHeader,
	Extension,
	Version,

	// Codec types
	DecodeOptions,
	Decoder,
	EncodeOptions,
	Encoder,
	Metadata,

	// Palette types
	Palette,
	PaletteEntry,
	TileGrid,
};

// Codec entry points
#[doc(inline)]
pub use crate::file::bfnt::{decode, encode, encode_split, identify, is_bfnt};
