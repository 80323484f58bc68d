#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `bfnt-rs` reads and writes BFNT bitmap font sheets, the tiled indexed-color
//! glyph format of old PC-98 era tools.
//!
//! ```no_run
//! use bfnt_rs::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = std::fs::File::open("FONT.BFT")?;
//! let (image, metadata) = decode(file, &DecodeOptions::default())?;
//! println!("{metadata}");
//!
//! let bytes = encode(&image, &EncodeOptions::new(metadata.glyph_width, metadata.glyph_height))?;
//! # Ok(())
//! # }
//! ```

/// `use bfnt_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export bfnt_types for convenience
pub use bfnt_types;

// Re-export commonly used types at crate root
pub use bfnt_types::file;
pub use bfnt_types::file::{BfntError, DecodeOptions, EncodeOptions, Metadata};
