//! This crate provides the BFNT bitmap font codec for the `bfnt-rs` project.
//!
//! # File Formats
//!
//! - **BFNT**: `.BFT`/`.FNT` tiled glyph sheets with indexed colors, an
//!   optional palette and variable extension records
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use bfnt_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("FONT.BFT")?;
//! if is_bfnt(&data) {
//!     let metadata = identify(data.as_slice())?;
//!     println!("{metadata}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use bfnt_types::file::bfnt::{self, DecodeOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = std::fs::File::open("FONT.BFT")?;
//! let (image, _) = bfnt::decode(file, &DecodeOptions::default())?;
//! # Ok(())
//! # }
//! ```

pub mod file;

/// `use bfnt_types::prelude::*;` to import commonly used items.
pub mod prelude;
