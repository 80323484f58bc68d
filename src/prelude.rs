//! Prelude module for `bfnt-rs`.
//!
//! # Examples
//!
//! ```rust
//! use bfnt_rs::prelude::*;
//!
//! let options = EncodeOptions::half_width();
//! assert!(!is_bfnt(b"PNG"));
//! ```

// Re-export everything from bfnt_types::prelude
#[doc(inline)]
pub use bfnt_types::prelude::*;
