//! Integration tests for `bfnt-rs`

mod decode;
mod encode;
mod fixtures;
