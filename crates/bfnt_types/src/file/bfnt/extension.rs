//! Extension header records.
//!
//! Extension records follow the fixed header as a chain:
//!
//! ```text
//! 00000010 |<-       font name       ->|<-    time   ->|extSize|hdrSize|
//! 00000020 |ID |     payload     |hdrSize|ID | payload |hdrSize = 0|
//! ```
//!
//! `hdrSize` counts itself (2 bytes), the id byte and the payload. A
//! `hdrSize` of zero or less ends the chain.

use std::io::{Read, Write};

use encoding_rs::SHIFT_JIS;
use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::file::BfntError;

use super::constants::{EXTENSION_FRAMING_SIZE, ids};

/// A single extension record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Extension {
	/// ID 0x00: extended font name
	ExtFontName(String),

	/// ID 0x03: author
	Author(String),

	/// ID 0x10: palette index rendered fully transparent
	TransparentIndex(u32),

	/// ID 0x3F: comment
	Comment(String),

	/// Any other id, payload kept verbatim
	Unknown {
		/// Record id
		id: u8,
		/// Raw payload
		payload: Vec<u8>,
	},
}

impl Extension {
	/// Returns the record id.
	pub fn id(&self) -> u8 {
		match self {
			Extension::ExtFontName(_) => ids::EXT_FONT_NAME,
			Extension::Author(_) => ids::AUTHOR,
			Extension::TransparentIndex(_) => ids::TRANSPARENT_INDEX,
			Extension::Comment(_) => ids::COMMENT,
			Extension::Unknown {
				id,
				..
			} => *id,
		}
	}

	/// Builds a record from its id and payload.
	///
	/// Returns `None` for a transparent index record whose payload is not
	/// exactly 3 bytes.
	pub fn from_record(id: u8, payload: Vec<u8>) -> Option<Self> {
		let ext = match id {
			ids::EXT_FONT_NAME => Extension::ExtFontName(decode_text(&payload)),
			ids::AUTHOR => Extension::Author(decode_text(&payload)),
			ids::TRANSPARENT_INDEX => match payload.as_slice() {
				&[hi, mid, lo] => Extension::TransparentIndex(u32::from_be_bytes([0, hi, mid, lo])),
				_ => return None,
			},
			ids::COMMENT => Extension::Comment(decode_text(&payload)),
			_ => Extension::Unknown {
				id,
				payload,
			},
		};
		Some(ext)
	}

	/// Returns the on-disk payload.
	pub fn payload(&self) -> Vec<u8> {
		match self {
			Extension::ExtFontName(text) | Extension::Author(text) | Extension::Comment(text) => {
				encode_text(text)
			}
			Extension::TransparentIndex(index) => index.to_be_bytes()[1..].to_vec(),
			Extension::Unknown {
				payload,
				..
			} => payload.clone(),
		}
	}

	/// Returns the record size as stored in `hdrSize`.
	pub fn record_size(&self) -> usize {
		EXTENSION_FRAMING_SIZE + self.payload().len()
	}

	/// Writes `[hdrSize][id][payload]`.
	pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), BfntError> {
		let payload = self.payload();
		let hdr_size = i16::try_from(EXTENSION_FRAMING_SIZE + payload.len()).map_err(|_| {
			BfntError::ExtensionTooLarge {
				id: self.id(),
				len: payload.len(),
			}
		})?;

		writer.write_all(&hdr_size.to_le_bytes())?;
		writer.write_all(&[self.id()])?;
		writer.write_all(&payload)?;
		Ok(())
	}
}

/// Reads the record chain, starting from the `hdrSize` already read from the
/// fixed header.
///
/// Mis-sized transparent index records are skipped with a warning. Unknown
/// ids are kept as [`Extension::Unknown`].
pub fn read_chain<R: Read>(reader: &mut R, first_hdr_size: i16) -> Result<Vec<Extension>, BfntError> {
	let mut extensions = Vec::new();
	let mut hdr_size = first_hdr_size;

	while hdr_size > 0 {
		let payload_len = usize::from(hdr_size.unsigned_abs())
			.checked_sub(EXTENSION_FRAMING_SIZE)
			.ok_or(BfntError::MalformedExtension {
				hdr_size,
			})?;

		let mut id = [0u8; 1];
		reader.read_exact(&mut id)?;
		let id = id[0];

		let mut payload = vec![0u8; payload_len];
		reader.read_exact(&mut payload)?;
		trace!("extension record id=0x{id:02X} size={hdr_size}");

		match Extension::from_record(id, payload) {
			Some(ext) => extensions.push(ext),
			None => warn!(
				"Transparent palette record with {payload_len} payload bytes (expected 3), skipped"
			),
		}

		let mut next = [0u8; 2];
		reader.read_exact(&mut next)?;
		hdr_size = i16::from_le_bytes(next);
	}

	Ok(extensions)
}

/// Writes every record followed by the terminating `hdrSize = 0`.
pub fn write_chain<W: Write>(writer: &mut W, extensions: &[Extension]) -> Result<(), BfntError> {
	for ext in extensions {
		ext.write(writer)?;
	}
	writer.write_all(&0i16.to_le_bytes())?;
	Ok(())
}

/// Decodes Shift-JIS text, dropping trailing NUL padding.
pub fn decode_text(bytes: &[u8]) -> String {
	let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
	let (text, _, _) = SHIFT_JIS.decode(&bytes[..end]);
	text.into_owned()
}

/// Encodes text as Shift-JIS.
pub fn encode_text(text: &str) -> Vec<u8> {
	let (bytes, _, _) = SHIFT_JIS.encode(text);
	bytes.into_owned()
}
