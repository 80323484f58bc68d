//! BFNT decoder.
//!
//! A [`Decoder`] owns its reader and header for the duration of one call, so
//! independent decodes never share state.

use std::io::{self, Read};

use image::{Rgba, RgbaImage};
use log::debug;

use crate::file::BfntError;

use super::canvas::TileGrid;
use super::header::Header;
use super::layout::{BitUnpacker, PixelLayout};
use super::metadata::Metadata;
use super::options::DecodeOptions;
use super::palette::Palette;

/// Decodes one BFNT stream.
#[derive(Debug)]
pub struct Decoder<R> {
	reader: R,
	header: Header,
}

impl<R: Read> Decoder<R> {
	/// Reads the header and extension records, leaving the reader at the
	/// palette or pixel data.
	///
	/// # Errors
	///
	/// Returns [`BfntError::FormatMismatch`] when `reader` does not hold a BFNT
	/// stream.
	pub fn new(mut reader: R) -> Result<Self, BfntError> {
		let header = Header::from_reader(&mut reader)?;
		Ok(Self {
			reader,
			header,
		})
	}

	/// Returns the parsed header.
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// Returns the header fields as metadata.
	pub fn metadata(&self) -> Metadata {
		Metadata::from(&self.header)
	}

	/// Decodes every glyph onto one composite image.
	///
	/// Cells of the canvas that no code maps to stay transparent black.
	pub fn decode(mut self, options: &DecodeOptions) -> Result<(RgbaImage, Metadata), BfntError> {
		let header = &self.header;
		let grid = TileGrid::new(
			options.columns,
			header.glyph_width(),
			header.glyph_height(),
			header.start_code(),
			header.end_code(),
		)?;

		let layout = PixelLayout::from_color_bits(header.color_bits())
			.ok_or(BfntError::InvalidColorBits(header.color_bits()))?;
		let palette = Palette::for_header(header, &mut self.reader)?;

		// palette entries resolved to pixels once, transparent ones with alpha 0
		let transparent = header.transparent_indices();
		let colors: Vec<Rgba<u8>> = palette
			.entries()
			.iter()
			.enumerate()
			.map(|(index, entry)| {
				let alpha = if transparent.contains(&(index as u32)) {
					0
				} else {
					0xFF
				};
				entry.to_rgba(alpha)
			})
			.collect();

		let (gw, gh) = (u32::from(grid.glyph_width()), u32::from(grid.glyph_height()));
		let pixel_count = grid
			.glyph_count()
			.checked_mul(gw as usize * gh as usize)
			.ok_or(BfntError::invalid_geometry("pixel count overflows"))?;
		let stream_len = layout.stream_len(pixel_count);

		let mut data = Vec::new();
		self.reader.by_ref().take(stream_len as u64).read_to_end(&mut data)?;
		if data.len() < stream_len {
			return Err(truncated(data.len(), stream_len).into());
		}

		let (width, height) = grid.canvas_size();
		debug!(
			"Decoding {} glyphs onto {width}x{height} canvas, {layout:?} layout, {stream_len} bytes",
			grid.glyph_count()
		);

		let mut image = RgbaImage::new(width, height);
		let mut indices = BitUnpacker::new(&data, layout);

		for code in grid.codes() {
			let (x0, y0) = grid.origin(code);
			for y in y0..y0 + gh {
				for x in x0..x0 + gw {
					let index = indices.next().ok_or_else(|| truncated(data.len(), stream_len))?;
					let color = colors.get(index as usize).copied().ok_or(
						BfntError::PaletteIndexOutOfRange {
							index,
							len: colors.len(),
						},
					)?;
					image.put_pixel(x, y, color);
				}
			}
		}

		Ok((image, Metadata::from(&self.header)))
	}
}

fn truncated(read: usize, expected: usize) -> io::Error {
	io::Error::new(
		io::ErrorKind::UnexpectedEof,
		format!("pixel data truncated: {read} of {expected} bytes"),
	)
}

/// Decodes a BFNT stream to a composite image and its metadata.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use std::io::BufReader;
///
/// use bfnt_types::file::bfnt::{self, DecodeOptions};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let reader = BufReader::new(File::open("FONT.BFT")?);
/// let (image, metadata) = bfnt::decode(reader, &DecodeOptions::default())?;
/// println!("{metadata}: {}x{}", image.width(), image.height());
/// # Ok(())
/// # }
/// ```
pub fn decode<R: Read>(reader: R, options: &DecodeOptions) -> Result<(RgbaImage, Metadata), BfntError> {
	Decoder::new(reader)?.decode(options)
}

/// Reads only the header of a BFNT stream.
pub fn identify<R: Read>(reader: R) -> Result<Metadata, BfntError> {
	Ok(Decoder::new(reader)?.metadata())
}
