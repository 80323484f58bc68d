//! Tiled canvas layout.
//!
//! All glyphs of a file are laid out on one image, `columns` glyphs per row.
//! A code sits at column `code % columns` and row `code / columns`; rows above
//! the row of the start code are not part of the canvas.

use std::ops::RangeInclusive;

use crate::file::BfntError;

/// Maps codes to glyph cells of a composite image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileGrid {
	columns: u32,
	glyph_width: u16,
	glyph_height: u16,
	start_code: u16,
	end_code: u16,
}

impl TileGrid {
	/// Creates a grid for the inclusive code range `start_code..=end_code`.
	///
	/// # Errors
	///
	/// - [`BfntError::InvalidGeometry`] for zero columns, an empty glyph or a
	///   canvas wider or taller than `u32::MAX`
	/// - [`BfntError::InvalidRange`] when `end_code < start_code`
	pub fn new(
		columns: u32,
		glyph_width: u16,
		glyph_height: u16,
		start_code: u16,
		end_code: u16,
	) -> Result<Self, BfntError> {
		if columns == 0 {
			return Err(BfntError::invalid_geometry("tile grid needs at least one column"));
		}
		if glyph_width == 0 || glyph_height == 0 {
			return Err(BfntError::invalid_geometry("glyph size must be non-zero"));
		}
		if end_code < start_code {
			return Err(BfntError::InvalidRange {
				start_code: u32::from(start_code),
				end_code: u32::from(end_code),
			});
		}

		let grid = Self {
			columns,
			glyph_width,
			glyph_height,
			start_code,
			end_code,
		};
		grid.checked_canvas_size()
			.ok_or(BfntError::invalid_geometry("canvas exceeds 32-bit dimensions"))?;
		Ok(grid)
	}

	/// Derives the grid of a composite image for encoding.
	///
	/// The grid has `width / glyph_width` columns. The code range starts at
	/// `start_code` and ends at the last cell of the canvas.
	///
	/// # Errors
	///
	/// - [`BfntError::InvalidGeometry`] for an empty image or glyph
	/// - [`BfntError::NotTileAligned`] when the image is not a whole number of glyphs
	/// - [`BfntError::InvalidRange`] when the last code does not fit in 16 bits
	pub fn for_canvas(
		width: u32,
		height: u32,
		glyph_width: u16,
		glyph_height: u16,
		start_code: u16,
	) -> Result<Self, BfntError> {
		if glyph_width == 0 || glyph_height == 0 {
			return Err(BfntError::invalid_geometry("glyph size must be non-zero"));
		}
		if width == 0 || height == 0 {
			return Err(BfntError::invalid_geometry("image is empty"));
		}
		if !is_tile_aligned(width, height, glyph_width, glyph_height) {
			return Err(BfntError::NotTileAligned {
				width,
				height,
				glyph_width,
				glyph_height,
			});
		}

		let columns = width / u32::from(glyph_width);
		let rows = height / u32::from(glyph_height);
		let first_row = u64::from(start_code) / u64::from(columns);
		let end_code = (first_row + u64::from(rows)) * u64::from(columns) - 1;

		let end_code = u16::try_from(end_code).map_err(|_| BfntError::InvalidRange {
			start_code: u32::from(start_code),
			end_code: u32::try_from(end_code).unwrap_or(u32::MAX),
		})?;

		Self::new(columns, glyph_width, glyph_height, start_code, end_code)
	}

	/// Returns the number of glyph columns.
	pub fn columns(&self) -> u32 {
		self.columns
	}

	/// Returns the glyph width in pixels.
	pub fn glyph_width(&self) -> u16 {
		self.glyph_width
	}

	/// Returns the glyph height in pixels.
	pub fn glyph_height(&self) -> u16 {
		self.glyph_height
	}

	/// Returns the first code.
	pub fn start_code(&self) -> u16 {
		self.start_code
	}

	/// Returns the last code.
	pub fn end_code(&self) -> u16 {
		self.end_code
	}

	/// Returns the codes in storage order.
	pub fn codes(&self) -> RangeInclusive<u16> {
		self.start_code..=self.end_code
	}

	/// Returns the number of codes.
	pub fn glyph_count(&self) -> usize {
		usize::from(self.end_code - self.start_code) + 1
	}

	/// Returns the column of `code`.
	#[inline]
	pub fn col_of(&self, code: u16) -> u32 {
		u32::from(code) % self.columns
	}

	/// Returns the absolute row of `code`.
	#[inline]
	pub fn row_of(&self, code: u16) -> u32 {
		u32::from(code) / self.columns
	}

	/// Returns the number of glyph rows on the canvas.
	pub fn row_count(&self) -> u32 {
		self.row_of(self.end_code) - self.row_of(self.start_code) + 1
	}

	/// Returns the canvas size in pixels.
	pub fn canvas_size(&self) -> (u32, u32) {
		// validated in `new`
		self.checked_canvas_size().unwrap_or((0, 0))
	}

	fn checked_canvas_size(&self) -> Option<(u32, u32)> {
		let width = u32::from(self.glyph_width).checked_mul(self.columns)?;
		let height = u32::from(self.glyph_height).checked_mul(self.row_count())?;
		Some((width, height))
	}

	/// Returns the top-left pixel of the cell holding `code`.
	#[inline]
	pub fn origin(&self, code: u16) -> (u32, u32) {
		let x = self.col_of(code) * u32::from(self.glyph_width);
		let y = (self.row_of(code) - self.row_of(self.start_code)) * u32::from(self.glyph_height);
		(x, y)
	}
}

/// Returns `true` when a `width`x`height` image is a whole number of glyphs.
pub fn is_tile_aligned(width: u32, height: u32, glyph_width: u16, glyph_height: u16) -> bool {
	glyph_width != 0
		&& glyph_height != 0
		&& width % u32::from(glyph_width) == 0
		&& height % u32::from(glyph_height) == 0
}

/// One cell of a split export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
	/// Position in row-major order
	pub index: usize,
	/// Left edge in pixels
	pub x: u32,
	/// Top edge in pixels
	pub y: u32,
	/// Width in pixels, smaller than the glyph width at the right edge
	pub width: u32,
	/// Height in pixels, smaller than the glyph height at the bottom edge
	pub height: u32,
}

/// Cuts a `width`x`height` image into glyph-sized cells in row-major order.
///
/// Cells on the right and bottom edges are cropped to the image.
pub fn split_cells(width: u32, height: u32, glyph_width: u16, glyph_height: u16) -> Vec<Cell> {
	if glyph_width == 0 || glyph_height == 0 {
		return Vec::new();
	}

	let (gw, gh) = (u32::from(glyph_width), u32::from(glyph_height));
	let columns = width.div_ceil(gw);
	let rows = height.div_ceil(gh);

	(0..rows)
		.flat_map(|row| (0..columns).map(move |col| (row, col)))
		.enumerate()
		.map(|(index, (row, col))| {
			let (x, y) = (col * gw, row * gh);
			Cell {
				index,
				x,
				y,
				width: gw.min(width - x),
				height: gh.min(height - y),
			}
		})
		.collect()
}
