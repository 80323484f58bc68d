//! BFNT (Bitmap Font) CLI Utility
//!
//! A command-line tool for inspecting, decoding and creating `.BFT`/`.FNT` glyph sheets.
//!
//! # Features
//!
//! - **info**: Display header information (glyph size, code range, colors, extension records)
//! - **decode**: Export all glyphs to one PNG sheet
//! - **encode**: Create a BFNT file from a PNG sheet
//! - **split**: Create one single-glyph BFNT file per cell of a PNG sheet
//!
//! # Encode Options
//!
//! Encode options are layered, later sources overriding earlier ones:
//!
//! 1. built-in defaults (16x16 glyphs, start code 0, palette stored)
//! 2. a TOML file given with `--config`
//! 3. `BFNT_GLYPH_WIDTH`, `BFNT_GLYPH_HEIGHT`, `BFNT_START_CODE`, `BFNT_INCLUDE_PALETTE`
//! 4. command-line flags
//!
//! # Usage Examples
//!
//! ```bash
//! # Display header information
//! cargo run --example bfnt_utils -- info FONT.BFT
//!
//! # Same, as JSON
//! cargo run --example bfnt_utils -- info FONT.BFT --json
//!
//! # Decode with 32 glyphs per row and keep the metadata next to the PNG
//! cargo run --example bfnt_utils -- decode FONT.BFT -o font.png --columns 32 --metadata
//!
//! # Encode 8x16 glyphs starting at the space character
//! cargo run --example bfnt_utils -- encode font.png -o FONT.BFT --glyph-width 8 --glyph-height 16 --start 0x20
//!
//! # Split a sheet that is not a whole number of glyphs
//! cargo run --example bfnt_utils -- split icons.png -o icons/ --glyph-width 24 --glyph-height 24
//! ```

use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bfnt_rs::file::bfnt::{self, DEFAULT_COLUMNS, Encoder, is_tile_aligned};
use bfnt_rs::prelude::*;
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

#[derive(Parser)]
#[command(name = "bfnt_utils")]
#[command(author = "bfnt-rs project")]
#[command(version)]
#[command(about = "BFNT utility - inspect, decode and encode bitmap font sheets", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Display header information
	Info {
		/// Input BFNT file path
		#[arg(value_name = "INPUT_BFNT")]
		input: PathBuf,

		/// Print the metadata as JSON
		#[arg(long)]
		json: bool,
	},

	/// Decode all glyphs to a PNG sheet
	Decode {
		/// Input BFNT file path
		#[arg(value_name = "INPUT_BFNT")]
		input: PathBuf,

		/// Output PNG file path (defaults to the input name with a `.png` extension)
		#[arg(short, long, value_name = "OUTPUT_PNG")]
		output: Option<PathBuf>,

		/// Glyphs per row of the sheet
		#[arg(short, long, value_name = "COUNT", default_value_t = DEFAULT_COLUMNS)]
		columns: u32,

		/// Also write the metadata as JSON next to the PNG
		#[arg(short, long)]
		metadata: bool,
	},

	/// Encode a PNG sheet to one BFNT file
	Encode {
		/// Input PNG file path
		#[arg(value_name = "INPUT_PNG")]
		input: PathBuf,

		/// Output BFNT file path (defaults to the input name with a `.BFT` extension)
		#[arg(short, long, value_name = "OUTPUT_BFNT")]
		output: Option<PathBuf>,

		#[command(flatten)]
		options: EncodeArgs,
	},

	/// Encode every glyph cell of a PNG sheet to its own BFNT file
	Split {
		/// Input PNG file path
		#[arg(value_name = "INPUT_PNG")]
		input: PathBuf,

		/// Output directory (defaults to the input name without extension)
		#[arg(short, long, value_name = "OUTPUT_DIR")]
		output: Option<PathBuf>,

		#[command(flatten)]
		options: EncodeArgs,
	},
}

#[derive(Args)]
struct EncodeArgs {
	/// TOML file with encode options
	#[arg(long, value_name = "CONFIG_TOML")]
	config: Option<PathBuf>,

	/// Glyph width in pixels
	#[arg(long, value_name = "PIXELS")]
	glyph_width: Option<u16>,

	/// Glyph height in pixels
	#[arg(long, value_name = "PIXELS")]
	glyph_height: Option<u16>,

	/// Code of the top-left glyph, decimal or 0x-prefixed hex
	#[arg(long, value_name = "CODE", value_parser = parse_code)]
	start: Option<u16>,

	/// Do not store the palette (256 colors at most, read back as grayscale)
	#[arg(long)]
	no_palette: bool,
}

impl EncodeArgs {
	/// Resolves the options from defaults, config file, environment and flags.
	fn resolve(&self) -> Result<EncodeOptions> {
		let mut builder = config::Config::builder().add_source(
			config::Config::try_from(&EncodeOptions::default()).context("Failed to load defaults")?,
		);
		if let Some(path) = &self.config {
			builder = builder.add_source(config::File::from(path.as_path()));
		}
		builder = builder.add_source(config::Environment::with_prefix("BFNT").try_parsing(true));

		let mut options: EncodeOptions = builder
			.build()
			.and_then(config::Config::try_deserialize)
			.context("Failed to read encode options")?;

		if let Some(width) = self.glyph_width {
			options.glyph_width = width;
		}
		if let Some(height) = self.glyph_height {
			options.glyph_height = height;
		}
		if let Some(start) = self.start {
			options.start_code = start;
		}
		if self.no_palette {
			options.include_palette = false;
		}

		Ok(options)
	}
}

/// Parses a code given in decimal or `0x`-prefixed hex
fn parse_code(value: &str) -> Result<u16, String> {
	let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
		Some(hex) => u16::from_str_radix(hex, 16),
		None => value.parse(),
	};
	parsed.map_err(|e| format!("invalid code '{value}': {e}"))
}

fn open_bfnt(input: &Path) -> Result<BufReader<fs::File>> {
	let file = fs::File::open(input).with_context(|| format!("Failed to open {}", input.display()))?;
	Ok(BufReader::new(file))
}

fn load_png(input: &Path) -> Result<image::RgbaImage> {
	let image = image::open(input).with_context(|| format!("Failed to load image {}", input.display()))?;
	Ok(image.to_rgba8())
}

/// Handles the 'info' command
fn handle_info(input: &Path, json: bool) -> Result<()> {
	let metadata = identify(open_bfnt(input)?)
		.with_context(|| format!("Failed to read BFNT header of {}", input.display()))?;

	if json {
		println!("{}", serde_json::to_string_pretty(&metadata)?);
		return Ok(());
	}

	let (width, height) = metadata.canvas_size(DEFAULT_COLUMNS)?;

	println!("\n=== BFNT Information ===");
	println!("File: {}", input.display());
	println!("Summary: {metadata}");
	println!("Version: {}", metadata.version);
	println!("Color Bits: {}", metadata.color_bits);
	println!("Glyphs: {}", metadata.glyph_count());
	println!("Sheet Size: {width}x{height} pixels ({DEFAULT_COLUMNS} per row)");
	println!("Font Name: {} ({})", metadata.font_name, hex::encode_upper(metadata.raw_font_name));
	match metadata.timestamp {
		Some(time) => println!("Created: {}", time.to_rfc3339()),
		None => println!("Created: -"),
	}

	if let Some(name) = &metadata.ext_font_name {
		println!("Extended Name: {name}");
	}
	if let Some(author) = &metadata.author {
		println!("Author: {author}");
	}
	if let Some(comment) = &metadata.comment {
		println!("Comment: {comment}");
	}
	if !metadata.transparent_indices.is_empty() {
		println!("Transparent Indices: {:?}", metadata.transparent_indices);
	}

	Ok(())
}

/// Handles the 'decode' command
fn handle_decode(input: &Path, output: Option<PathBuf>, columns: u32, write_metadata: bool) -> Result<()> {
	let output = output.unwrap_or_else(|| input.with_extension("png"));

	let (image, metadata) = decode(open_bfnt(input)?, &DecodeOptions::new(columns))
		.with_context(|| format!("Failed to decode {}", input.display()))?;

	image.save(&output).with_context(|| format!("Failed to write {}", output.display()))?;
	info!("{metadata}");
	println!("Decoded {} glyphs to {} ({}x{})", metadata.glyph_count(), output.display(), image.width(), image.height());

	if write_metadata {
		let path = output.with_extension("json");
		fs::write(&path, serde_json::to_string_pretty(&metadata)?)
			.with_context(|| format!("Failed to write {}", path.display()))?;
		println!("Metadata written to {}", path.display());
	}

	Ok(())
}

/// Handles the 'encode' command
fn handle_encode(input: &Path, output: Option<PathBuf>, args: &EncodeArgs) -> Result<()> {
	let options = args.resolve()?;
	let image = load_png(input)?;
	let output = output.unwrap_or_else(|| input.with_extension("BFT"));

	if !is_tile_aligned(image.width(), image.height(), options.glyph_width, options.glyph_height) {
		bail!(
			"{}x{} is not a whole number of {}x{} glyphs, use the split command instead",
			image.width(),
			image.height(),
			options.glyph_width,
			options.glyph_height
		);
	}

	let encoder = Encoder::new(&image, &options)?;
	if !encoder.transparent_candidates().is_empty() {
		warn!(
			"{} transparent color(s) will be stored as opaque palette entries",
			encoder.transparent_candidates().len()
		);
	}

	let bytes = encoder.to_bytes()?;
	fs::write(&output, &bytes).with_context(|| format!("Failed to write {}", output.display()))?;

	let grid = encoder.grid();
	println!(
		"Encoded {} glyphs (codes 0x{:04X}-0x{:04X}, color bits {}) to {} ({} bytes)",
		grid.glyph_count(),
		grid.start_code(),
		grid.end_code(),
		encoder.color_bits(),
		output.display(),
		bytes.len()
	);

	Ok(())
}

/// Handles the 'split' command
fn handle_split(input: &Path, output: Option<PathBuf>, args: &EncodeArgs) -> Result<()> {
	let options = args.resolve()?;
	let image = load_png(input)?;
	let output = output.unwrap_or_else(|| input.with_extension(""));

	let parts = bfnt::encode_split(&image, &options)?;
	fs::create_dir_all(&output).with_context(|| format!("Failed to create {}", output.display()))?;

	for (code, bytes) in &parts {
		let path = output.join(format!("{code:04X}.BFT"));
		fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
	}

	println!("Wrote {} glyph files to {}", parts.len(), output.display());
	Ok(())
}

fn main() {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	let result = match cli.command {
		Commands::Info {
			input,
			json,
		} => handle_info(&input, json),
		Commands::Decode {
			input,
			output,
			columns,
			metadata,
		} => handle_decode(&input, output, columns, metadata),
		Commands::Encode {
			input,
			output,
			options,
		} => handle_encode(&input, output, &options),
		Commands::Split {
			input,
			output,
			options,
		} => handle_split(&input, output, &options),
	};

	if let Err(e) = result {
		eprintln!("Error: {e:#}");
		std::process::exit(1);
	}
}
