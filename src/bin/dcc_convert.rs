//! DCC to PNG converter.
//!
//! Decodes a DCC file and writes every frame as a PNG image, optionally
//! through a caller-supplied palette.
//!
//! # Usage
//!
//! ```bash
//! # Convert with the default grayscale palette
//! dcc-convert sprite.dcc
//!
//! # Convert through a palette file (up to 256 RGBA entries, 4 bytes each)
//! dcc-convert sprite.dcc --palette act1.pal --output sprite.png
//! ```
//!
//! Files holding more than one image expand the output path to
//! `<stem>_d<direction>_f<frame>.png`.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dcc_rs::prelude::*;
use image::{ImageBuffer, Rgba, RgbaImage};
use log::{info, warn};

#[derive(Parser)]
#[command(name = "dcc-convert")]
#[command(author = "dcc-rs project")]
#[command(version)]
#[command(about = "Converts DCC animation frames to PNG images", long_about = None)]
struct Cli {
	/// Input DCC file path
	#[arg(value_name = "DCC_FILE")]
	input: PathBuf,

	/// Output PNG path; defaults to the input path with a png extension
	#[arg(short, long, value_name = "PNG_FILE")]
	output: Option<PathBuf>,

	/// Palette file with up to 256 RGBA entries, 4 bytes each
	#[arg(short, long, value_name = "PAL_FILE")]
	palette: Option<PathBuf>,
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	let mut dcc = DccFile::open(&cli.input)
		.with_context(|| format!("could not decode {}", cli.input.display()))?;

	if let Some(palette_path) = &cli.palette {
		let data = fs::read(palette_path)
			.with_context(|| format!("could not read {}", palette_path.display()))?;
		let palette = Palette::from_bytes(&data)
			.with_context(|| format!("could not parse {}", palette_path.display()))?;
		dcc.set_palette(Some(palette.colors().as_slice()));
	}

	let output = cli.output.unwrap_or_else(|| cli.input.with_extension("png"));
	let multiple = dcc.directions().len() > 1 || dcc.frames_per_direction() > 1;

	for (direction_index, direction) in dcc.directions().iter().enumerate() {
		for (frame_index, frame) in direction.iter().enumerate() {
			if frame.width() == 0 || frame.height() == 0 {
				warn!("skipping empty frame d{direction_index} f{frame_index}");
				continue;
			}

			let path = if multiple {
				numbered_path(&output, direction_index, frame_index)
			} else {
				output.clone()
			};

			let image = frame_to_image(frame, dcc.palette());
			image
				.save(&path)
				.with_context(|| format!("could not write {}", path.display()))?;

			info!(
				"wrote {} ({}x{})",
				path.display(),
				frame.width(),
				frame.height()
			);
		}
	}

	Ok(())
}

/// Renders one frame through the active palette.
fn frame_to_image(frame: &Frame, palette: &Palette) -> RgbaImage {
	let mut image = ImageBuffer::new(frame.width(), frame.height());

	for (y, row) in frame.rows().enumerate() {
		for (x, &index) in row.iter().enumerate() {
			let color = palette.get(index);
			image.put_pixel(x as u32, y as u32, Rgba([color.r, color.g, color.b, color.a]));
		}
	}

	image
}

/// Expands the output path for files holding more than one image.
fn numbered_path(base: &Path, direction: usize, frame: usize) -> PathBuf {
	let stem = base.file_stem().and_then(OsStr::to_str).unwrap_or("frame");
	base.with_file_name(format!("{stem}_d{direction}_f{frame}.png"))
}
