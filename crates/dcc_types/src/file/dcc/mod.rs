//! `.DCC` file format support for the `dcc-rs` project.
//!
//! DCC is the sprite-animation container of a 2D isometric action game from
//! around 2000. A file packs up to 32 directional animations, each with the
//! same number of frames, into a densely bit-packed body with two optional
//! compression modes. This module decodes a byte blob into paletted raster
//! frames with per-frame bounding boxes; encoding is not supported.
//!
//! # File Structure
//!
//! | Field                | Bits    | Notes                               |
//! |----------------------|---------|-------------------------------------|
//! | signature            | 8       | always `0x74`                       |
//! | version              | 8       |                                     |
//! | direction count      | 8       | 1-32 in real files                  |
//! | frames per direction | 32      |                                     |
//! | check field          | 32      | always 1                            |
//! | total coded size     | 32      | informational                       |
//! | direction offsets    | 32 each | byte offsets from the file start    |
//!
//! Each direction's body begins byte-aligned at its offset; its layout and
//! the two-pass cell decode are documented in [`direction`](self::direction).
//!
//! # Usage Examples
//!
//! ## Decoding a DCC file
//!
//! ```no_run
//! use dcc_types::file::dcc::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dcc = File::open("BLDSTRLITHTH.dcc")?;
//!
//! println!("version {}, {} directions", dcc.version(), dcc.directions().len());
//!
//! if let Some(direction) = dcc.direction(0) {
//!     for (index, frame) in direction.iter().enumerate() {
//!         println!("frame #{index}: {frame}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Reading pixels through a palette
//!
//! ```no_run
//! use dcc_types::file::dcc::{File, PalettedImage};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dcc = File::open("BLDSTRLITHTH.dcc")?;
//! let frame = dcc.direction(0).and_then(|d| d.frame(0)).expect("empty file");
//!
//! let bounds = frame.bounds();
//! let color = frame.color_at(bounds.min.x, bounds.min.y, dcc.palette());
//! println!("top-left pixel: {color}");
//! # Ok(())
//! # }
//! ```

use std::io::Read;

use crate::file::DccError;

mod bitstream;
mod cell;
pub mod direction;
mod frame;
pub mod orientation;
mod palette;
mod pixel_buffer;
mod rect;


pub use bitstream::BitReader;
pub use cell::Cell;
pub use direction::Direction;
pub use frame::{Frame, FrameRowIterator, PalettedImage};
pub use palette::{Color, Palette};
pub use pixel_buffer::PixelBufferEntry;
pub use rect::{Point, Rect};

/// DCC file constants.
pub mod constants {
	/// First byte of every DCC file
	pub const SIGNATURE: u8 = 0x74;

	/// Required value of the 32-bit header check field
	pub const SANITY_CHECK: u32 = 1;

	/// Bit width of the signature field
	pub const SIGNATURE_BITS: usize = 8;

	/// Bit width of the version field
	pub const VERSION_BITS: usize = 8;

	/// Bit width of the direction count field
	pub const DIRECTIONS_BITS: usize = 8;

	/// Bit width of the frames-per-direction field
	pub const FRAMES_PER_DIRECTION_BITS: usize = 32;

	/// Bit width of the header check field
	pub const SANITY_CHECK_BITS: usize = 32;

	/// Bit width of the total-coded-size field
	pub const TOTAL_SIZE_CODED_BITS: usize = 32;

	/// Bit width of one direction table entry
	pub const DIRECTION_OFFSET_BITS: usize = 32;
}

/// A decoded DCC file.
///
/// Immutable after decode except for the active palette, which can be
/// replaced to recolor frames without re-decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	version: u8,
	total_size_coded: u32,
	frames_per_direction: u32,
	directions: Vec<Direction>,
	palette: Palette,
}

impl File {
	/// Opens and decodes a DCC file from the specified path.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or its contents fail to
	/// decode.
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, DccError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data)
	}

	/// Decodes a DCC file from any reader.
	///
	/// The whole stream is buffered first; the decoder needs random access
	/// to carve the per-direction sub-bitstreams.
	///
	/// # Errors
	///
	/// Returns an error if reading fails or the contents fail to decode.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, DccError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Decodes a DCC file from a byte slice.
	///
	/// # Errors
	///
	/// Returns an error if the signature or check field is wrong, a
	/// direction offset points outside the file, or any direction body is
	/// malformed. No partially-decoded file is ever returned.
	pub fn from_bytes(data: &[u8]) -> Result<Self, DccError> {
		let mut stream = BitReader::new(data);

		let signature = stream.next_bits(constants::SIGNATURE_BITS)? as u8;
		if signature != constants::SIGNATURE {
			return Err(DccError::BadSignature {
				actual: signature,
				expected: constants::SIGNATURE,
			});
		}

		let version = stream.next_bits(constants::VERSION_BITS)? as u8;
		let num_directions = stream.next_bits(constants::DIRECTIONS_BITS)?;
		let frames_per_direction = stream.next_bits(constants::FRAMES_PER_DIRECTION_BITS)?;

		let check = stream.next_bits(constants::SANITY_CHECK_BITS)?;
		if check != constants::SANITY_CHECK {
			return Err(DccError::SanityCheckFailed {
				actual: check,
				expected: constants::SANITY_CHECK,
			});
		}

		let total_size_coded = stream.next_bits(constants::TOTAL_SIZE_CODED_BITS)?;

		let mut offsets = Vec::with_capacity(num_directions as usize);
		for _ in 0..num_directions {
			offsets.push(stream.next_bits(constants::DIRECTION_OFFSET_BITS)?);
		}

		let mut directions = Vec::with_capacity(num_directions as usize);
		for (index, &offset) in offsets.iter().enumerate() {
			if offset as usize >= data.len() {
				return Err(DccError::DirectionOffsetOutOfRange {
					offset,
					length: data.len(),
				});
			}

			// Each direction starts byte-aligned at its declared offset
			let mut direction_stream = stream.copy();
			direction_stream.set_bit_position(0);
			direction_stream.set_position(offset as usize);

			let direction = Direction::decode(&mut direction_stream, frames_per_direction)
				.map_err(|err| err.in_direction(index))?;
			directions.push(direction);
		}

		Ok(Self {
			version,
			total_size_coded,
			frames_per_direction,
			directions,
			palette: Palette::grayscale(),
		})
	}

	/// Returns the file format version byte.
	pub fn version(&self) -> u8 {
		self.version
	}

	/// Returns the total coded size declared in the header.
	pub fn total_size_coded(&self) -> u32 {
		self.total_size_coded
	}

	/// Returns the frame count shared by every direction.
	pub fn frames_per_direction(&self) -> u32 {
		self.frames_per_direction
	}

	/// Returns the decoded directions.
	pub fn directions(&self) -> &[Direction] {
		&self.directions
	}

	/// Returns a specific direction by index, or None if out of range.
	pub fn direction(&self, index: usize) -> Option<&Direction> {
		self.directions.get(index)
	}

	/// Replaces the active palette.
	///
	/// Builds a fresh grayscale palette, then copies up to 256 entries of
	/// `colors` over it; `None` restores the default.
	pub fn set_palette(&mut self, colors: Option<&[Color]>) {
		let mut palette = Palette::grayscale();

		if let Some(colors) = colors {
			for (index, color) in colors.iter().take(Palette::SIZE).enumerate() {
				palette.set(index as u8, *color);
			}
		}

		self.palette = palette;
	}

	/// Returns the active palette.
	pub fn palette(&self) -> &Palette {
		&self.palette
	}
}

impl std::fmt::Display for File {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"DCC v{}: {} directions × {} frames",
			self.version,
			self.directions.len(),
			self.frames_per_direction
		)
	}
}
