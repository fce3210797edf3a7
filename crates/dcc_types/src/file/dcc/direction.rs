//! Direction decoding.
//!
//! A direction is one viewing angle of the animation and owns a fixed number
//! of frames. Its body is a single continuous bitstream holding, in order:
//!
//! | Field                  | Bits       | Notes                                    |
//! |------------------------|------------|------------------------------------------|
//! | `out_size_coded`       | 32         | declared byte length of the coded body   |
//! | `compression_flags`    | 2          | bit 0 `RAW_PIXEL`, bit 1 `EQUAL_CELLS`   |
//! | field-width indices    | 7 × 4      | resolved through the crazy bit table     |
//! | frame headers          | variable   | one per frame, widths from above         |
//! | `equal_cells` size     | 20         | only with `EQUAL_CELLS`                  |
//! | `pixel_mask` size      | 20         | always                                   |
//! | `encoding_type` size   | 20         | only with `RAW_PIXEL`                    |
//! | `raw_pixel_codes` size | 20         | only with `RAW_PIXEL`                    |
//! | palette entry bits     | 256        | inclusion bit per palette index          |
//! | sub-bitstream data     | rest       | five interleaved streams, see below      |
//!
//! The declared sizes carve the remaining bits into five sub-bitstreams laid
//! end to end: `EqualCells`, `PixelMask`, `EncodingType`, `RawPixelCodes`
//! and the trailing `PixelCodeAndDisplacement` stream. All five are walked
//! simultaneously by independent cursors; the offsets between them are bit
//! offsets, never rounded to bytes.
//!
//! Decoding happens in two passes over a 4x4 cell grid covering the union
//! bounding box of every frame:
//!
//! 1. **Population** walks each frame's cells, decides via `EqualCells`
//!    whether a cell repeats the previous paint of its grid position, and
//!    otherwise decodes up to four palette codes per cell (raw 8-bit codes
//!    or stacked 4-bit displacements) into a tagged pixel buffer.
//! 2. **Synthesis** replays the buffer over a direction-sized canvas,
//!    filling solid cells directly and reading 1- or 2-bit per-pixel stack
//!    indices for mixed cells, then blits each cell into the frame's own
//!    pixel matrix.
//!
//! Afterwards every sub-bitstream must have consumed exactly its declared
//! size; a mismatch aborts the decode.

use std::fmt;

use crate::file::DccError;

use super::bitstream::BitReader;
use super::cell::{CELL_SIZE, Cell, CellGrid};
use super::frame::Frame;
use super::pixel_buffer::{self, PixelBufferEntry};
use super::rect::Rect;

/// Compression-mode flags carried in the direction header.
pub mod compression {
	/// Cells may store raw 8-bit palette codes in a dedicated sub-bitstream
	pub const RAW_PIXEL: u8 = 1;

	/// Cells may be flagged identical to the previous paint of their grid
	/// position and skipped entirely
	pub const EQUAL_CELLS: u8 = 2;
}

mod constants {
	/// Bit width of a declared sub-bitstream size
	pub const STREAM_SIZE_BITS: usize = 20;

	/// Seed for the minimum corner of the bounding-box union
	pub const BOX_MIN_SEED: i32 = 100_000;

	/// Seed for the maximum corner of the bounding-box union
	pub const BOX_MAX_SEED: i32 = -100_000;
}

/// Field-width lookup for the seven 4-bit header indices; the "crazy bit
/// table" of format lore.
const CRAZY_BIT_TABLE: [usize; 16] = [0, 1, 2, 4, 6, 8, 10, 12, 14, 16, 20, 24, 26, 28, 30, 32];

/// Number of stack slots selected by a 4-bit pixel mask (its popcount).
const PIXEL_MASK_LOOKUP: [usize; 16] = [0, 1, 1, 2, 1, 2, 2, 3, 1, 2, 2, 3, 2, 3, 3, 4];

/// Resolves a 4-bit header index to an actual field width.
fn crazy_lookup(index: u32) -> usize {
	CRAZY_BIT_TABLE[index as usize]
}

/// Fixed-width header fields read before the frame headers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DirectionHeader {
	pub out_size_coded: u32,
	pub compression_flags: u8,
	pub variable0_bits: usize,
	pub width_bits: usize,
	pub height_bits: usize,
	pub x_offset_bits: usize,
	pub y_offset_bits: usize,
	pub optional_data_bits: usize,
	pub coded_bytes_bits: usize,
}

impl DirectionHeader {
	fn decode(stream: &mut BitReader<'_>) -> Result<Self, DccError> {
		let out_size_coded = stream.next_bits(32)?;
		let compression_flags = stream.next_bits(2)? as u8;

		Ok(Self {
			out_size_coded,
			compression_flags,
			variable0_bits: crazy_lookup(stream.next_bits(4)?),
			width_bits: crazy_lookup(stream.next_bits(4)?),
			height_bits: crazy_lookup(stream.next_bits(4)?),
			x_offset_bits: crazy_lookup(stream.next_bits(4)?),
			y_offset_bits: crazy_lookup(stream.next_bits(4)?),
			optional_data_bits: crazy_lookup(stream.next_bits(4)?),
			coded_bytes_bits: crazy_lookup(stream.next_bits(4)?),
		})
	}
}

/// Declared bit lengths of the four sized sub-bitstreams.
#[derive(Debug, Clone, Copy, Default)]
struct SubstreamSizes {
	equal_cells: usize,
	pixel_mask: usize,
	encoding_type: usize,
	raw_pixel_codes: usize,
}

impl SubstreamSizes {
	fn decode(stream: &mut BitReader<'_>, compression_flags: u8) -> Result<Self, DccError> {
		let equal_cells = if compression_flags & compression::EQUAL_CELLS != 0 {
			stream.next_bits(constants::STREAM_SIZE_BITS)? as usize
		} else {
			0
		};

		let pixel_mask = stream.next_bits(constants::STREAM_SIZE_BITS)? as usize;

		let (encoding_type, raw_pixel_codes) = if compression_flags & compression::RAW_PIXEL != 0 {
			(
				stream.next_bits(constants::STREAM_SIZE_BITS)? as usize,
				stream.next_bits(constants::STREAM_SIZE_BITS)? as usize,
			)
		} else {
			(0, 0)
		};

		Ok(Self {
			equal_cells,
			pixel_mask,
			encoding_type,
			raw_pixel_codes,
		})
	}
}

/// The five sub-bitstream cursors carved out of a direction body.
///
/// All cursors share the underlying bytes; the declared sizes fix where each
/// stream begins. The trailing stream takes whatever remains.
struct Substreams<'a> {
	equal_cells: BitReader<'a>,
	pixel_mask: BitReader<'a>,
	encoding_type: BitReader<'a>,
	raw_pixel_codes: BitReader<'a>,
	pixel_code_displacement: BitReader<'a>,
}

impl<'a> Substreams<'a> {
	fn carve(stream: &mut BitReader<'a>, sizes: &SubstreamSizes) -> Self {
		let equal_cells = stream.copy();
		stream.offset_bit_position(sizes.equal_cells);

		let pixel_mask = stream.copy();
		stream.offset_bit_position(sizes.pixel_mask);

		let encoding_type = stream.copy();
		stream.offset_bit_position(sizes.encoding_type);

		let raw_pixel_codes = stream.copy();
		stream.offset_bit_position(sizes.raw_pixel_codes);

		let pixel_code_displacement = stream.copy();

		Self {
			equal_cells,
			pixel_mask,
			encoding_type,
			raw_pixel_codes,
			pixel_code_displacement,
		}
	}

	/// Confirms every sized stream consumed exactly its declared length.
	fn verify(&self, sizes: &SubstreamSizes) -> Result<(), DccError> {
		let checks = [
			("EqualCells", self.equal_cells.bits_read(), sizes.equal_cells),
			("PixelMask", self.pixel_mask.bits_read(), sizes.pixel_mask),
			("EncodingType", self.encoding_type.bits_read(), sizes.encoding_type),
			("RawPixelCodes", self.raw_pixel_codes.bits_read(), sizes.raw_pixel_codes),
		];

		for (name, actual, expected) in checks {
			if actual < expected {
				return Err(DccError::BitstreamUnderrun {
					name,
					expected,
					actual,
				});
			}

			if actual > expected {
				return Err(DccError::BitstreamOverrun {
					name,
					expected,
					actual,
				});
			}
		}

		Ok(())
	}
}

/// One decoded viewing angle with its frames.
///
/// Only header fields, the bounding box, the palette-entry map and the
/// frames survive decoding; the cell grids, pixel buffer and canvas are
/// scratch local to the decode call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Direction {
	out_size_coded: u32,
	compression_flags: u8,
	variable0_bits: usize,
	width_bits: usize,
	height_bits: usize,
	x_offset_bits: usize,
	y_offset_bits: usize,
	optional_data_bits: usize,
	coded_bytes_bits: usize,
	equal_cells_bitstream_size: u32,
	pixel_mask_bitstream_size: u32,
	encoding_type_bitstream_size: u32,
	raw_pixel_codes_bitstream_size: u32,
	palette_entries: [u8; 256],
	palette_entry_count: usize,
	bounds: Rect,
	frames: Vec<Frame>,
}

impl Direction {
	/// Decodes one direction from a cursor positioned at its body.
	///
	/// On return the cursor sits just past the bits the body consumed.
	pub(crate) fn decode(
		stream: &mut BitReader<'_>,
		frames_per_direction: u32,
	) -> Result<Self, DccError> {
		let header = DirectionHeader::decode(stream)?;

		let mut bounds = Rect::new(
			constants::BOX_MIN_SEED,
			constants::BOX_MIN_SEED,
			constants::BOX_MAX_SEED,
			constants::BOX_MAX_SEED,
		);

		let mut frames = Vec::with_capacity(frames_per_direction as usize);
		for index in 0..frames_per_direction as usize {
			let frame =
				Frame::decode_header(stream, &header).map_err(|err| err.in_frame(index))?;
			bounds = bounds.union(&frame.bounds());
			frames.push(frame);
		}

		if header.optional_data_bits > 0 {
			return Err(DccError::OptionalDataUnsupported);
		}

		let sizes = SubstreamSizes::decode(stream, header.compression_flags)?;
		let (palette_entries, palette_entry_count) = decode_palette_entries(stream)?;

		if frames.is_empty() {
			// Nothing follows the header of an empty direction
			return Ok(Self::assemble(&header, &sizes, palette_entries, palette_entry_count, Rect::default(), frames));
		}

		let mut streams = Substreams::carve(stream, &sizes);

		let mut direction_grid = CellGrid::for_direction(&bounds);
		let frame_grids: Vec<CellGrid> = frames
			.iter()
			.map(|frame| {
				CellGrid::for_frame(
					&frame.bounds(),
					&bounds,
					frame.width() as i32,
					frame.height() as i32,
				)
			})
			.collect();

		let pixel_buffer = fill_pixel_buffer(
			&sizes,
			&palette_entries,
			&bounds,
			&frames,
			&frame_grids,
			&direction_grid,
			&mut streams,
		)?;

		generate_frames(
			&bounds,
			&mut frames,
			&frame_grids,
			&mut direction_grid,
			&pixel_buffer,
			&mut streams.pixel_code_displacement,
		)?;

		streams.verify(&sizes)?;

		// Account for the trailing stream so the cursor ends where the body does
		stream.offset_bit_position(streams.pixel_code_displacement.bits_read());

		Ok(Self::assemble(&header, &sizes, palette_entries, palette_entry_count, bounds, frames))
	}

	fn assemble(
		header: &DirectionHeader,
		sizes: &SubstreamSizes,
		palette_entries: [u8; 256],
		palette_entry_count: usize,
		bounds: Rect,
		frames: Vec<Frame>,
	) -> Self {
		Self {
			out_size_coded: header.out_size_coded,
			compression_flags: header.compression_flags,
			variable0_bits: header.variable0_bits,
			width_bits: header.width_bits,
			height_bits: header.height_bits,
			x_offset_bits: header.x_offset_bits,
			y_offset_bits: header.y_offset_bits,
			optional_data_bits: header.optional_data_bits,
			coded_bytes_bits: header.coded_bytes_bits,
			equal_cells_bitstream_size: sizes.equal_cells as u32,
			pixel_mask_bitstream_size: sizes.pixel_mask as u32,
			encoding_type_bitstream_size: sizes.encoding_type as u32,
			raw_pixel_codes_bitstream_size: sizes.raw_pixel_codes as u32,
			palette_entries,
			palette_entry_count,
			bounds,
			frames,
		}
	}

	/// Returns the declared byte length of this direction's coded body.
	///
	/// The value is carried through from the file; it is not validated
	/// against the bits actually consumed.
	pub fn out_size_coded(&self) -> u32 {
		self.out_size_coded
	}

	/// Returns the raw compression flag bits.
	pub fn compression_flags(&self) -> u8 {
		self.compression_flags
	}

	/// Returns true if this direction uses equal-cells deduplication.
	pub fn has_equal_cells(&self) -> bool {
		self.compression_flags & compression::EQUAL_CELLS != 0
	}

	/// Returns true if this direction may store raw 8-bit pixel codes.
	pub fn has_raw_pixel_encoding(&self) -> bool {
		self.compression_flags & compression::RAW_PIXEL != 0
	}

	/// Returns the bit width of the discarded per-frame "variable0" field.
	pub fn variable0_bits(&self) -> usize {
		self.variable0_bits
	}

	/// Returns the bit width of the per-frame width field.
	pub fn width_bits(&self) -> usize {
		self.width_bits
	}

	/// Returns the bit width of the per-frame height field.
	pub fn height_bits(&self) -> usize {
		self.height_bits
	}

	/// Returns the bit width of the per-frame x-offset field.
	pub fn x_offset_bits(&self) -> usize {
		self.x_offset_bits
	}

	/// Returns the bit width of the per-frame y-offset field.
	pub fn y_offset_bits(&self) -> usize {
		self.y_offset_bits
	}

	/// Returns the bit width of the per-frame optional-data field (always 0
	/// in files this decoder accepts).
	pub fn optional_data_bits(&self) -> usize {
		self.optional_data_bits
	}

	/// Returns the bit width of the per-frame coded-bytes field.
	pub fn coded_bytes_bits(&self) -> usize {
		self.coded_bytes_bits
	}

	/// Returns the declared bit length of the `EqualCells` sub-bitstream.
	pub fn equal_cells_bitstream_size(&self) -> u32 {
		self.equal_cells_bitstream_size
	}

	/// Returns the declared bit length of the `PixelMask` sub-bitstream.
	pub fn pixel_mask_bitstream_size(&self) -> u32 {
		self.pixel_mask_bitstream_size
	}

	/// Returns the declared bit length of the `EncodingType` sub-bitstream.
	pub fn encoding_type_bitstream_size(&self) -> u32 {
		self.encoding_type_bitstream_size
	}

	/// Returns the declared bit length of the `RawPixelCodes` sub-bitstream.
	pub fn raw_pixel_codes_bitstream_size(&self) -> u32 {
		self.raw_pixel_codes_bitstream_size
	}

	/// Returns the palette entries referenced by this direction, densely
	/// packed in ascending order.
	pub fn palette_entries(&self) -> &[u8] {
		&self.palette_entries[..self.palette_entry_count]
	}

	/// Returns the union bounding box of every frame in this direction.
	pub fn bounds(&self) -> Rect {
		self.bounds
	}

	/// Returns the decoded frames.
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Returns a specific frame by index, or None if out of range.
	pub fn frame(&self, index: usize) -> Option<&Frame> {
		self.frames.get(index)
	}

	/// Returns an iterator over the decoded frames.
	pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
		self.frames.iter()
	}
}

impl<'a> IntoIterator for &'a Direction {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} frames, bounds {}, flags {:#04b}",
			self.frames.len(),
			self.bounds,
			self.compression_flags
		)
	}
}

/// Reads the 256 palette inclusion bits into a densely packed entry table.
fn decode_palette_entries(stream: &mut BitReader<'_>) -> Result<([u8; 256], usize), DccError> {
	let mut entries = [0u8; 256];
	let mut count = 0;

	for index in 0..256u32 {
		if stream.next_bool()? {
			entries[count] = index as u8;
			count += 1;
		}
	}

	Ok((entries, count))
}

/// Population pass: decodes one tagged palette stack per freshly-coded cell.
fn fill_pixel_buffer(
	sizes: &SubstreamSizes,
	palette_entries: &[u8; 256],
	bounds: &Rect,
	frames: &[Frame],
	frame_grids: &[CellGrid],
	direction_grid: &CellGrid,
	streams: &mut Substreams<'_>,
) -> Result<Vec<PixelBufferEntry>, DccError> {
	let capacity: usize = frame_grids.iter().map(|grid| grid.cells.len()).sum();
	let mut buffer = pixel_buffer::new_pixel_buffer(capacity);

	// One slot per shared grid cell, pointing at the latest buffer entry there
	let mut cell_slots: Vec<Option<usize>> = vec![None; direction_grid.cells.len()];
	let mut produced = 0usize;

	for (frame_index, frame) in frames.iter().enumerate() {
		let grid = &frame_grids[frame_index];
		let origin_cell_x = ((frame.bounds().min.x - bounds.min.x) / CELL_SIZE) as usize;
		let origin_cell_y = ((frame.bounds().min.y - bounds.min.y) / CELL_SIZE) as usize;

		for cell_y in 0..grid.vertical_count {
			let current_cell_y = cell_y + origin_cell_y;

			for cell_x in 0..grid.horizontal_count {
				let current_cell =
					origin_cell_x + cell_x + current_cell_y * direction_grid.horizontal_count;

				// Virgin grid positions always code all four stack slots
				let mut pixel_mask = 0x0F;
				if cell_slots[current_cell].is_some() {
					let equal = if sizes.equal_cells > 0 {
						streams.equal_cells.next_bool()?
					} else {
						false
					};

					if equal {
						// Identical to the previous paint of this position
						continue;
					}

					pixel_mask = streams.pixel_mask.next_bits(4)?;
				}

				let stack_depth = PIXEL_MASK_LOOKUP[pixel_mask as usize];
				let encoding_type = if stack_depth != 0 && sizes.encoding_type > 0 {
					streams.encoding_type.next_bits(1)?
				} else {
					0
				};

				let mut pixel_stack = [0u32; 4];
				let mut last_pixel = 0u32;
				let mut decoded = 0usize;

				for slot in 0..stack_depth {
					if encoding_type != 0 {
						pixel_stack[slot] = streams.raw_pixel_codes.next_bits(8)?;
					} else {
						pixel_stack[slot] = last_pixel;

						let mut displacement =
							streams.pixel_code_displacement.next_bits(4)?;
						pixel_stack[slot] += displacement;

						while displacement == 15 {
							displacement = streams.pixel_code_displacement.next_bits(4)?;
							pixel_stack[slot] += displacement;
						}
					}

					if pixel_stack[slot] == last_pixel {
						// A repeated code terminates the stack early
						pixel_stack[slot] = 0;
						break;
					}

					last_pixel = pixel_stack[slot];
					decoded += 1;
				}

				let previous = cell_slots[current_cell]
					.map(|slot| buffer[slot].value)
					.unwrap_or_default();

				let entry = &mut buffer[produced];
				let mut stack_index = decoded as i32 - 1;

				for bit in 0..4 {
					if pixel_mask & (1 << bit) != 0 {
						if stack_index >= 0 {
							entry.value[bit] = pixel_stack[stack_index as usize] as u8;
							stack_index -= 1;
						} else {
							entry.value[bit] = 0;
						}
					} else {
						entry.value[bit] = previous[bit];
					}
				}

				entry.frame = frame_index as i32;
				entry.frame_cell_index = (cell_x + cell_y * grid.horizontal_count) as i32;
				cell_slots[current_cell] = Some(produced);
				produced += 1;
			}
		}
	}

	// Translate packed codes into the direction's actual palette entries
	for entry in &mut buffer[..produced] {
		for value in &mut entry.value {
			*value = palette_entries[*value as usize];
		}
	}

	Ok(buffer)
}

/// Synthesis pass: replays the pixel buffer into per-frame pixel matrices.
fn generate_frames(
	bounds: &Rect,
	frames: &mut [Frame],
	frame_grids: &[CellGrid],
	direction_grid: &mut CellGrid,
	pixel_buffer: &[PixelBufferEntry],
	pcd: &mut BitReader<'_>,
) -> Result<(), DccError> {
	for cell in &mut direction_grid.cells {
		cell.last_width = -1;
		cell.last_height = -1;
	}

	let direction_width = bounds.dx() as usize;
	let mut canvas = vec![0u8; direction_width * bounds.dy() as usize];

	for (frame_index, frame) in frames.iter_mut().enumerate() {
		generate_frame(
			frame_index,
			frame,
			&frame_grids[frame_index],
			direction_grid,
			bounds,
			&mut canvas,
			pixel_buffer,
			pcd,
		)?;
	}

	Ok(())
}

#[allow(clippy::too_many_arguments)]
fn generate_frame(
	frame_index: usize,
	frame: &mut Frame,
	grid: &CellGrid,
	direction_grid: &mut CellGrid,
	bounds: &Rect,
	canvas: &mut [u8],
	pixel_buffer: &[PixelBufferEntry],
	pcd: &mut BitReader<'_>,
) -> Result<(), DccError> {
	let direction_width = bounds.dx() as usize;
	let frame_width = frame.width() as usize;
	let mut pixel_data = vec![0u8; frame_width * frame.height() as usize];

	// Frame origin in direction-local coordinates; cell offsets are
	// direction-local while the frame matrix is frame-local
	let origin_x = frame.bounds().min.x - bounds.min.x;
	let origin_y = frame.bounds().min.y - bounds.min.y;

	let mut pb_index = 0usize;

	for (cell_index, cell) in grid.cells.iter().enumerate() {
		let cell_x = (cell.x_offset / CELL_SIZE) as usize;
		let cell_y = (cell.y_offset / CELL_SIZE) as usize;
		let buffer_index = cell_x + cell_y * direction_grid.horizontal_count;
		let buffer_cell = direction_grid.cells[buffer_index];
		let entry = pixel_buffer[pb_index];

		if entry.frame != frame_index as i32 || entry.frame_cell_index != cell_index as i32 {
			// Equal-cell replay: reuse the previous paint of this position
			if cell.width != buffer_cell.last_width || cell.height != buffer_cell.last_height {
				// Sizes changed, nothing to reuse
				for y in 0..cell.height {
					for x in 0..cell.width {
						let index = (cell.x_offset + x) as usize
							+ (cell.y_offset + y) as usize * direction_width;
						canvas[index] = 0;
					}
				}
			} else {
				// Move the old cell to the new position within the canvas
				for y in 0..cell.height {
					for x in 0..cell.width {
						let src = (buffer_cell.last_x_offset + x) as usize
							+ (buffer_cell.last_y_offset + y) as usize * direction_width;
						let dst = (cell.x_offset + x) as usize
							+ (cell.y_offset + y) as usize * direction_width;
						canvas[dst] = canvas[src];
					}
				}

				blit_cell(canvas, direction_width, &mut pixel_data, frame_width, cell, origin_x, origin_y);
			}
		} else {
			if entry.value[0] == entry.value[1] {
				// Single color, no per-pixel codes
				for y in 0..cell.height {
					for x in 0..cell.width {
						let index = (cell.x_offset + x) as usize
							+ (cell.y_offset + y) as usize * direction_width;
						canvas[index] = entry.value[0];
					}
				}
			} else {
				let bits_to_read = if entry.value[1] != entry.value[2] {
					2
				} else {
					1
				};

				for y in 0..cell.height {
					for x in 0..cell.width {
						let palette_index = pcd.next_bits(bits_to_read)? as usize;
						let index = (cell.x_offset + x) as usize
							+ (cell.y_offset + y) as usize * direction_width;
						canvas[index] = entry.value[palette_index];
					}
				}
			}

			blit_cell(canvas, direction_width, &mut pixel_data, frame_width, cell, origin_x, origin_y);
			pb_index += 1;
		}

		let buffer_cell = &mut direction_grid.cells[buffer_index];
		buffer_cell.last_width = cell.width;
		buffer_cell.last_height = cell.height;
		buffer_cell.last_x_offset = cell.x_offset;
		buffer_cell.last_y_offset = cell.y_offset;
	}

	frame.set_pixel_data(pixel_data);

	Ok(())
}

/// Copies one cell rectangle from the direction canvas into a frame matrix.
fn blit_cell(
	canvas: &[u8],
	direction_width: usize,
	pixel_data: &mut [u8],
	frame_width: usize,
	cell: &Cell,
	origin_x: i32,
	origin_y: i32,
) {
	for y in 0..cell.height {
		for x in 0..cell.width {
			let src = (cell.x_offset + x) as usize + (cell.y_offset + y) as usize * direction_width;
			let dst = (cell.x_offset - origin_x + x) as usize
				+ (cell.y_offset - origin_y + y) as usize * frame_width;
			pixel_data[dst] = canvas[src];
		}
	}
}
