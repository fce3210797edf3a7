//! Benchmark helper utilities for dcc-rs
//!
//! This module generates synthetic DCC files for the benchmark suite. Real
//! DCC files are game assets and cannot ship with the repository, so the
//! generator assembles well-formed files bit by bit: solid-color frames with
//! equal-cells deduplication between frames, which exercises the header
//! path, the cell grids, the displacement decoder and the replay blits.

/// Edge length of a DCC compression cell.
const CELL_SIZE: u32 = 4;

/// Bit-level writer matching the decoder's read order: values go out low
/// bit first, filling each byte from bit 0 upward.
struct BitWriter {
	bytes: Vec<u8>,
	bit: usize,
}

impl BitWriter {
	fn new() -> Self {
		Self {
			bytes: Vec::new(),
			bit: 0,
		}
	}

	fn write(&mut self, value: u32, count: usize) {
		for i in 0..count {
			if self.bit == 0 {
				self.bytes.push(0);
			}
			if (value >> i) & 1 != 0 {
				*self.bytes.last_mut().unwrap() |= 1 << self.bit;
			}
			self.bit = (self.bit + 1) % 8;
		}
	}

	fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}
}

/// Cell count along one axis for a frame aligned with the direction grid.
fn cells_along(extent: u32) -> u32 {
	if extent <= CELL_SIZE + 1 {
		return 1;
	}

	let rest = extent - CELL_SIZE - 1;
	let mut count = 2 + rest / CELL_SIZE;
	if rest % CELL_SIZE == 0 {
		count -= 1;
	}

	count
}

/// Generates a synthetic DCC file with solid-color frames.
///
/// Every direction holds `frame_count` identical `width` x `height` frames;
/// frames past the first are deduplicated through the equal-cells stream.
///
/// # Panics
///
/// Panics if any dimension is zero or `frame_count` is zero.
pub fn generate_test_dcc_data(
	direction_count: u8,
	frame_count: u32,
	width: u32,
	height: u32,
) -> Vec<u8> {
	assert!(direction_count > 0 && frame_count > 0 && width > 0 && height > 0);

	let bodies: Vec<Vec<u8>> = (0..direction_count)
		.map(|index| solid_direction_body(1 + index % 200, frame_count, width, height))
		.collect();

	let header_len = 15 + 4 * bodies.len();
	let total = header_len + bodies.iter().map(Vec::len).sum::<usize>();

	let mut data = vec![0x74, 0x06, direction_count];
	data.extend_from_slice(&frame_count.to_le_bytes());
	data.extend_from_slice(&1u32.to_le_bytes());
	data.extend_from_slice(&(total as u32).to_le_bytes());

	let mut offset = header_len;
	for body in &bodies {
		data.extend_from_slice(&(offset as u32).to_le_bytes());
		offset += body.len();
	}

	for body in &bodies {
		data.extend_from_slice(body);
	}

	data
}

/// Builds one direction body of solid `color` frames.
fn solid_direction_body(color: u8, frame_count: u32, width: u32, height: u32) -> Vec<u8> {
	let equal_cells = frame_count > 1;
	let cell_count = cells_along(width) * cells_along(height);

	let mut writer = BitWriter::new();

	writer.write(0, 32); // out_size_coded, informational
	writer.write(if equal_cells { 2 } else { 0 }, 2);

	// Field-width indices: no variable0, 16-bit dimensions and offsets,
	// no optional data, no coded-bytes field
	for index in [0u32, 9, 9, 9, 9, 0, 0] {
		writer.write(index, 4);
	}

	for _ in 0..frame_count {
		writer.write(width, 16);
		writer.write(height, 16);
		writer.write(0, 16); // x offset
		writer.write(height - 1, 16); // y offset: box spans y 0..height
		writer.write(0, 1); // not bottom-up
	}

	if equal_cells {
		writer.write((frame_count - 1) * cell_count, 20);
	}
	writer.write(0, 20); // pixel mask stream is empty

	// Palette inclusion bits: identity map up to the color
	for index in 0..256u32 {
		writer.write(u32::from(index <= u32::from(color)), 1);
	}

	// EqualCells sub-bitstream: every revisited cell repeats
	for _ in 0..(frame_count - 1) * cell_count {
		writer.write(1, 1);
	}

	// PixelCodeAndDisplacement: one displacement stack per cell of the
	// first frame, then one selector bit per pixel
	for _ in 0..cell_count {
		let mut remaining = u32::from(color);
		while remaining >= 15 {
			writer.write(15, 4);
			remaining -= 15;
		}
		writer.write(remaining, 4);
		writer.write(0, 4); // terminator
	}

	for _ in 0..width * height {
		writer.write(0, 1);
	}

	writer.into_bytes()
}

/// Common benchmark sizes for synthetic test data
pub mod sizes {
	/// Tiny sprite: a single cell per frame
	pub const TINY: (u32, u32) = (4, 4);
	/// Small sprite: typical missile or item
	pub const SMALL: (u32, u32) = (64, 64);
	/// Medium sprite: typical character animation
	pub const MEDIUM: (u32, u32) = (128, 128);
	/// Large sprite: oversized boss animation
	pub const LARGE: (u32, u32) = (256, 256);
}

#[cfg(test)]
mod tests {
	use super::*;
	use dcc_types::file::DccFile;

	#[test]
	fn test_generated_data_decodes() {
		let data = generate_test_dcc_data(2, 3, 16, 12);
		let dcc = DccFile::from_bytes(&data).unwrap();

		assert_eq!(dcc.directions().len(), 2);
		assert_eq!(dcc.frames_per_direction(), 3);

		for direction in dcc.directions() {
			assert_eq!(direction.frames().len(), 3);
			for frame in direction.iter() {
				assert_eq!(frame.pixel_data().len(), 16 * 12);
			}
		}
	}

	#[test]
	fn test_generated_frames_are_solid() {
		let data = generate_test_dcc_data(1, 2, 8, 8);
		let dcc = DccFile::from_bytes(&data).unwrap();

		let direction = dcc.direction(0).unwrap();
		let first = direction.frame(0).unwrap();
		assert!(first.pixel_data().iter().all(|&p| p == 1));

		// The second frame replays the first through the equal-cells stream
		assert_eq!(
			direction.frame(1).unwrap().pixel_data(),
			first.pixel_data()
		);
	}

	#[test]
	fn test_cells_along_matches_grid_rules() {
		assert_eq!(cells_along(4), 1);
		assert_eq!(cells_along(5), 1);
		assert_eq!(cells_along(6), 2);
		assert_eq!(cells_along(9), 2);
		assert_eq!(cells_along(64), 16);
	}
}
