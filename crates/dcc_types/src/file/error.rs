//! Error types for file format parsing and manipulation.

use thiserror::Error;

/// Errors that can occur when decoding DCC files
#[derive(Debug, Error)]
pub enum DccError {
	/// First byte of the file is not the DCC signature
	#[error("unexpected file signature {actual:#04x}, expecting {expected:#04x}")]
	BadSignature {
		/// Signature byte found in the file
		actual: u8,
		/// Signature byte the format requires
		expected: u8,
	},

	/// The 32-bit header check field holds the wrong value
	#[error("sanity check failed: got {actual:#010x}, expecting {expected:#010x}")]
	SanityCheckFailed {
		/// Value found in the file
		actual: u32,
		/// Value the format requires
		expected: u32,
	},

	/// A bit read ran past the end of the underlying buffer
	#[error("bit read past the end of the stream")]
	EndOfStream,

	/// An encoded direction offset points outside the file
	#[error("direction offset greater than length of file ({offset} >= {length})")]
	DirectionOffsetOutOfRange {
		/// Offset read from the direction table
		offset: u32,
		/// Total length of the file in bytes
		length: usize,
	},

	/// The direction declares per-frame optional data, which this decoder refuses
	#[error("optional data bits in DCC data are not supported")]
	OptionalDataUnsupported,

	/// A frame is marked bottom-up, which this decoder refuses
	#[error("bottom-up frames are not supported")]
	BottomUpUnsupported,

	/// A sub-bitstream consumed fewer bits than its declared size
	#[error("{name} bitstream underrun: read {actual} bits but expected to read {expected} bits")]
	BitstreamUnderrun {
		/// Name of the sub-bitstream
		name: &'static str,
		/// Declared size in bits
		expected: usize,
		/// Bits actually consumed
		actual: usize,
	},

	/// A sub-bitstream consumed more bits than its declared size
	#[error("{name} bitstream overrun: read {actual} bits but expected to read {expected} bits")]
	BitstreamOverrun {
		/// Name of the sub-bitstream
		name: &'static str,
		/// Declared size in bits
		expected: usize,
		/// Bits actually consumed
		actual: usize,
	},

	/// A per-frame cell grid computed to an impossible size (reserved; the
	/// grid formulas clamp counts to at least one cell)
	#[error("invalid cell count {horizontal}x{vertical}")]
	InvalidCellCount {
		/// Horizontal cell count
		horizontal: usize,
		/// Vertical cell count
		vertical: usize,
	},

	/// An error occurred while decoding a specific direction
	#[error("direction index {index}: {source}")]
	Direction {
		/// Index of the direction that failed to decode
		index: usize,
		/// Underlying decode error
		#[source]
		source: Box<DccError>,
	},

	/// An error occurred while decoding a specific frame header
	#[error("frame index {index}: {source}")]
	Frame {
		/// Index of the frame that failed to decode
		index: usize,
		/// Underlying decode error
		#[source]
		source: Box<DccError>,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl DccError {
	/// Wraps this error with the index of the direction being decoded.
	pub(crate) fn in_direction(self, index: usize) -> Self {
		Self::Direction {
			index,
			source: Box::new(self),
		}
	}

	/// Wraps this error with the index of the frame being decoded.
	pub(crate) fn in_frame(self, index: usize) -> Self {
		Self::Frame {
			index,
			source: Box::new(self),
		}
	}
}
