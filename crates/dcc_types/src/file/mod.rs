//! File type support for the `dcc-rs` project.

mod error;

pub mod dcc;

// Re-export unified error type
pub use error::DccError;

// Re-export main file types
pub use dcc::{
	BitReader, Cell, Color, Direction, File as DccFile, Frame, Palette, PalettedImage,
	PixelBufferEntry, Point, Rect,
};
