//! Prelude module for `dcc_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use dcc_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dcc = DccFile::open("sprite.dcc")?;
//! let frame = dcc.direction(0).and_then(|d| d.frame(0));
//! # Ok(())
//! # }
//! ```

#[doc(inline)]
pub use crate::file::{
	BitReader,
	Cell,
	Color,

	// Error type
	DccError,

	// Container types
	DccFile,
	Direction,
	Frame,

	Palette,
	PalettedImage,
	PixelBufferEntry,

	// Geometry
	Point,
	Rect,
};

#[doc(inline)]
pub use crate::file::dcc::orientation::direction_order;

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
