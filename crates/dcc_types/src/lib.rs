//! This crate provides the data types and decoding support for the `dcc-rs` project.
//!
//! # File Formats
//!
//! - **DCC**: Densely bit-packed sprite-animation containers holding up to 32
//!   directional animations, each with a fixed number of paletted frames
//!
//! # Examples
//!
//! ```no_run
//! use dcc_types::file::DccFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dcc = DccFile::open("CRHDBRVDTHTH.dcc")?;
//!
//! for direction in dcc.directions() {
//!     println!("{} frames in {:?}", direction.frames().len(), direction.bounds());
//! }
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use file::{
	BitReader, Cell, Color, DccError, DccFile, Direction, Frame, Palette, PalettedImage,
	PixelBufferEntry, Point, Rect,
};
