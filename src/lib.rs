#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `dcc-rs` decodes the DCC sprite-animation container format used by a 2D
//! isometric action game: up to 32 directional animations per file, densely
//! bit-packed, decoded into paletted raster frames.
//!
//! The decoding types live in [`dcc_types`]; this crate re-exports them and
//! ships the `dcc-check` and `dcc-convert` command line utilities.

pub use dcc_types::*;
