//! PNG writing module
//!
//! This module encodes remapped textures as RGB8 PNG files.

mod writer;
mod standard_png_writer;
pub mod types;

pub use writer::PngWriter;
pub use standard_png_writer::StandardPngWriter;
pub use types::{PngCompression, PngFilter, ConversionConfig, ConversionConfigBuilder};
