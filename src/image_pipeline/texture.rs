//! Texture reading module
//!
//! This module decodes input textures into a flat RGB8 pixel buffer.

mod reader;
mod image_reader;
pub mod types;

pub use reader::TextureReader;
pub use image_reader::ImageCrateReader;
pub use types::{Rgb8, RgbTexture, CHANNELS};
