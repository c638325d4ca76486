//! Texture reader backed by the `image` crate.
//!
//! Any raster format the `image` crate can sniff and decode is accepted. The
//! decoded image is converted to RGB8 whatever its original color type:
//! alpha is dropped, grayscale and palette images are expanded and 16-bit
//! samples are scaled down to 8 bits.

use image::GenericImageView;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::texture::reader::TextureReader;
use crate::image_pipeline::texture::types::RgbTexture;

pub struct ImageCrateReader;

impl TextureReader for ImageCrateReader {
    fn read_texture(&self, data: &[u8]) -> Result<RgbTexture> {
        debug!("Decoding texture, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let (width, height) = decoded.dimensions();
        debug!("Decoded {:?} texture: {}x{}", decoded.color(), width, height);

        let rgb = decoded.into_rgb8();

        Ok(RgbTexture {
            width,
            height,
            data: rgb.into_raw(),
        })
    }
}
