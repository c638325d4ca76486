use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::texture::types::RgbTexture;

pub trait TextureReader {
    fn read_texture(&self, data: &[u8]) -> Result<RgbTexture>;
}
