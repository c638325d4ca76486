use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::png::types::ConversionConfig;
use crate::image_pipeline::texture::types::RgbTexture;

pub trait PngWriter {
    fn write_png(&self, texture: &RgbTexture, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
