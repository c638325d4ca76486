use std::io::Write;
use image::{ExtendedColorType, ImageEncoder};
use image::codecs::png::PngEncoder;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::png::types::ConversionConfig;
use crate::image_pipeline::png::writer::PngWriter;
use crate::image_pipeline::texture::types::RgbTexture;

pub struct StandardPngWriter;

impl PngWriter for StandardPngWriter {
    fn write_png(&self, texture: &RgbTexture, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!(
            "Encoding PNG image: {}x{} ({:?}, {:?})",
            texture.width, texture.height, config.compression, config.filter
        );

        let expected_len = texture.expected_len().ok_or_else(|| {
            ConversionError::WriteError(format!(
                "{}x{} RGB8 buffer does not fit in memory",
                texture.width, texture.height
            ))
        })?;
        if texture.data.len() != expected_len {
            return Err(ConversionError::WriteError(format!(
                "pixel buffer holds {} bytes, {}x{} RGB8 needs {}",
                texture.data.len(), texture.width, texture.height, expected_len
            )));
        }

        let encoder = PngEncoder::new_with_quality(
            output,
            config.compression.into(),
            config.filter.into(),
        );

        encoder
            .write_image(&texture.data, texture.width, texture.height, ExtendedColorType::Rgb8)
            .map_err(|e| ConversionError::WriteError(e.to_string()))?;

        debug!("PNG encoding complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::png::types::{PngCompression, PngFilter};
    use std::io;

    struct FailingWrite;

    impl Write for FailingWrite {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn checker() -> RgbTexture {
        RgbTexture {
            width: 2,
            height: 2,
            data: vec![
                255, 0, 0, 0, 255, 0,
                0, 0, 255, 255, 255, 255,
            ],
        }
    }

    #[test]
    fn test_written_png_decodes_to_same_pixels() {
        let texture = checker();
        let mut output = Vec::new();
        StandardPngWriter
            .write_png(&texture, &mut output, &ConversionConfig::default())
            .unwrap();

        let decoded = image::load_from_memory(&output).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
        assert_eq!(decoded.into_rgb8().into_raw(), texture.data);
    }

    #[test]
    fn test_every_config_produces_valid_png() {
        let texture = checker();
        for compression in [PngCompression::Fast, PngCompression::Default, PngCompression::Best] {
            for filter in [PngFilter::NoFilter, PngFilter::Paeth, PngFilter::Adaptive] {
                let config = ConversionConfig::builder()
                    .compression(compression)
                    .filter(filter)
                    .build();
                let mut output = Vec::new();
                StandardPngWriter.write_png(&texture, &mut output, &config).unwrap();

                let format = image::guess_format(&output).unwrap();
                assert_eq!(format, image::ImageFormat::Png);
            }
        }
    }

    #[test]
    fn test_failing_sink_is_write_error() {
        let result = StandardPngWriter.write_png(&checker(), &mut FailingWrite, &ConversionConfig::default());

        assert!(matches!(result.unwrap_err(), ConversionError::WriteError(_)));
    }

    #[test]
    fn test_buffer_size_mismatch_is_write_error() {
        let texture = RgbTexture {
            width: 4,
            height: 4,
            data: vec![0; 3],
        };
        let mut output = Vec::new();
        let result = StandardPngWriter.write_png(&texture, &mut output, &ConversionConfig::default());

        assert!(matches!(result.unwrap_err(), ConversionError::WriteError(_)));
    }

    #[test]
    fn test_overflowing_dimensions_are_write_error() {
        let texture = RgbTexture {
            width: u32::MAX,
            height: u32::MAX,
            data: vec![0; 3],
        };
        let mut output = Vec::new();
        let result = StandardPngWriter.write_png(&texture, &mut output, &ConversionConfig::default());

        assert!(matches!(result.unwrap_err(), ConversionError::WriteError(_)));
        assert!(output.is_empty());
    }
}
