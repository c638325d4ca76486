use tracing::{info, instrument};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    naming::derive_output_path,
    png::{ConversionConfig, PngWriter, StandardPngWriter},
    remap::remap_texture,
    texture::{ImageCrateReader, RgbTexture, TextureReader},
};

/// Decodes a specular-convention texture, remaps its channels and encodes
/// the result as a metallic-roughness PNG.
pub struct SpecularToMrPipeline<R: TextureReader, W: PngWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl SpecularToMrPipeline<ImageCrateReader, StandardPngWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<R: TextureReader, W: PngWriter> SpecularToMrPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn decode_remapped(&self, input_data: &[u8]) -> Result<RgbTexture> {
        let mut texture = {
            let _span = tracing::info_span!("decode_texture").entered();
            self.reader.read_texture(input_data)?
        };

        {
            let _span = tracing::info_span!("remap_channels",
                width = texture.width,
                height = texture.height
            ).entered();
            remap_texture(&mut texture);
        }

        Ok(texture)
    }

    /// In-memory conversion: encoded input bytes in, encoded PNG out.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting specular to metallic-roughness conversion");

        let texture = self.decode_remapped(input_data)?;

        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer.write_png(&texture, output, &self.config)?;
        }

        info!(
            width = texture.width,
            height = texture.height,
            "Conversion complete"
        );
        Ok(())
    }

    /// Reads, decodes and remaps the texture at `input_path`.
    ///
    /// Failing to open or read the file is reported as a decode error, the
    /// same as a file that is not an image.
    #[instrument(skip(self, input_path), fields(input = %input_path.as_ref().display()))]
    pub fn load_remapped<P: AsRef<Path>>(&self, input_path: P) -> Result<RgbTexture> {
        let input_path = input_path.as_ref();

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::DecodeError(format!("{}: {}", input_path.display(), e))
            })?
        };

        self.decode_remapped(&input_data).map_err(|e| match e {
            ConversionError::DecodeError(msg) => {
                ConversionError::DecodeError(format!("{}: {}", input_path.display(), msg))
            }
            other => other,
        })
    }

    /// Encodes `texture` as PNG into a newly created file at `output_path`.
    ///
    /// The file is flushed before returning; on any failure the handle is
    /// dropped (closed) and a write error is returned.
    #[instrument(skip(self, texture, output_path), fields(output = %output_path.as_ref().display()))]
    pub fn write_file<Q: AsRef<Path>>(&self, texture: &RgbTexture, output_path: Q) -> Result<()> {
        let output_path = output_path.as_ref();
        let write_error =
            |msg: String| ConversionError::WriteError(format!("{}: {}", output_path.display(), msg));

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            BufWriter::new(File::create(output_path).map_err(|e| write_error(e.to_string()))?)
        };

        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer
                .write_png(texture, &mut output_file, &self.config)
                .map_err(|e| match e {
                    ConversionError::WriteError(msg) => write_error(msg),
                    other => other,
                })?;
        }

        output_file.flush().map_err(|e| write_error(e.to_string()))?;

        info!(
            width = texture.width,
            height = texture.height,
            "Wrote metallic-roughness texture"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let texture = self.load_remapped(input_path)?;
        self.write_file(&texture, output_path)
    }

    /// Converts `input_path` and writes the result next to it under the
    /// derived `_mr` name, which is returned.
    pub fn remap_file<P: AsRef<Path>>(&self, input_path: P) -> Result<PathBuf> {
        let input_path = input_path.as_ref();
        let output_path = derive_output_path(input_path);

        self.convert_file(input_path, &output_path)?;

        Ok(output_path)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
