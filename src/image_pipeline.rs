//! Image processing pipeline module
//!
//! Decoding, channel remapping, output naming and PNG encoding live in
//! separate modules; `conversions` wires them together.

pub mod texture;
pub mod png;
pub mod remap;
pub mod naming;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use texture::{
    Rgb8,
    RgbTexture,
    TextureReader,
    ImageCrateReader,
};

pub use png::{
    PngCompression,
    PngFilter,
    ConversionConfig,
    ConversionConfigBuilder,
    PngWriter,
    StandardPngWriter,
};

pub use remap::{remap_pixel, remap_texture};
pub use naming::derive_output_path;

pub use conversions::{
    SpecularToMrPipeline,
};
