//! PNG encoding configuration types

use image::codecs::png::{CompressionType, FilterType};

/// PNG compression levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngCompression {
    /// Fastest encoding, largest file
    Fast,
    /// Encoder default (balanced)
    Default,
    /// Smallest file, slowest encoding
    Best,
}

/// PNG scanline filter strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngFilter {
    NoFilter,
    Sub,
    Up,
    Avg,
    Paeth,
    /// Picks a filter per scanline (default)
    Adaptive,
}

impl From<PngCompression> for CompressionType {
    fn from(compression: PngCompression) -> Self {
        match compression {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        }
    }
}

impl From<PngFilter> for FilterType {
    fn from(filter: PngFilter) -> Self {
        match filter {
            PngFilter::NoFilter => FilterType::NoFilter,
            PngFilter::Sub => FilterType::Sub,
            PngFilter::Up => FilterType::Up,
            PngFilter::Avg => FilterType::Avg,
            PngFilter::Paeth => FilterType::Paeth,
            PngFilter::Adaptive => FilterType::Adaptive,
        }
    }
}

/// Configuration for the specular to metallic-roughness conversion.
///
/// Only the PNG encoder is tunable; the channel permutation is fixed.
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Compression level used for the output PNG
    pub compression: PngCompression,
    /// Scanline filter used for the output PNG
    pub filter: PngFilter,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            compression: PngCompression::Default,
            filter: PngFilter::Adaptive,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    compression: Option<PngCompression>,
    filter: Option<PngFilter>,
}

impl ConversionConfigBuilder {
    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn filter(mut self, filter: PngFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            compression: self.compression.unwrap_or(default.compression),
            filter: self.filter.unwrap_or(default.filter),
        }
    }
}
