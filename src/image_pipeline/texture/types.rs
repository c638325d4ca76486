//! Texture data types

/// Number of interleaved channels in an [`RgbTexture`].
pub const CHANNELS: usize = 3;

/// One pixel as `[R, G, B]`.
pub type Rgb8 = [u8; CHANNELS];

/// Decoded texture normalized to three 8-bit channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbTexture {
    /// Width of the image in pixels
    pub width: u32,
    /// Height of the image in pixels
    pub height: u32,
    /// Row-major pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u8>,
}

impl RgbTexture {
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Size of `data` the dimensions call for, `None` if it does not fit in
    /// `usize`.
    pub fn expected_len(&self) -> Option<usize> {
        usize::try_from(self.width)
            .ok()?
            .checked_mul(usize::try_from(self.height).ok()?)?
            .checked_mul(CHANNELS)
    }

    pub fn pixels(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| [px[0], px[1], px[2]])
    }
}
