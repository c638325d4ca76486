//! Specular to metallic-roughness channel permutation
//!
//! Each output pixel depends on exactly one input pixel:
//! new red = old blue, new green = 255 - old red, new blue = old green.
//! The result puts metallic values in blue and roughness values in green.

use tracing::debug;
use crate::image_pipeline::texture::types::{Rgb8, RgbTexture, CHANNELS};

/// Maps one `(r, g, b)` pixel to `(b, 255 - r, g)`.
#[inline]
pub const fn remap_pixel([r, g, b]: Rgb8) -> Rgb8 {
    [b, u8::MAX - r, g]
}

/// Applies [`remap_pixel`] to every pixel in place. Width, height and pixel
/// order are left untouched.
pub fn remap_texture(texture: &mut RgbTexture) {
    debug!("Remapping {} pixels", texture.pixel_count());

    for px in texture.data.chunks_exact_mut(CHANNELS) {
        let remapped = remap_pixel([px[0], px[1], px[2]]);
        px.copy_from_slice(&remapped);
    }
}
