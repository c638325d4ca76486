//! Remaps specular-convention textures (`*_s.png`) into metallic-roughness
//! textures (`*_mr.png`).
//!
//! The blue channel of the output carries metallic values and the green
//! channel carries roughness values.

pub mod image_pipeline;
pub mod logger;
