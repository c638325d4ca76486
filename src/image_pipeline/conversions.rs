//! Pipeline conversions module
//!
//! This module contains orchestration logic for texture conversions.

mod specular_to_mr;


pub use specular_to_mr::SpecularToMrPipeline;
