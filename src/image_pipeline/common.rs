//! Common utilities module
//!
//! Error types shared by every pipeline stage.

pub mod error;

pub use error::{ConversionError, Result};
